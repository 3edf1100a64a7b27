//! Log output for the `assetlink` binary.

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Install a compact stderr subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Library code only emits `tracing` events; embedders that already install a subscriber
/// should not call this.
pub fn init() -> Result<(), BoxError> {
  subscriber()?.try_init()?;
  Ok(())
}

fn subscriber() -> Result<impl Subscriber + Send + Sync + 'static, BoxError> {
  let fmt_layer = fmt::layer()
    .with_writer(std::io::stderr)
    .with_target(false)
    .with_level(true)
    .compact();

  let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

  Ok(
    tracing_subscriber::registry()
      .with(filter_layer)
      .with(fmt_layer),
  )
}
