//! Manifest sources.
//!
//! The resolver only sees the [`ManifestSource`] trait. The configured implementation picks
//! between the static `manifest.json` written by a production build and the stats document
//! published by a dev server, and returns a freshly read mapping on every call. Caching is
//! the resolver's business.

mod stats;
mod static_file;

pub use stats::{parse_stats, read_stats};
pub(crate) use stats::dev_server_url;
pub use static_file::{parse_static_manifest, read_static_manifest};

use crate::config::{AssetConfig, SourceKind};
use crate::error::Result;
use crate::models::Manifest;

/// Anything able to produce the logical-key-to-files mapping.
pub trait ManifestSource {
  /// Produce a fresh copy of the manifest.
  fn fetch(&self) -> Result<Manifest>;
}

impl ManifestSource for Manifest {
  fn fetch(&self) -> Result<Manifest> {
    Ok(self.clone())
  }
}

/// Source reading the document selected by an [`AssetConfig`].
#[derive(Debug, Clone)]
pub struct ConfiguredSource {
  source: SourceKind,
  dev_host: String,
  fs_path: String,
  web_path: String,
  live_reload: bool,
}

impl ConfiguredSource {
  /// Capture the source-related fields of `config`.
  pub fn new(config: &AssetConfig) -> Self {
    Self {
      source: config.source,
      dev_host: config.dev_host.clone(),
      fs_path: config.fs_path.clone(),
      web_path: config.web_path.clone(),
      live_reload: config.live_reload,
    }
  }
}

impl ManifestSource for ConfiguredSource {
  fn fetch(&self) -> Result<Manifest> {
    fetch_manifest(
      self.source,
      &self.dev_host,
      &self.fs_path,
      &self.web_path,
      self.live_reload,
    )
  }
}

/// Read the manifest in the given format.
///
/// Stats documents come from the dev server when `live_reload` is set and from `fs_path`
/// otherwise. Static manifests are always read from `fs_path`.
pub fn fetch_manifest(
  source: SourceKind,
  dev_host: &str,
  fs_path: &str,
  web_path: &str,
  live_reload: bool,
) -> Result<Manifest> {
  tracing::debug!(%source, dev_host, fs_path, live_reload, "fetching asset manifest");
  match source {
    SourceKind::Static => read_static_manifest(fs_path),
    SourceKind::Live => read_stats(live_reload, dev_host, fs_path, web_path),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn manifest_values_act_as_sources() {
    let manifest = Manifest::from([("main.js".to_string(), vec!["main.1.js".to_string()])]);
    assert_eq!(manifest.fetch().unwrap(), manifest);
  }

  #[test]
  fn configured_source_dispatches_on_kind() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join("manifest.json"),
      r#"{"main.js": "/webpack/main.abc.js"}"#,
    )
    .unwrap();

    let config = AssetConfig {
      fs_path: dir.path().display().to_string(),
      ..AssetConfig::default()
    };
    let manifest = ConfiguredSource::new(&config).fetch().unwrap();
    assert_eq!(manifest["main.js"], vec!["/webpack/main.abc.js".to_string()]);

    let config = AssetConfig {
      source: SourceKind::Live,
      ..config
    };
    let err = ConfiguredSource::new(&config).fetch().unwrap_err();
    assert!(err.is_fetch(), "a flat object is not a stats document: {err}");
  }
}
