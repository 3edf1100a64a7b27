//! Logical-key resolution against a cached or freshly read manifest.

use std::borrow::Cow;

use crate::config::AssetConfig;
use crate::error::{Error, Result};
use crate::models::Manifest;
use crate::source::{ConfiguredSource, ManifestSource};

/// Resolves logical asset keys into physical URLs.
///
/// With live reload disabled the manifest is read once during construction and never
/// touched again, so a shared `&AssetResolver` can serve concurrent requests. With live
/// reload enabled every call reads the source afresh.
#[derive(Debug)]
pub struct AssetResolver<S = ConfiguredSource> {
  config: AssetConfig,
  source: S,
  preloaded: Option<Manifest>,
}

impl AssetResolver<ConfiguredSource> {
  /// Build a resolver reading the document selected by `config`.
  pub fn new(config: AssetConfig) -> Result<Self> {
    let source = ConfiguredSource::new(&config);
    Self::with_source(config, source)
  }
}

impl<S: ManifestSource> AssetResolver<S> {
  /// Build a resolver over an arbitrary manifest source.
  ///
  /// In live mode the source is read once to surface a misconfigured dev server early; a
  /// failure is logged and construction still succeeds. Otherwise the manifest is
  /// preloaded and a failure is returned.
  pub fn with_source(config: AssetConfig, source: S) -> Result<Self> {
    let preloaded = if config.live_reload {
      if let Err(err) = source.fetch() {
        tracing::warn!(error = %err, "asset manifest is not available yet");
      }
      None
    } else {
      Some(source.fetch()?)
    };

    Ok(Self {
      config,
      source,
      preloaded,
    })
  }

  /// Configuration the resolver was built with.
  pub fn config(&self) -> &AssetConfig {
    &self.config
  }

  /// Whether every resolution re-reads the manifest.
  pub fn is_live(&self) -> bool {
    self.preloaded.is_none()
  }

  /// The manifest a resolution would currently use.
  pub fn manifest(&self) -> Result<Cow<'_, Manifest>> {
    match &self.preloaded {
      Some(manifest) => Ok(Cow::Borrowed(manifest)),
      None => self.source.fetch().map(Cow::Owned),
    }
  }

  /// Resolve `key` into the URLs whose extension matches the key's own.
  pub fn resolve(&self, key: &str) -> Result<Vec<String>> {
    let kind = kind_of(key);
    let manifest = self.manifest()?;

    let Some(files) = manifest.get(key) else {
      return self.missing(key, &manifest);
    };

    let suffix = format!(".{kind}");
    let host = self.config.asset_host();
    let mut urls = Vec::with_capacity(files.len());
    for file in files {
      if !file.ends_with(&suffix) {
        tracing::warn!(key, file = %file, "skip asset: bad type");
        continue;
      }
      urls.push(match host {
        Some(host) => format!("{host}{file}"),
        None => file.clone(),
      });
    }

    Ok(urls)
  }

  fn missing(&self, key: &str, manifest: &Manifest) -> Result<Vec<String>> {
    if self.config.verbose {
      tracing::warn!(key, "asset file not found in manifest, manifest contents:");
      for (name, files) in manifest {
        tracing::info!("{name}: {files:?}");
      }
    }

    if self.config.ignores_missing() {
      Ok(Vec::new())
    } else {
      Err(Error::MissingAsset {
        key: key.to_string(),
      })
    }
  }
}

/// Extension-derived kind of a logical key: the text after the final `.`, or the whole key.
pub fn kind_of(key: &str) -> &str {
  key.rsplit('.').next().unwrap_or(key)
}
