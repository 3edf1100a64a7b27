//! Resolver configuration and its on-disk JSON representation.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File name searched for by [`AssetConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "assets.config.json";

/// Which document the manifest is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SourceKind {
  /// `manifest.json` written by the build into the output directory.
  #[default]
  Static,
  /// Stats document served by a running dev server.
  Live,
}

impl TryFrom<String> for SourceKind {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> {
    value.parse()
  }
}

impl FromStr for SourceKind {
  type Err = Error;

  fn from_str(value: &str) -> Result<Self> {
    match value {
      "static" | "manifest" => Ok(Self::Static),
      "live" | "stats" => Ok(Self::Live),
      other => Err(Error::UnknownSource(other.to_string())),
    }
  }
}

impl fmt::Display for SourceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Static => f.write_str("static"),
      Self::Live => f.write_str("live"),
    }
  }
}

/// What happens when a logical key is absent from the manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingAssetPolicy {
  /// Resolve to nothing; the page renders without the asset.
  #[default]
  Ignore,
  /// Return [`Error::MissingAsset`] to the caller.
  Fail,
}

/// Immutable configuration handed to [`crate::AssetResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
  /// Document format the manifest is read from.
  pub source: SourceKind,
  /// Dev server `host:port`.
  pub dev_host: String,
  /// Filesystem directory holding the build output.
  pub fs_path: String,
  /// Public web path of the build output.
  pub web_path: String,
  /// Policy applied to keys that are not in the manifest.
  pub missing: MissingAssetPolicy,
  /// Dump the manifest contents when a key is missing.
  pub verbose: bool,
  /// Re-read the manifest on every resolution instead of caching it.
  pub live_reload: bool,
  /// Optional URL prefix (usually a CDN origin) prepended to every resolved file.
  pub asset_host: Option<String>,
}

impl Default for AssetConfig {
  fn default() -> Self {
    Self {
      source: SourceKind::Static,
      dev_host: "localhost:3808".into(),
      fs_path: "./public/webpack".into(),
      web_path: "webpack".into(),
      missing: MissingAssetPolicy::Ignore,
      verbose: true,
      live_reload: false,
      asset_host: None,
    }
  }
}

impl AssetConfig {
  /// Production setup reading a static `manifest.json` once.
  pub fn basic(
    dev_host: impl Into<String>,
    fs_path: impl Into<String>,
    web_path: impl Into<String>,
  ) -> Self {
    Self {
      dev_host: dev_host.into(),
      fs_path: fs_path.into(),
      web_path: web_path.into(),
      ..Self::default()
    }
  }

  /// Load `assets.config.json` from `dir`, falling back to defaults when it does not exist.
  pub fn discover(dir: &Path) -> Result<Self> {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.exists() {
      return Ok(Self::default());
    }
    Self::from_path(&candidate)
  }

  /// Read configuration from a specific JSON file.
  ///
  /// An unrecognised `source` is reported as [`Error::UnknownSource`] rather than a parse
  /// failure.
  pub fn from_path(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
      path: path.to_path_buf(),
      source,
    })?;
    let parse_error = |source: serde_json::Error| Error::ConfigParse {
      path: path.to_path_buf(),
      source,
    };

    let value: serde_json::Value = serde_json::from_str(&content).map_err(parse_error)?;
    if let Some(name) = value.get("source").and_then(serde_json::Value::as_str) {
      name.parse::<SourceKind>()?;
    }
    serde_json::from_value(value).map_err(parse_error)
  }

  /// The configured URL prefix, treating an empty string as unset.
  pub fn asset_host(&self) -> Option<&str> {
    self.asset_host.as_deref().filter(|host| !host.is_empty())
  }

  /// Whether absent keys resolve silently.
  pub fn ignores_missing(&self) -> bool {
    self.missing == MissingAssetPolicy::Ignore
  }

  /// URL the dev server publishes its stats document on.
  pub fn dev_server_url(&self) -> String {
    crate::source::dev_server_url(&self.dev_host, &self.web_path)
  }
}
