//! Error types shared by manifest sources, the resolver and the helpers.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while fetching manifests or resolving asset keys.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The configured manifest source kind is not one this crate understands.
  #[error("unknown manifest source `{0}`, expected `static` or `live`")]
  UnknownSource(String),

  /// Reading the configuration file failed.
  #[error("failed to read configuration {}", .path.display())]
  ConfigRead {
    /// Path that could not be read.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },

  /// The configuration file is not JSON of the expected shape.
  #[error("failed to parse configuration {}", .path.display())]
  ConfigParse {
    /// Path of the configuration file.
    path: PathBuf,
    /// Underlying parse error.
    source: serde_json::Error,
  },

  /// Reading a manifest document from disk failed.
  #[error("failed to read {}", .path.display())]
  Read {
    /// Path that could not be read.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },

  /// Requesting the manifest from the dev server failed.
  #[error("failed to fetch manifest from {url}")]
  Request {
    /// URL that was requested.
    url: String,
    /// Underlying HTTP client error.
    source: Box<ureq::Error>,
  },

  /// A manifest document is not JSON of the expected shape.
  #[error("failed to parse {origin}")]
  Parse {
    /// Path or URL the document came from.
    origin: String,
    /// Underlying parse error.
    source: serde_json::Error,
  },

  /// The logical key is absent from the manifest and missing assets are not ignored.
  #[error("asset file '{key}' not found in manifest")]
  MissingAsset {
    /// Logical key that was requested.
    key: String,
  },
}

impl Error {
  /// Returns `true` when the error came from obtaining the manifest document.
  pub fn is_fetch(&self) -> bool {
    matches!(
      self,
      Self::Read { .. } | Self::Request { .. } | Self::Parse { .. }
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_asset_names_the_key() {
    let err = Error::MissingAsset {
      key: "maiin.js".into(),
    };
    assert!(err.to_string().contains("'maiin.js'"));
    assert!(!err.is_fetch());
  }

  #[test]
  fn read_errors_count_as_fetch_failures() {
    let err = Error::Read {
      path: PathBuf::from("public/webpack/manifest.json"),
      source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.is_fetch());
    assert!(err.to_string().contains("public/webpack/manifest.json"));
  }

  #[test]
  fn messages_leave_the_cause_to_the_source_chain() {
    let err = Error::Read {
      path: PathBuf::from("manifest.json"),
      source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_eq!(err.to_string(), "failed to read manifest.json");
    assert_eq!(
      std::error::Error::source(&err).map(|cause| cause.to_string()),
      Some("gone".to_string())
    );
  }

  #[test]
  fn configuration_errors_are_not_fetch_failures() {
    let err = Error::ConfigRead {
      path: PathBuf::from("assets.config.json"),
      source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(!err.is_fetch());
    assert!(!Error::UnknownSource("bogus".into()).is_fetch());
  }
}
