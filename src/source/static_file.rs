//! `manifest.json` documents mapping each logical name to one hashed file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Manifest;

/// Read `{fs_path}/manifest.json`.
pub fn read_static_manifest(fs_path: &str) -> Result<Manifest> {
  let path = Path::new(fs_path).join("manifest.json");
  let content = fs::read_to_string(&path).map_err(|source| Error::Read {
    path: path.clone(),
    source,
  })?;
  parse_static_manifest(&content, &path.display().to_string())
}

/// Parse a flat `{"logical": "physical"}` object, wrapping each file in a one-element list.
pub fn parse_static_manifest(content: &str, origin: &str) -> Result<Manifest> {
  let entries: BTreeMap<String, String> =
    serde_json::from_str(content).map_err(|source| Error::Parse {
      origin: origin.to_string(),
      source,
    })?;

  Ok(
    entries
      .into_iter()
      .map(|(key, file)| (key, vec![file]))
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn wraps_each_file_in_a_list() {
    let manifest = parse_static_manifest(
      r#"{"main.js": "main.1a2b.js", "main.css": "main.3c4d.css"}"#,
      "inline",
    )
    .unwrap();

    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest["main.js"], vec!["main.1a2b.js".to_string()]);
    assert_eq!(manifest["main.css"], vec!["main.3c4d.css".to_string()]);
  }

  #[test]
  fn rejects_nested_values() {
    let err = parse_static_manifest(r#"{"main.js": ["a.js"]}"#, "inline").unwrap_err();
    assert!(matches!(err, Error::Parse { ref origin, .. } if origin == "inline"));
  }

  #[test]
  fn reports_missing_file_path() {
    let dir = tempdir().unwrap();
    let err = read_static_manifest(&dir.path().display().to_string()).unwrap_err();
    match err {
      Error::Read { path, .. } => assert!(path.ends_with("manifest.json")),
      other => panic!("unexpected error: {other}"),
    }
  }
}
