//! Stats documents grouping emitted files by chunk name.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Manifest;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsDocument {
  assets_by_chunk_name: BTreeMap<String, ChunkFiles>,
  #[serde(default)]
  public_path: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChunkFiles {
  One(String),
  Many(Vec<String>),
}

impl ChunkFiles {
  fn into_vec(self) -> Vec<String> {
    match self {
      Self::One(file) => vec![file],
      Self::Many(files) => files,
    }
  }
}

/// Read the stats document from the dev server (`live`) or from `{fs_path}/manifest.json`.
pub fn read_stats(live: bool, dev_host: &str, fs_path: &str, web_path: &str) -> Result<Manifest> {
  if live {
    let url = dev_server_url(dev_host, web_path);
    let response = ureq::get(&url).call().map_err(|source| Error::Request {
      url: url.clone(),
      source: Box::new(source),
    })?;
    let document: StatsDocument =
      serde_json::from_reader(response.into_reader()).map_err(|source| Error::Parse {
        origin: url.clone(),
        source,
      })?;
    return Ok(group_by_extension(document));
  }

  let path = Path::new(fs_path).join("manifest.json");
  let content = fs::read_to_string(&path).map_err(|source| Error::Read {
    path: path.clone(),
    source,
  })?;
  parse_stats(&content, &path.display().to_string())
}

/// URL a dev server publishes its stats document on.
pub(crate) fn dev_server_url(dev_host: &str, web_path: &str) -> String {
  format!(
    "http://{}/{}/manifest.json",
    dev_host,
    web_path.trim_matches('/')
  )
}

/// Parse a stats document, keying each file by `chunk.extension`.
pub fn parse_stats(content: &str, origin: &str) -> Result<Manifest> {
  let document: StatsDocument = serde_json::from_str(content).map_err(|source| Error::Parse {
    origin: origin.to_string(),
    source,
  })?;
  Ok(group_by_extension(document))
}

fn group_by_extension(document: StatsDocument) -> Manifest {
  let mut manifest = Manifest::new();
  for (chunk, files) in document.assets_by_chunk_name {
    for file in files.into_vec() {
      let Some(extension) = Path::new(&file).extension().and_then(|ext| ext.to_str()) else {
        continue;
      };
      manifest
        .entry(format!("{chunk}.{extension}"))
        .or_default()
        .push(format!("{}{}", document.public_path, file));
    }
  }
  manifest
}
