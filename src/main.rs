//! `assetlink`: resolve build manifest keys from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use asset_manifest::{AssetConfig, AssetResolver, MissingAssetPolicy, SourceKind, logging};

#[derive(Debug, Parser)]
#[command(name = "assetlink", version, about = "Resolve hashed asset URLs and tags from a build manifest")]
struct Cli {
  /// Configuration file; defaults to `assets.config.json` in `--dir`.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Directory searched for `assets.config.json`.
  #[arg(long, default_value = ".")]
  dir: PathBuf,

  /// Manifest source (`static` or `live`).
  #[arg(long)]
  source: Option<SourceKind>,

  /// Build output directory holding `manifest.json`.
  #[arg(long)]
  fs_path: Option<String>,

  /// Dev server `host:port`.
  #[arg(long)]
  host: Option<String>,

  /// Re-read the manifest for every key.
  #[arg(long)]
  live: bool,

  /// URL prefix prepended to every resolved file.
  #[arg(long)]
  asset_host: Option<String>,

  /// Fail on keys missing from the manifest.
  #[arg(long)]
  strict: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Print inclusion tags for each key.
  Tag {
    /// Logical asset keys, e.g. `main.js`.
    #[arg(required = true)]
    keys: Vec<String>,
  },
  /// Print the comma-joined URL for each key.
  Url {
    /// Logical asset keys.
    #[arg(required = true)]
    keys: Vec<String>,
  },
  /// Print every resolved URL on its own line.
  Urls {
    /// Logical asset keys.
    #[arg(required = true)]
    keys: Vec<String>,
  },
  /// Print the whole manifest.
  List,
}

fn main() -> Result<()> {
  if let Err(err) = logging::init() {
    eprintln!("assetlink: logging disabled: {err}");
  }
  let cli = Cli::parse();
  let config = load_config(&cli)?;
  let resolver = AssetResolver::new(config).context("failed to load asset manifest")?;

  match &cli.command {
    Command::Tag { keys } => {
      for key in keys {
        let html = resolver
          .asset_tag(key)
          .with_context(|| format!("failed to render tags for {key}"))?;
        println!("{html}");
      }
    }
    Command::Url { keys } => {
      for key in keys {
        let url = resolver
          .asset_url(key)
          .with_context(|| format!("failed to resolve {key}"))?;
        println!("{url}");
      }
    }
    Command::Urls { keys } => {
      for key in keys {
        for url in resolver
          .asset_urls(key)
          .with_context(|| format!("failed to resolve {key}"))?
        {
          println!("{url}");
        }
      }
    }
    Command::List => {
      let manifest = resolver.manifest().context("failed to read asset manifest")?;
      for (key, files) in manifest.iter() {
        println!("{key}: {}", files.join(", "));
      }
    }
  }

  Ok(())
}

fn load_config(cli: &Cli) -> Result<AssetConfig> {
  let mut config = match &cli.config {
    Some(path) => AssetConfig::from_path(path)
      .with_context(|| format!("failed to load {}", path.display()))?,
    None => AssetConfig::discover(&cli.dir)
      .with_context(|| format!("failed to load configuration from {}", cli.dir.display()))?,
  };

  if let Some(source) = cli.source {
    config.source = source;
  }
  if let Some(fs_path) = &cli.fs_path {
    config.fs_path = fs_path.clone();
  }
  if let Some(host) = &cli.host {
    config.dev_host = host.clone();
  }
  if let Some(asset_host) = &cli.asset_host {
    config.asset_host = Some(asset_host.clone());
  }
  if cli.live {
    config.live_reload = true;
  }
  if cli.strict {
    config.missing = MissingAssetPolicy::Fail;
  }

  if config.live_reload && config.source == SourceKind::Live {
    tracing::info!(url = %config.dev_server_url(), "reading stats from dev server");
  }
  tracing::debug!(?config, "resolved asset configuration");
  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn flags_override_config_file() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join("assets.config.json"),
      r#"{"source": "static", "fs_path": "from-file", "dev_host": "file:1", "missing": "ignore"}"#,
    )
    .unwrap();
    let dir_arg = dir.path().display().to_string();

    let cli = Cli::try_parse_from([
      "assetlink",
      "--dir",
      dir_arg.as_str(),
      "--source",
      "stats",
      "--host",
      "localhost:9000",
      "--asset-host",
      "//cdn.com/",
      "--live",
      "--strict",
      "urls",
      "main.js",
    ])
    .unwrap();
    let config = load_config(&cli).unwrap();

    assert_eq!(config.source, SourceKind::Live);
    assert_eq!(config.fs_path, "from-file");
    assert_eq!(config.dev_host, "localhost:9000");
    assert_eq!(config.asset_host(), Some("//cdn.com/"));
    assert!(config.live_reload);
    assert_eq!(config.missing, MissingAssetPolicy::Fail);
  }

  #[test]
  fn config_file_applies_without_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{"fs_path": "public/packs", "verbose": false}"#).unwrap();
    let path_arg = path.display().to_string();

    let cli = Cli::try_parse_from(["assetlink", "--config", path_arg.as_str(), "list"]).unwrap();
    let config = load_config(&cli).unwrap();

    assert_eq!(config.fs_path, "public/packs");
    assert!(!config.verbose);
    assert!(!config.live_reload);
    assert!(config.ignores_missing());
  }

  #[test]
  fn rejects_unknown_source_flag() {
    let result = Cli::try_parse_from(["assetlink", "--source", "bogus", "list"]);
    assert!(result.is_err());
  }
}
