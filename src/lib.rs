#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod error;
mod helpers;
pub mod logging;
pub mod models;
pub mod resolver;
pub mod source;
pub mod tags;

pub use config::{AssetConfig, MissingAssetPolicy, SourceKind};
pub use error::{Error, Result};
pub use models::{Html, Manifest};
pub use resolver::AssetResolver;
pub use source::{ConfiguredSource, ManifestSource, fetch_manifest};
pub use tags::{AssetKind, render_tag};
