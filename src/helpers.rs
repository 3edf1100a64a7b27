//! Template-facing helpers combining resolution and tag rendering.

use crate::error::Result;
use crate::models::Html;
use crate::resolver::{AssetResolver, kind_of};
use crate::source::ManifestSource;
use crate::tags::render_tag;

impl<S: ManifestSource> AssetResolver<S> {
  /// Render the inclusion tags for `key`, one per resolved file, separated by newlines.
  pub fn asset_tag(&self, key: &str) -> Result<Html> {
    let kind = kind_of(key);
    let tags: Vec<String> = self
      .resolve(key)?
      .iter()
      .map(|url| render_tag(kind, url))
      .collect();
    Ok(Html::new(tags.join("\n")))
  }

  /// Resolved URLs for `key` joined with commas.
  ///
  /// Only meaningful for keys that resolve to a single file; a comma-joined list is not a
  /// usable URL. Use [`AssetResolver::asset_urls`] when a key may map to several files.
  pub fn asset_url(&self, key: &str) -> Result<String> {
    Ok(self.resolve(key)?.join(","))
  }

  /// Resolved URLs for `key`, in manifest order.
  pub fn asset_urls(&self, key: &str) -> Result<Vec<String>> {
    self.resolve(key)
  }
}
