//! Data structures passed between manifest sources, the resolver and templates.

use std::collections::BTreeMap;
use std::fmt;

/// Mapping of logical asset key to its physical files, in rendering order.
pub type Manifest = BTreeMap<String, Vec<String>>;

/// Markup that has already been escaped and can be embedded in a page verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
  /// Wrap markup produced by the tag renderer.
  pub(crate) fn new(markup: String) -> Self {
    Self(markup)
  }

  /// Borrow the markup.
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Returns `true` when nothing was rendered.
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl fmt::Display for Html {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
