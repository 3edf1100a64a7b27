//! HTML fragments for each supported asset kind.

use html_escape::encode_double_quoted_attribute;

/// Asset kinds the renderer knows how to include in a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
  /// Stylesheet, rendered as a `<link>`.
  Css,
  /// Script, rendered as a `<script>`.
  Js,
  /// PNG image, rendered as an `<img>`.
  Png,
  /// SVG image, rendered as an `<img>`.
  Svg,
}

impl AssetKind {
  /// Every supported kind.
  pub const ALL: [Self; 4] = [Self::Css, Self::Js, Self::Png, Self::Svg];

  /// Map a file extension (without the dot) to its kind.
  pub fn from_extension(extension: &str) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|kind| kind.extension() == extension)
  }

  /// File extension (without the dot) for this kind.
  pub fn extension(self) -> &'static str {
    match self {
      Self::Css => "css",
      Self::Js => "js",
      Self::Png => "png",
      Self::Svg => "svg",
    }
  }

  /// Render the inclusion tag for `url`, escaping it for a double-quoted attribute.
  pub fn render(self, url: &str) -> String {
    let url = encode_double_quoted_attribute(url);
    match self {
      Self::Css => format!(r#"<link type="text/css" rel="stylesheet" href="{url}"></link>"#),
      Self::Js => format!(r#"<script type="text/javascript" src="{url}"></script>"#),
      Self::Png | Self::Svg => format!(r#"<img src="{url}"></img>"#),
    }
  }
}

/// Render the tag for a file extension, returning an empty string for unsupported kinds.
pub fn render_tag(kind: &str, url: &str) -> String {
  match AssetKind::from_extension(kind) {
    Some(kind) => kind.render(url),
    None => {
      tracing::warn!(kind, url, "unsupported asset kind");
      String::new()
    }
  }
}
