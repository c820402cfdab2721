//! The project settings this tooling reads.
//!
//! Projects configure the build in their `package.json`; the host pipeline
//! deserializes the relevant slice of it into [`PackageConfig`] and fills in
//! the defaults for anything not set. Reading and merging the files is the
//! host's job, not ours.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]

use serde::Deserialize;

/// Whether to emit short class names, settable per output domain.
///
/// Projects write either a single boolean covering both domains or an object
/// with one switch per domain, so this deserializes from both shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ShortClasses {
  /// One switch for both domains.
  All(bool),
  /// Separate switches per domain.
  Split {
    /// Class names handed to JS through the module mapping.
    js: bool,
    /// Class names written into the emitted stylesheets.
    pcss: bool,
  },
}

impl ShortClasses {
  /// Whether the JS side uses short class names.
  pub fn js(&self) -> bool {
    match *self {
      Self::All(on) => on,
      Self::Split { js, .. } => js,
    }
  }

  /// Whether the stylesheet side uses short class names.
  pub fn pcss(&self) -> bool {
    match *self {
      Self::All(on) => on,
      Self::Split { pcss, .. } => pcss,
    }
  }
}

impl Default for ShortClasses {
  fn default() -> Self {
    Self::All(true)
  }
}

/// Per-project settings, with a default for anything the project leaves out.
///
/// Keys are camelCase except for `css_folder` and `theme_path`, which have
/// been snake_case in project files since long before this tooling and stay
/// that way. Unknown keys are ignored: this lives inside `package.json`,
/// which is mostly other people's fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageConfig {
  /// Also compress emitted files with brotli.
  pub brotli_files: bool,
  /// Merge the per-entry manifests into one combined JSON file.
  pub combined_json: bool,
  /// Generate enums instead of plain objects in CSS module definitions.
  pub css_enums: bool,
  /// Generate TS definition files next to CSS modules.
  pub css_ts_files: bool,
  /// Where compiled stylesheets land.
  #[serde(rename = "css_folder")]
  pub css_folder: String,
  /// Root of the JS sources.
  pub js_path: String,
  /// Basename of the main stylesheet.
  pub main_css_file_name: String,
  /// Directories watched for stylesheet changes.
  pub pcss_watch: Vec<String>,
  /// Whether to emit short class names. See [`ShortClasses`].
  pub short_css_classes: ShortClasses,
  /// Theme root relative to the working directory.
  #[serde(rename = "theme_path")]
  pub theme_path: String,
  /// Local dev server URL.
  pub url: String,
}

impl Default for PackageConfig {
  fn default() -> Self {
    Self {
      brotli_files: true,
      combined_json: false,
      css_enums: false,
      css_ts_files: true,
      css_folder: "./css/dist/".to_owned(),
      js_path: "./js".to_owned(),
      main_css_file_name: "front-end".to_owned(),
      pcss_watch: vec!["pcss".to_owned(), "template-parts".to_owned()],
      short_css_classes: ShortClasses::default(),
      theme_path: "./".to_owned(),
      url: "http://localhost".to_owned(),
    }
  }
}
