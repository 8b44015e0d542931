//! License header shared by generated sources. Loaded once per run; the
//! line count drives the automatic line-range exclusion in source blocks.

use jiff::Zoned;

/// The license header text and its line count.
///
/// An empty header (no license configured) reports zero lines and disables
/// the exclusion.
#[derive(Debug, Clone, Default)]
pub struct License {
  text: String,
  number_of_lines: usize,
}

impl License {
  /// Builds a license from the raw header file content, substituting
  /// `$YEAR` with the current year.
  #[must_use]
  pub fn from_header(text: &str) -> Self {
    let year = Zoned::now().date().year();
    let text = text.replace("$YEAR", &year.to_string());
    let number_of_lines = if text.is_empty() {
      0
    } else {
      text.lines().count() + 1
    };
    Self {
      text,
      number_of_lines,
    }
  }

  #[must_use]
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Number of header lines to skip when including a source file,
  /// including the blank separator line after the header.
  #[must_use]
  pub const fn number_of_lines(&self) -> usize {
    self.number_of_lines
  }
}
