//! Locates macro occurrences in raw guide markup: single lines, inline
//! placeholder instances, fenced groups and nested start/end group regions.

use log::error;
use regex::Regex;

use crate::{
  error::{Error, Result},
  options::GuidesOption,
};

/// Create a regex that never matches anything.
///
/// Fallback for dynamically built patterns that fail to compile; safer than
/// a trivial pattern like `^$`, which would match empty strings.
#[must_use]
pub fn never_matching_regex() -> Regex {
  #[allow(clippy::expect_used, reason = "pattern is a literal")]
  Regex::new(r"[^\s\S]").expect("Failed to compile never-matching regex")
}

/// Compile a dynamically built pattern, logging and falling back to a
/// never-matching regex on error.
#[must_use]
pub fn compile_or_never(pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    error!("Failed to compile regex '{pattern}': {e}");
    never_matching_regex()
  })
}

/// Directory name holding one option's generated project:
/// `{slug}-{buildTool}-{language}`.
#[must_use]
pub fn source_dir(slug: &str, option: &GuidesOption) -> String {
  format!("{slug}-{}-{}", option.build_tool, option.language)
}

/// Returns every line starting with `"{name}:"`, in document order.
#[must_use]
pub fn find_macro_lines(text: &str, name: &str) -> Vec<String> {
  let prefix = format!("{name}:");
  text
    .lines()
    .filter(|line| line.starts_with(&prefix))
    .map(str::to_owned)
    .collect()
}

/// Returns every match of the pattern, in document order.
#[must_use]
pub fn find_macro_instances(text: &str, pattern: &Regex) -> Vec<String> {
  pattern
    .find_iter(text)
    .map(|m| m.as_str().to_owned())
    .collect()
}

/// Returns every maximal substring between two consecutive occurrences of
/// the bare `":{name}:"` delimiter, both delimiters included.
#[must_use]
pub fn find_macro_groups(text: &str, name: &str) -> Vec<String> {
  let delimiter = format!(":{name}:");
  let mut matches = Vec::new();
  let mut search_from = 0;

  while let Some(start) = text[search_from..].find(&delimiter) {
    let start = search_from + start;
    let body_from = start + delimiter.len();
    let Some(end) = text[body_from..].find(&delimiter) else {
      break;
    };
    let end = body_from + end + delimiter.len();
    matches.push(text[start..end].to_owned());
    search_from = end;
  }

  matches
}

/// Extracts the comma-separated parameters from a group's opening line.
#[must_use]
pub fn extract_group_parameters(line: &str, name: &str) -> Vec<String> {
  line[name.len() + 2..]
    .split(',')
    .filter(|parameter| !parameter.is_empty())
    .map(str::to_owned)
    .collect()
}

/// Finds nested group-macro regions, innermost first.
///
/// A line that is exactly the `:{name}:` delimiter followed by alphanumeric
/// or comma parameters opens a group; a line that is exactly the bare
/// delimiter closes the innermost open one. Each returned group spans both
/// marker lines inclusive. A close marker with no open group is fatal: the
/// engine refuses to guess pairing.
///
/// The start/end detection is a deliberate heuristic; a macro name that is
/// a prefix of another could in principle mis-detect, and that behavior is
/// kept as-is.
pub fn find_macro_groups_nested(
  text: &str,
  name: &str,
) -> Result<Vec<Vec<String>>> {
  let delimiter = format!(":{}:", regex::escape(name));
  let start = compile_or_never(&format!("^{delimiter}[a-zA-Z0-9,]+$"));
  let end = compile_or_never(&format!("^{delimiter}$"));

  let lines: Vec<&str> = text.lines().collect();
  let mut stack: Vec<usize> = Vec::new();
  let mut matches = Vec::new();

  for (i, line) in lines.iter().enumerate() {
    if start.is_match(line) {
      stack.push(i);
    } else if end.is_match(line) {
      let Some(opened) = stack.pop() else {
        return Err(Error::UnbalancedMacroGroup {
          macro_name: name.to_owned(),
        });
      };
      matches.push(lines[opened..=i].iter().map(|l| (*l).to_owned()).collect());
    }
  }

  Ok(matches)
}

/// Maps a file extension to the language annotation Asciidoctor expects on
/// a source block.
#[must_use]
pub fn asciidoctor_language_for_extension(extension: &str) -> String {
  let lower = extension.to_lowercase();
  match lower.as_str() {
    "yml" | "yaml" => "yaml".to_owned(),
    "html" | "vm" | "hbs" => "html".to_owned(),
    "xml" => "xml".to_owned(),
    _ => lower,
  }
}
