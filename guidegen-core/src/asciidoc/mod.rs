//! Asciidoc macro grammar: the textual forms the substitution rules parse
//! out of guide markup, plus the directives they emit back into it.

mod include;
mod source_block;

pub use include::{Argument, IncludeDirective, Range, ATTRIBUTE_LINES};
pub use source_block::SourceBlock;

pub const MACRO_NAME_SEPARATOR: &str = ":";
pub const ATTRIBUTE_SEPARATOR: &str = ",";
const VALUE_SEPARATOR: char = ';';
const KEY_VALUE_SEPARATOR: char = '=';
const MACRO_OPEN_BRACKET: char = '[';
const MACRO_CLOSE_BRACKET: char = ']';
const PLACEHOLDER_BRACKET: &str = "@";

/// One `key=value` attribute of a line macro. The value is `;`-delimited
/// into a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
  pub key: String,
  pub values: Vec<String>,
}

impl Attribute {
  /// Parses a `,`-delimited attribute list.
  ///
  /// Any segment that is not a `key=value` pair is silently dropped. That
  /// looseness is part of the macro surface, not a defect: malformed
  /// tokens never abort a render.
  #[must_use]
  pub fn parse_list(str_: &str) -> Vec<Self> {
    let mut result = Vec::new();
    for segment in str_.split(ATTRIBUTE_SEPARATOR) {
      let mut parts = segment.splitn(2, KEY_VALUE_SEPARATOR);
      let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
        continue;
      };
      let key = key.trim();
      let value = value.trim();
      if key.is_empty() || value.is_empty() {
        continue;
      }
      result.push(Self {
        key: key.to_owned(),
        values: value.split(VALUE_SEPARATOR).map(str::to_owned).collect(),
      });
    }
    result
  }

  /// First value of the attribute, if any.
  #[must_use]
  pub fn first_value(&self) -> Option<&str> {
    self.values.first().map(String::as_str)
  }
}

/// A parsed line macro: `name:target[attr=val,...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
  pub name: String,
  pub target: String,
  pub attributes: Vec<Attribute>,
  /// The full line the macro was parsed from.
  pub raw: String,
}

impl Macro {
  /// Parses a line-macro occurrence for the expected name, or `None` when
  /// the line is not one.
  #[must_use]
  pub fn parse(name: &str, line: &str) -> Option<Self> {
    let prefix = format!("{name}{MACRO_NAME_SEPARATOR}");
    let rest = line.strip_prefix(&prefix)?;
    let bracket = rest.find(MACRO_OPEN_BRACKET)?;
    let closing = rest.find(MACRO_CLOSE_BRACKET)?;
    if closing < bracket {
      return None;
    }
    let target = rest[..bracket].to_owned();
    let attributes = Attribute::parse_list(&rest[bracket + 1..closing]);
    Some(Self {
      name: name.to_owned(),
      target,
      attributes,
      raw: line.to_owned(),
    })
  }

  /// Value of the named attribute, if present and non-empty.
  #[must_use]
  pub fn attribute(&self, key: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|attribute| attribute.key == key)
      .and_then(Attribute::first_value)
  }
}

/// A parsed placeholder macro: `@target:name@` or `@name@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMacro {
  pub name: String,
  /// The literal string `"default"` when the occurrence had no target.
  pub target: String,
}

impl PlaceholderMacro {
  /// Parses one placeholder occurrence for the expected name.
  #[must_use]
  pub fn parse(name: &str, str_: &str) -> Option<Self> {
    let suffix = format!("{name}{PLACEHOLDER_BRACKET}");
    if !str_.starts_with(PLACEHOLDER_BRACKET) || !str_.ends_with(&suffix) {
      return None;
    }
    let inner = &str_[PLACEHOLDER_BRACKET.len()..str_.len() - suffix.len()];
    let target = inner.trim_end_matches(MACRO_NAME_SEPARATOR);
    Some(Self {
      name: name.to_owned(),
      target: if target.is_empty() {
        "default".to_owned()
      } else {
        target.to_owned()
      },
    })
  }
}

/// Wraps raw HTML in an Asciidoc passthrough block.
#[must_use]
pub fn passthrough_block(content: &str) -> String {
  format!("++++\n{content}\n++++\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_line_macro() {
    let parsed = Macro::parse("source", "source:Application[app=cli]")
      .expect("macro");
    assert_eq!(parsed.target, "Application");
    assert_eq!(parsed.attribute("app"), Some("cli"));
    assert_eq!(parsed.raw, "source:Application[app=cli]");
  }

  #[test]
  fn rejects_other_lines() {
    assert!(Macro::parse("source", "test:Application[]").is_none());
    assert!(Macro::parse("source", "source:Application").is_none());
  }

  #[test]
  fn attribute_list_round_trip() {
    let attributes = Attribute::parse_list("a=1,b=2;3");
    assert_eq!(attributes, vec![
      Attribute {
        key: "a".into(),
        values: vec!["1".into()]
      },
      Attribute {
        key: "b".into(),
        values: vec!["2".into(), "3".into()]
      },
    ]);

    // Re-joining and re-parsing is idempotent.
    let joined = attributes
      .iter()
      .map(|attribute| {
        format!("{}={}", attribute.key, attribute.values.join(";"))
      })
      .collect::<Vec<_>>()
      .join(",");
    assert_eq!(Attribute::parse_list(&joined), attributes);
  }

  #[test]
  fn malformed_attributes_are_dropped() {
    let attributes = Attribute::parse_list("a=1,oops,b=2");
    assert_eq!(attributes.len(), 2);
  }

  #[test]
  fn placeholder_with_and_without_target() {
    let bare = PlaceholderMacro::parse("features", "@features@").expect("m");
    assert_eq!(bare.target, "default");

    let targeted =
      PlaceholderMacro::parse("features", "@cli:features@").expect("m");
    assert_eq!(targeted.target, "cli");

    assert!(PlaceholderMacro::parse("features", "@lang@").is_none());
  }

  #[test]
  fn passthrough_block_wraps_content() {
    assert_eq!(passthrough_block("<p>hi</p>"), "++++\n<p>hi</p>\n++++\n");
  }
}
