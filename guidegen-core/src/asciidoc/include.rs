use std::fmt;

use super::Attribute;

pub const ATTRIBUTE_LEVELOFFSET: &str = "leveloffset";
pub const ATTRIBUTE_LINES: &str = "lines";
pub const ATTRIBUTE_ENCODING: &str = "encoding";
pub const ATTRIBUTE_TAG: &str = "tag";
pub const ATTRIBUTE_TAGS: &str = "tags";
pub const ATTRIBUTE_INDENT: &str = "indent";
pub const ATTRIBUTE_OPTS: &str = "opts";

/// An inclusive line range for an include directive.
///
/// `to == -1` means "to end of file". A range is only rendered when it is
/// meaningful: non-empty and not the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
  pub from: i32,
  pub to: i32,
}

impl Range {
  #[must_use]
  pub const fn new(from: i32, to: i32) -> Self {
    Self { from, to }
  }

  #[must_use]
  pub const fn is_valid(&self) -> bool {
    if self.from == self.to {
      return false;
    }
    if self.to == -1 && self.from == 0 {
      return false;
    }
    if self.to != -1 && self.from > self.to {
      return false;
    }
    true
  }
}

/// An Asciidoc document attribute line: `:key: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
  pub key: String,
  pub value: String,
}

impl fmt::Display for Argument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, ":{}: {}", self.key, self.value)
  }
}

/// A generated `include::target[...]` directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeDirective {
  pub target: String,
  pub level_offset: Option<String>,
  pub lines: Option<Range>,
  pub encoding: Option<String>,
  pub tags: Vec<String>,
  pub indent: Option<i32>,
  pub opts: Option<String>,
}

impl IncludeDirective {
  #[must_use]
  pub fn new(target: impl Into<String>) -> Self {
    Self {
      target: target.into(),
      ..Self::default()
    }
  }

  /// Carries over the include-related attributes of a parsed macro.
  /// Unrecognized keys are ignored.
  #[must_use]
  pub fn with_attributes(mut self, attributes: &[Attribute]) -> Self {
    for attribute in attributes {
      match attribute.key.as_str() {
        ATTRIBUTE_LEVELOFFSET => {
          self.level_offset =
            attribute.first_value().map(str::to_owned);
        },
        ATTRIBUTE_LINES => {
          for value in &attribute.values {
            let mut parts = value.splitn(2, "..");
            if let (Some(from), Some(to)) = (parts.next(), parts.next())
              && let (Ok(from), Ok(to)) = (from.parse(), to.parse())
            {
              self.lines = Some(Range::new(from, to));
            }
          }
        },
        ATTRIBUTE_ENCODING => {
          self.encoding = attribute.first_value().map(str::to_owned);
        },
        ATTRIBUTE_TAG | ATTRIBUTE_TAGS => {
          self.tags.extend(attribute.values.iter().cloned());
        },
        ATTRIBUTE_INDENT => {
          self.indent = attribute.first_value().and_then(|v| v.parse().ok());
        },
        ATTRIBUTE_OPTS => {
          self.opts = attribute.first_value().map(str::to_owned);
        },
        _ => {},
      }
    }
    self
  }

  #[must_use]
  pub fn with_lines(mut self, lines: Range) -> Self {
    self.lines = Some(lines);
    self
  }

  fn attribute_strings(&self) -> Vec<String> {
    let mut attributes = Vec::new();
    if let Some(level_offset) = &self.level_offset {
      attributes.push(format!("{ATTRIBUTE_LEVELOFFSET}={level_offset}"));
    }
    if let Some(lines) = &self.lines
      && lines.is_valid()
    {
      attributes.push(format!("{ATTRIBUTE_LINES}={}..{}", lines.from, lines.to));
    }
    if let Some(encoding) = &self.encoding {
      attributes.push(format!("{ATTRIBUTE_ENCODING}={encoding}"));
    }
    if self.tags.len() > 1 {
      attributes.push(format!("{ATTRIBUTE_TAGS}={}", self.tags.join(";")));
    } else if let Some(tag) = self.tags.first() {
      attributes.push(format!("{ATTRIBUTE_TAG}={tag}"));
    }
    if let Some(indent) = self.indent {
      attributes.push(format!("{ATTRIBUTE_INDENT}={indent}"));
    }
    if let Some(opts) = &self.opts {
      attributes.push(format!("{ATTRIBUTE_OPTS}={opts}"));
    }
    attributes
  }
}

impl fmt::Display for IncludeDirective {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "include::{}[{}]",
      self.target,
      self.attribute_strings().join(",")
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_include() {
    let directive = IncludeDirective::new("{commonsDir}/common-header.adoc");
    assert_eq!(
      directive.to_string(),
      "include::{commonsDir}/common-header.adoc[]"
    );
  }

  #[test]
  fn include_with_lines_and_tags() {
    let directive = IncludeDirective::new("src/main/java/Foo.java")
      .with_lines(Range::new(16, -1))
      .with_attributes(&Attribute::parse_list("tag=body,indent=0"));
    assert_eq!(
      directive.to_string(),
      "include::src/main/java/Foo.java[lines=16..-1,tag=body,indent=0]"
    );
  }

  #[test]
  fn whole_file_range_is_omitted() {
    let directive =
      IncludeDirective::new("a.txt").with_lines(Range::new(0, -1));
    assert_eq!(directive.to_string(), "include::a.txt[]");
  }

  #[test]
  fn lines_attribute_parsed_from_macro() {
    let directive = IncludeDirective::new("a.txt")
      .with_attributes(&Attribute::parse_list("lines=5..10"));
    assert_eq!(directive.lines, Some(Range::new(5, 10)));
  }

  #[test]
  fn argument_renders_as_document_attribute() {
    let argument = Argument {
      key: "sourceDir".into(),
      value: "demo".into(),
    };
    assert_eq!(argument.to_string(), ":sourceDir: demo");
  }
}
