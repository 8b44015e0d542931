use std::fmt;

use super::IncludeDirective;

const SEPARATOR: &str = "----";

/// A generated fenced source block: language annotation, optional title and
/// one or more include directives.
#[derive(Debug, Clone, Default)]
pub struct SourceBlock {
  pub title: Option<String>,
  pub language: String,
  pub includes: Vec<IncludeDirective>,
}

impl SourceBlock {
  #[must_use]
  pub fn new(language: impl Into<String>) -> Self {
    Self {
      language: language.into(),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  #[must_use]
  pub fn with_include(mut self, include: IncludeDirective) -> Self {
    self.includes.push(include);
    self
  }
}

impl fmt::Display for SourceBlock {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut lines = vec![format!("[source,{}]", self.language)];
    if let Some(title) = &self.title {
      lines.push(format!(".{title}"));
    }
    lines.push(SEPARATOR.to_owned());
    lines.extend(self.includes.iter().map(ToString::to_string));
    lines.push(SEPARATOR.to_owned());
    f.write_str(&lines.join("\n"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_fenced_block() {
    let block = SourceBlock::new("java")
      .with_title("src/main/java/example/Foo.java")
      .with_include(IncludeDirective::new("{sourceDir}/demo/Foo.java"));
    assert_eq!(
      block.to_string(),
      "[source,java]\n.src/main/java/example/Foo.java\n----\n\
       include::{sourceDir}/demo/Foo.java[]\n----"
    );
  }
}
