use std::fmt::Write as _;

use super::MacroSubstitution;
use crate::{
  asciidoc::{Argument, IncludeDirective, Macro},
  error::Result,
  model::Guide,
  options::GuidesOption,
  scan,
};

/// Replaces a line macro with document-attribute lines followed by an
/// include directive pointing at `{baseDirectory}/{prefix}{target}`.
///
/// Two instances ship: `common:` resolving under the shared snippets
/// directory and `external:` resolving under the guides directory. The
/// `{commonsDir}`/`{guidesDir}` tokens are Asciidoctor document attributes
/// resolved at render time, not by this rule.
pub struct LineIncludeSubstitution {
  macro_name: &'static str,
  base_directory: &'static str,
  prefix: &'static str,
}

impl LineIncludeSubstitution {
  #[must_use]
  pub const fn common() -> Self {
    Self {
      macro_name: "common",
      base_directory: "{commonsDir}",
      prefix: "common-",
    }
  }

  #[must_use]
  pub const fn external() -> Self {
    Self {
      macro_name: "external",
      base_directory: "{guidesDir}",
      prefix: "",
    }
  }
}

impl MacroSubstitution for LineIncludeSubstitution {
  fn substitute(
    &self,
    text: &str,
    _guide: &Guide,
    _option: &GuidesOption,
  ) -> Result<String> {
    let mut result = text.to_owned();
    for line in scan::find_macro_lines(text, self.macro_name) {
      let Some(macro_) = Macro::parse(self.macro_name, &line) else {
        continue;
      };

      let mut replacement = String::new();
      for attribute in &macro_.attributes {
        if let Some(value) = attribute.first_value() {
          let argument = Argument {
            key: attribute.key.clone(),
            value: value.to_owned(),
          };
          let _ = writeln!(replacement, "{argument}");
        }
      }

      let target = format!(
        "{}/{}{}",
        self.base_directory, self.prefix, macro_.target
      );
      let _ = write!(replacement, "{}", IncludeDirective::new(target));
      result = result.replace(&line, &replacement);
    }
    Ok(result)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{BuildTool, Language, TestFramework};

  fn option() -> GuidesOption {
    GuidesOption::new(BuildTool::Gradle, Language::Java, TestFramework::Junit)
  }

  #[test]
  fn common_macro_becomes_include() {
    let out = LineIncludeSubstitution::common()
      .substitute("common:header.adoc[]", &Guide::default(), &option())
      .expect("substitute");
    assert_eq!(out, "include::{commonsDir}/common-header.adoc[]");
  }

  #[test]
  fn attributes_become_document_attribute_lines() {
    let out = LineIncludeSubstitution::common()
      .substitute(
        "common:requirements.adoc[jdkVersion=17]",
        &Guide::default(),
        &option(),
      )
      .expect("substitute");
    assert_eq!(
      out,
      ":jdkVersion: 17\ninclude::{commonsDir}/common-requirements.adoc[]"
    );
  }

  #[test]
  fn external_macro_has_no_prefix() {
    let out = LineIncludeSubstitution::external()
      .substitute(
        "external:shared/snippet.adoc[]",
        &Guide::default(),
        &option(),
      )
      .expect("substitute");
    assert_eq!(out, "include::{guidesDir}/shared/snippet.adoc[]");
  }
}
