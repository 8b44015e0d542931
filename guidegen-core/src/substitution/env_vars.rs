use std::fmt::Write as _;

use super::MacroSubstitution;
use crate::{
  asciidoc::{self, Macro},
  error::Result,
  model::Guide,
  options::GuidesOption,
  scan,
};

const MACRO_ENVIRONMENT_VARS: &str = "environment-vars";

/// Renders `environment-vars:[KEY=value,...]` into a tabbed HTML fragment
/// with one tab per shell flavor: POSIX `export`, Windows `set` and
/// PowerShell `$ENV`.
pub struct EnvironmentVarsSubstitution {
  console_tabs_html: String,
}

impl EnvironmentVarsSubstitution {
  #[must_use]
  pub const fn new(console_tabs_html: String) -> Self {
    Self { console_tabs_html }
  }
}

impl MacroSubstitution for EnvironmentVarsSubstitution {
  fn substitute(
    &self,
    text: &str,
    _guide: &Guide,
    _option: &GuidesOption,
  ) -> Result<String> {
    let mut result = text.to_owned();
    for line in scan::find_macro_lines(text, MACRO_ENVIRONMENT_VARS) {
      let Some(macro_) = Macro::parse(MACRO_ENVIRONMENT_VARS, &line) else {
        continue;
      };

      let mut bash = String::new();
      let mut windows = String::new();
      let mut powershell = String::new();
      for attribute in &macro_.attributes {
        let Some(value) = attribute.first_value() else {
          continue;
        };
        let name = &attribute.key;
        let _ = writeln!(
          bash,
          "<span class=\"hljs-built_in\">export</span> {name}={value}"
        );
        let _ = writeln!(
          windows,
          "<span class=\"hljs-built_in\">set</span> {name}={value}"
        );
        let _ = writeln!(
          powershell,
          "<span class=\"hljs-variable\">$ENV</span> {name} = \
           <span class=\"hljs-string\">\"{value}\"</span>"
        );
      }

      let html = self
        .console_tabs_html
        .replace("{bash}", &bash)
        .replace("{windows}", &windows)
        .replace("{powershell}", &powershell);
      result = result.replace(&line, &asciidoc::passthrough_block(&html));
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
  fn renders_three_shell_flavors() {
    let rule = EnvironmentVarsSubstitution::new(
      "{bash}|{windows}|{powershell}".to_owned(),
    );
    let out = rule
      .substitute(
        "environment-vars:[JDK_VERSION=21]",
        &Guide::default(),
        &option(),
      )
      .expect("substitute");
    assert!(out.starts_with("++++\n"));
    assert!(out.contains(
      "<span class=\"hljs-built_in\">export</span> JDK_VERSION=21"
    ));
    assert!(
      out.contains("<span class=\"hljs-built_in\">set</span> JDK_VERSION=21")
    );
    assert!(out.contains(
      "<span class=\"hljs-variable\">$ENV</span> JDK_VERSION = \
       <span class=\"hljs-string\">\"21\"</span>"
    ));
  }

  #[test]
  fn no_macro_is_a_no_op() {
    let rule = EnvironmentVarsSubstitution::new("{bash}".to_owned());
    let out = rule
      .substitute("plain text", &Guide::default(), &option())
      .expect("substitute");
    assert_eq!(out, "plain text");
  }
}
