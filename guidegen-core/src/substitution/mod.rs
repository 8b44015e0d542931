//! The substitution rule family and the composite pipeline that runs it.
//!
//! Every rule implements [`MacroSubstitution`]: a pure
//! `substitute(text, guide, option) -> text` transformation that is a no-op
//! when no matching macro is present and never touches unrelated text.
//! Rules run in ascending [`MacroSubstitution::order`], ties in
//! registration order, each rule's full output feeding the next rule's
//! input.

mod cli;
mod dependency;
mod env_vars;
mod exclusion;
mod features;
mod guide_link;
mod line;
mod placeholder;
mod source;

pub use cli::CliCommandSubstitution;
pub use dependency::DependencySubstitution;
pub use env_vars::EnvironmentVarsSubstitution;
pub use exclusion::{
  ExcludeForBuildSubstitution, ExcludeForJdkLowerThanSubstitution,
  ExcludeForLanguagesSubstitution,
};
pub use features::{FeaturesSubstitution, FeaturesWordsSubstitution};
pub use guide_link::GuideLinkSubstitution;
pub use line::LineIncludeSubstitution;
pub use placeholder::PlaceholderSubstitution;
pub use source::{SourceBlockSubstitution, SourceKind};

use std::collections::BTreeMap;

use crate::{
  asciidoc::{Macro, PlaceholderMacro},
  config::GuidesConfig,
  coordinates::Coordinate,
  error::{Error, Result},
  license::License,
  model::{App, Guide},
  options::GuidesOption,
  scan,
};

/// Attribute key naming the app a macro refers to.
pub const ATTRIBUTE_APP: &str = "app";

/// App name assumed when a macro names none.
pub const APP_NAME_DEFAULT: &str = "default";

/// One substitution rule. Rules own whatever configuration they need and
/// treat the guide and option as read-only.
pub trait MacroSubstitution {
  /// Pipeline position; lower runs first.
  fn order(&self) -> i32 {
    0
  }

  fn substitute(
    &self,
    text: &str,
    guide: &Guide,
    option: &GuidesOption,
  ) -> Result<String>;
}

/// App name referenced by a line macro's `app` attribute, or the default.
#[must_use]
pub fn app_name(macro_: &Macro) -> &str {
  macro_.attribute(ATTRIBUTE_APP).unwrap_or(APP_NAME_DEFAULT)
}

/// Looks up an app by name, failing loudly when the guide does not declare
/// it.
pub fn require_app<'a>(guide: &'a Guide, name: &str) -> Result<&'a App> {
  guide.app(name).ok_or_else(|| Error::AppNotFound {
    app: name.to_owned(),
    slug: guide.slug.clone(),
  })
}

/// Shared driver for the `@target:name@` placeholder rules: finds every
/// occurrence, resolves the target app name (default when absent) and
/// replaces the occurrence with the rule's output.
fn substitute_placeholder_with_target<F>(
  text: &str,
  name: &str,
  replacement: F,
) -> Result<String>
where
  F: Fn(&str) -> Result<String>,
{
  let pattern = scan::compile_or_never(&format!(r"@(?:([\w-]*):)?{name}@"));
  let mut result = text.to_owned();
  for instance in scan::find_macro_instances(text, &pattern) {
    let Some(macro_) = PlaceholderMacro::parse(name, &instance) else {
      continue;
    };
    result = result.replace(&instance, &replacement(&macro_.target)?);
  }
  Ok(result)
}

/// Runs every registered rule over a text in precedence order.
#[derive(Default)]
pub struct Pipeline {
  rules: Vec<Box<dyn MacroSubstitution>>,
}

impl Pipeline {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a rule. Rules with equal order keep their registration
  /// order.
  pub fn register(&mut self, rule: Box<dyn MacroSubstitution>) {
    self.rules.push(rule);
    self.rules.sort_by_key(|rule| rule.order());
  }

  /// The full rule set: exclusions, guide links, line includes,
  /// environment vars, the source block family, dependency listings and
  /// the placeholder rules.
  #[must_use]
  pub fn with_default_rules(
    config: &GuidesConfig,
    coordinates: &BTreeMap<String, Coordinate>,
    license: &License,
  ) -> Self {
    let mut pipeline = Self::new();
    pipeline.register(Box::new(ExcludeForBuildSubstitution));
    pipeline.register(Box::new(ExcludeForLanguagesSubstitution));
    pipeline.register(Box::new(ExcludeForJdkLowerThanSubstitution::new(
      config.default_min_jdk,
    )));
    pipeline.register(Box::new(GuideLinkSubstitution));
    pipeline.register(Box::new(LineIncludeSubstitution::common()));
    pipeline.register(Box::new(LineIncludeSubstitution::external()));
    pipeline.register(Box::new(EnvironmentVarsSubstitution::new(
      guidegen_templates::CONSOLE_TABS.to_owned(),
    )));
    for kind in SourceKind::VALUES {
      pipeline
        .register(Box::new(SourceBlockSubstitution::new(kind, config, license)));
    }
    pipeline.register(Box::new(DependencySubstitution));
    pipeline.register(Box::new(CliCommandSubstitution));
    pipeline.register(Box::new(FeaturesSubstitution));
    pipeline.register(Box::new(FeaturesWordsSubstitution));
    pipeline.register(Box::new(PlaceholderSubstitution::new(
      config,
      coordinates,
    )));
    pipeline
  }

  /// Applies every rule in order, feeding each output to the next rule.
  pub fn apply(
    &self,
    text: &str,
    guide: &Guide,
    option: &GuidesOption,
  ) -> Result<String> {
    let mut result = text.to_owned();
    for rule in &self.rules {
      result = rule.substitute(&result, guide, option)?;
    }
    Ok(result)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{BuildTool, Language, TestFramework};

  struct Tag(i32, &'static str);

  impl MacroSubstitution for Tag {
    fn order(&self) -> i32 {
      self.0
    }

    fn substitute(
      &self,
      text: &str,
      _guide: &Guide,
      _option: &GuidesOption,
    ) -> Result<String> {
      Ok(format!("{text}{}", self.1))
    }
  }

  #[test]
  fn rules_run_in_order_with_stable_ties() {
    let mut pipeline = Pipeline::new();
    pipeline.register(Box::new(Tag(2, "c")));
    pipeline.register(Box::new(Tag(0, "a")));
    pipeline.register(Box::new(Tag(0, "b")));
    let option = GuidesOption::new(
      BuildTool::Gradle,
      Language::Java,
      TestFramework::Junit,
    );
    let out = pipeline.apply("", &Guide::default(), &option).expect("apply");
    assert_eq!(out, "abc");
  }

  #[test]
  fn default_rules_are_a_no_op_on_plain_text() {
    let pipeline = Pipeline::with_default_rules(
      &GuidesConfig::default(),
      &BTreeMap::new(),
      &License::default(),
    );
    let option = GuidesOption::new(
      BuildTool::Gradle,
      Language::Java,
      TestFramework::Junit,
    );
    let text = "= Title\n\nOrdinary prose with an email@example.com.\n";
    let out = pipeline
      .apply(text, &Guide::default(), &option)
      .expect("apply");
    assert_eq!(out, text);
  }
}
