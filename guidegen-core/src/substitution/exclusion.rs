use super::MacroSubstitution;
use crate::{
  error::Result, model::Guide, options::GuidesOption, scan,
};

const LINE_BREAK: &str = "\n";

/// Shared driver for the conditional-exclusion group rules.
///
/// Every nested group of the macro is evaluated against the predicate:
/// excluded groups are deleted whole (marker lines and the trailing line
/// break included), kept groups lose only their marker lines. The text is
/// rescanned after each group so nested same-name groups resolve from the
/// inside out.
fn apply_exclusion<F>(
  text: &str,
  macro_name: &str,
  should_exclude: F,
) -> Result<String>
where
  F: Fn(&[String]) -> bool,
{
  let mut result = text.to_owned();
  loop {
    let groups = scan::find_macro_groups_nested(&result, macro_name)?;
    let Some(group) = groups.first() else {
      break;
    };
    let parameters = scan::extract_group_parameters(&group[0], macro_name);
    let joined = group.join(LINE_BREAK);
    let replaced = if should_exclude(&parameters) {
      let removed = result.replace(&format!("{joined}{LINE_BREAK}"), "");
      if removed == result {
        // Group at end of text without a trailing line break.
        result.replace(&joined, "")
      } else {
        removed
      }
    } else {
      let body = group[1..group.len() - 1].join(LINE_BREAK);
      result.replace(&joined, &body)
    };
    if replaced == result {
      break;
    }
    result = replaced;
  }
  Ok(result)
}

/// Deletes `exclude-for-build` groups whose parameter list names the
/// active build tool.
pub struct ExcludeForBuildSubstitution;

impl MacroSubstitution for ExcludeForBuildSubstitution {
  fn substitute(
    &self,
    text: &str,
    _guide: &Guide,
    option: &GuidesOption,
  ) -> Result<String> {
    apply_exclusion(text, "exclude-for-build", |parameters| {
      parameters.iter().any(|p| p == option.build_tool.name())
    })
  }
}

/// Deletes `exclude-for-languages` groups whose parameter list names the
/// active language.
pub struct ExcludeForLanguagesSubstitution;

impl MacroSubstitution for ExcludeForLanguagesSubstitution {
  fn substitute(
    &self,
    text: &str,
    _guide: &Guide,
    option: &GuidesOption,
  ) -> Result<String> {
    apply_exclusion(text, "exclude-for-languages", |parameters| {
      parameters.iter().any(|p| p == option.language.name())
    })
  }
}

/// Deletes `exclude-for-jdk-lower-than` groups when the guide's effective
/// minimum JDK is below the group's numeric threshold.
pub struct ExcludeForJdkLowerThanSubstitution {
  default_min_jdk: u32,
}

impl ExcludeForJdkLowerThanSubstitution {
  #[must_use]
  pub const fn new(default_min_jdk: u32) -> Self {
    Self { default_min_jdk }
  }
}

impl MacroSubstitution for ExcludeForJdkLowerThanSubstitution {
  fn substitute(
    &self,
    text: &str,
    guide: &Guide,
    _option: &GuidesOption,
  ) -> Result<String> {
    apply_exclusion(text, "exclude-for-jdk-lower-than", |parameters| {
      let Some(threshold) =
        parameters.first().and_then(|p| p.parse::<u32>().ok())
      else {
        return false;
      };
      guide
        .minimum_java_version
        .unwrap_or(self.default_min_jdk)
        < threshold
    })
  }
}
