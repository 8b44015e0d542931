use super::{substitute_placeholder_with_target, MacroSubstitution};
use crate::{
  asciidoc::ATTRIBUTE_SEPARATOR,
  error::Result,
  model::Guide,
  options::GuidesOption,
};

/// Replaces `@app:features@` with the app's visible features for the
/// active language, comma-joined.
pub struct FeaturesSubstitution;

impl MacroSubstitution for FeaturesSubstitution {
  fn order(&self) -> i32 {
    2
  }

  fn substitute(
    &self,
    text: &str,
    guide: &Guide,
    option: &GuidesOption,
  ) -> Result<String> {
    substitute_placeholder_with_target(text, "features", |app_name| {
      let app = super::require_app(guide, app_name)?;
      Ok(app.visible_features(option.language).join(ATTRIBUTE_SEPARATOR))
    })
  }
}

/// Replaces `@app:features-words@` with an English prose list of the
/// app's visible features, each backtick-quoted: `` `a`, `b`, and `c` ``.
/// A single feature stands alone with no "and".
pub struct FeaturesWordsSubstitution;

fn prose_list(features: &[String]) -> String {
  let quoted: Vec<String> =
    features.iter().map(|feature| format!("`{feature}`")).collect();
  match quoted.split_last() {
    None => String::new(),
    Some((only, [])) => only.clone(),
    Some((last, rest)) => format!("{}, and {last}", rest.join(", ")),
  }
}

impl MacroSubstitution for FeaturesWordsSubstitution {
  fn order(&self) -> i32 {
    2
  }

  fn substitute(
    &self,
    text: &str,
    guide: &Guide,
    option: &GuidesOption,
  ) -> Result<String> {
    substitute_placeholder_with_target(text, "features-words", |app_name| {
      let app = super::require_app(guide, app_name)?;
      Ok(prose_list(&app.visible_features(option.language)))
    })
  }
}
