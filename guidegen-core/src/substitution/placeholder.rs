use std::collections::BTreeMap;

use super::MacroSubstitution;
use crate::{
  config::GuidesConfig,
  coordinates::Coordinate,
  error::Result,
  model::Guide,
  options::GuidesOption,
  scan,
};

/// Replaces the fixed placeholder table plus the dynamic
/// `@{key}Version@` family resolved from the coordinate table.
///
/// Unresolved dynamic tokens stay verbatim so a partially configured
/// guide still renders something inspectable.
pub struct PlaceholderSubstitution {
  config: GuidesConfig,
  coordinates: BTreeMap<String, Coordinate>,
}

impl PlaceholderSubstitution {
  #[must_use]
  pub fn new(
    config: &GuidesConfig,
    coordinates: &BTreeMap<String, Coordinate>,
  ) -> Self {
    Self {
      config: config.clone(),
      coordinates: coordinates.clone(),
    }
  }
}

impl MacroSubstitution for PlaceholderSubstitution {
  fn order(&self) -> i32 {
    2
  }

  fn substitute(
    &self,
    text: &str,
    guide: &Guide,
    option: &GuidesOption,
  ) -> Result<String> {
    let min_jdk = guide
      .minimum_java_version
      .unwrap_or(self.config.default_min_jdk);

    let mut result = text
      .replace("{githubSlug}", &guide.slug)
      .replace("@language@", option.language.capitalized())
      .replace("@guideTitle@", &guide.title)
      .replace("@guideIntro@", &guide.intro)
      .replace("@micronaut@", &self.config.version)
      .replace("@lang@", option.language.name())
      .replace("@build@", option.build_tool.name())
      .replace("@testFramework@", option.test_framework.name())
      .replace("@authors@", &guide.authors.join(", "))
      .replace("@languageextension@", option.language.extension())
      .replace("@testsuffix@", option.test_framework.test_suffix())
      .replace("@sourceDir@", &scan::source_dir(&guide.slug, option))
      .replace("@minJdk@", &min_jdk.to_string())
      .replace("@api@", &self.config.api_url);

    for (key, coordinate) in &self.coordinates {
      if !coordinate.version.is_empty() {
        result =
          result.replace(&format!("@{key}Version@"), &coordinate.version);
      }
    }

    Ok(result)
  }
}
