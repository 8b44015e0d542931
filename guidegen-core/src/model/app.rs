use serde::Deserialize;

use super::types::{ApplicationType, Language, TestFramework};

/// Feature name that enables license-header validation.
pub const SPOTLESS: &str = "spotless";

pub const DEFAULT_PACKAGE_NAME: &str = "example.micronaut";
pub const DEFAULT_FRAMEWORK: &str = "Micronaut";

/// One generated application variant belonging to a guide.
///
/// The literal name `"default"` marks a guide's single or primary
/// application. `name` is the merge key when a derived guide's app list is
/// combined with its base guide's. Optional fields stay unset here so the
/// merger can tell "not declared" from "declared"; accessors apply the
/// documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
  pub name: String,

  #[serde(default)]
  pub package_name: Option<String>,

  #[serde(default)]
  pub application_type: Option<ApplicationType>,

  /// Default is Micronaut; "Spring Boot" is also supported.
  #[serde(default)]
  pub framework: Option<String>,

  #[serde(default)]
  pub features: Vec<String>,

  /// Features applied but never surfaced in rendered feature lists.
  #[serde(default)]
  pub invisible_features: Vec<String>,

  #[serde(default)]
  pub java_features: Vec<String>,

  #[serde(default)]
  pub kotlin_features: Vec<String>,

  #[serde(default)]
  pub groovy_features: Vec<String>,

  #[serde(default)]
  pub test_framework: Option<TestFramework>,

  /// Test files that should not be run.
  #[serde(default)]
  pub exclude_test: Vec<String>,

  /// Source files that should not be transferred.
  #[serde(default)]
  pub exclude_source: Vec<String>,

  #[serde(default)]
  pub validate_license: Option<bool>,
}

impl App {
  #[must_use]
  pub fn package_name(&self) -> &str {
    self.package_name.as_deref().unwrap_or(DEFAULT_PACKAGE_NAME)
  }

  #[must_use]
  pub fn application_type(&self) -> ApplicationType {
    self.application_type.unwrap_or_default()
  }

  #[must_use]
  pub fn framework(&self) -> &str {
    self.framework.as_deref().unwrap_or(DEFAULT_FRAMEWORK)
  }

  /// License validation runs only when explicitly enabled and the app
  /// carries the spotless feature in any of its feature lists.
  #[must_use]
  pub fn validate_license(&self) -> bool {
    self.validate_license.unwrap_or(false)
      && [
        &self.features,
        &self.invisible_features,
        &self.java_features,
        &self.kotlin_features,
        &self.groovy_features,
      ]
      .iter()
      .any(|features| features.iter().any(|feature| feature == SPOTLESS))
  }

  fn language_features(&self, language: Language) -> &[String] {
    match language {
      Language::Java => &self.java_features,
      Language::Kotlin => &self.kotlin_features,
      Language::Groovy => &self.groovy_features,
    }
  }

  /// Every feature applied to the app for the given language, invisible
  /// features included.
  #[must_use]
  pub fn all_features(&self, language: Language) -> Vec<String> {
    let mut all = self.features.clone();
    all.extend(self.invisible_features.iter().cloned());
    all.extend(self.language_features(language).iter().cloned());
    all
  }

  /// Features surfaced by the `features` and `features-words` macros:
  /// generic plus language-specific, excluding invisible ones.
  #[must_use]
  pub fn visible_features(&self, language: Language) -> Vec<String> {
    let mut all = self.features.clone();
    all.extend(self.language_features(language).iter().cloned());
    all
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  fn app_json(body: &str) -> App {
    serde_json::from_str(body).unwrap()
  }

  #[test]
  fn defaults_applied() {
    let app = app_json(r#"{"name": "default"}"#);
    assert_eq!(app.package_name(), "example.micronaut");
    assert_eq!(app.framework(), "Micronaut");
    assert_eq!(app.application_type(), ApplicationType::Default);
    assert!(app.features.is_empty());
    assert!(!app.validate_license());
  }

  #[test]
  fn visible_features_exclude_invisible() {
    let app = app_json(
      r#"{
        "name": "default",
        "features": ["yaml"],
        "invisibleFeatures": ["serialization-jackson"],
        "kotlinFeatures": ["ksp"]
      }"#,
    );
    assert_eq!(app.visible_features(Language::Kotlin), vec![
      "yaml".to_owned(),
      "ksp".to_owned()
    ]);
    assert_eq!(app.all_features(Language::Kotlin), vec![
      "yaml".to_owned(),
      "serialization-jackson".to_owned(),
      "ksp".to_owned()
    ]);
    assert_eq!(app.visible_features(Language::Java), vec!["yaml".to_owned()]);
  }

  #[test]
  fn license_validation_requires_spotless() {
    let without = app_json(r#"{"name": "default", "validateLicense": true}"#);
    assert!(!without.validate_license());

    let with = app_json(
      r#"{
        "name": "default",
        "validateLicense": true,
        "invisibleFeatures": ["spotless"]
      }"#,
    );
    assert!(with.validate_license());
  }
}
