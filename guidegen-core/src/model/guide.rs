use std::collections::{BTreeMap, BTreeSet};

use jiff::civil::Date;
use serde::Deserialize;

use super::{
  app::App,
  types::{BuildTool, Cloud, Language, TestFramework},
};

/// Feature-name prefixes stripped when deriving tags.
const TAG_PREFIXES: [&str; 2] = ["micronaut-", "views-"];

fn default_languages() -> Vec<Language> {
  vec![Language::Java, Language::Groovy, Language::Kotlin]
}

fn default_build_tools() -> Vec<BuildTool> {
  vec![BuildTool::Gradle, BuildTool::Maven]
}

const fn default_true() -> bool {
  true
}

/// One documentation unit: metadata plus an Asciidoc source file.
///
/// Guides are parsed once per run, merged against their `base` guide (if
/// any) and treated as read-only for the remainder of generation. Fields
/// are kept loose (empty/`None`) at deserialization time; draft guides may
/// be incomplete, schema validation gates the published ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Guide {
  pub title: String,

  pub intro: String,

  /// Ordered, non-empty for published guides.
  pub authors: Vec<String>,

  pub categories: Vec<String>,

  /// Present only when `publish` is true; the parser clears it otherwise.
  pub publication_date: Option<Date>,

  pub minimum_java_version: Option<u32>,

  pub maximum_java_version: Option<u32>,

  pub cloud: Option<Cloud>,

  pub skip_gradle_tests: bool,

  pub skip_maven_tests: bool,

  /// Source document name; `{slug}.adoc` only when published.
  #[serde(skip)]
  pub asciidoctor: Option<String>,

  #[serde(default = "default_languages")]
  pub languages: Vec<Language>,

  /// Declared tags; features and categories are derived on top via
  /// [`Guide::tags`].
  pub tags: Vec<String>,

  #[serde(default = "default_build_tools")]
  pub build_tools: Vec<BuildTool>,

  pub test_framework: Option<TestFramework>,

  /// Additional relative paths bundled into the guide's zip download.
  pub zip_includes: Vec<String>,

  /// Directory-derived identity; unique across the guide set and stable
  /// once assigned by the parser.
  #[serde(skip)]
  pub slug: String,

  #[serde(default = "default_true")]
  pub publish: bool,

  /// Slug of another guide whose fields this one inherits.
  pub base: Option<String>,

  pub env: BTreeMap<String, String>,

  /// Ordered, non-empty for published guides.
  pub apps: Vec<App>,
}

impl Guide {
  /// Declared tags plus derived ones: every app feature name (with
  /// `micronaut-`/`views-` prefixes stripped) and every category,
  /// lowercased and hyphenated. Deduplicated, sorted.
  #[must_use]
  pub fn tags(&self) -> Vec<String> {
    let mut tags: BTreeSet<String> = self.tags.iter().cloned().collect();
    for app in &self.apps {
      let features = app
        .features
        .iter()
        .chain(&app.java_features)
        .chain(&app.kotlin_features)
        .chain(&app.groovy_features);
      for feature in features {
        let mut tag = feature.as_str();
        for prefix in TAG_PREFIXES {
          tag = tag.strip_prefix(prefix).unwrap_or(tag);
        }
        tags.insert(tag.to_owned());
      }
    }
    for category in &self.categories {
      tags.insert(category.to_lowercase().replace(' ', "-"));
    }
    tags.into_iter().collect()
  }

  /// Whether the guide opts out of the given build tool.
  #[must_use]
  pub const fn should_skip(&self, build_tool: BuildTool) -> bool {
    match build_tool {
      BuildTool::Gradle => self.skip_gradle_tests,
      BuildTool::Maven => self.skip_maven_tests,
    }
  }

  /// Frameworks used across the guide's apps, deduplicated.
  #[must_use]
  pub fn frameworks(&self) -> BTreeSet<String> {
    self
      .apps
      .iter()
      .map(|app| app.framework().to_owned())
      .collect()
  }

  /// Look up an app by name.
  #[must_use]
  pub fn app(&self, name: &str) -> Option<&App> {
    self.apps.iter().find(|app| app.name == name)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn defaults_cover_languages_and_build_tools() {
    let guide: Guide = serde_json::from_str(r#"{"title": "t"}"#).unwrap();
    assert_eq!(guide.languages, default_languages());
    assert_eq!(guide.build_tools, default_build_tools());
    assert!(guide.publish);
    assert!(guide.zip_includes.is_empty());
  }

  #[test]
  fn tags_derive_from_features_and_categories() {
    let guide: Guide = serde_json::from_str(
      r#"{
        "title": "t",
        "tags": ["declared"],
        "categories": ["Getting Started"],
        "apps": [{
          "name": "default",
          "features": ["micronaut-data", "yaml"],
          "javaFeatures": ["views-thymeleaf"]
        }]
      }"#,
    )
    .unwrap();
    let tags = guide.tags();
    assert!(tags.contains(&"declared".to_owned()));
    assert!(tags.contains(&"data".to_owned()));
    assert!(tags.contains(&"yaml".to_owned()));
    assert!(tags.contains(&"thymeleaf".to_owned()));
    assert!(tags.contains(&"getting-started".to_owned()));
    assert!(!tags.contains(&"micronaut-data".to_owned()));
  }

  #[test]
  fn skip_flags_map_to_build_tools() {
    let guide: Guide =
      serde_json::from_str(r#"{"title": "t", "skipMavenTests": true}"#)
        .unwrap();
    assert!(guide.should_skip(BuildTool::Maven));
    assert!(!guide.should_skip(BuildTool::Gradle));
  }
}
