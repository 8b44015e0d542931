//! Expansion of one guide's declared build tools and languages into the
//! concrete option matrix every render runs over.

use log::info;

use crate::model::{BuildTool, Guide, Language, TestFramework};

/// One concrete rendering target for a guide: a (build tool, language,
/// test framework) triple. Computed per render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidesOption {
  pub build_tool: BuildTool,
  pub language: Language,
  pub test_framework: TestFramework,
}

impl GuidesOption {
  #[must_use]
  pub const fn new(
    build_tool: BuildTool,
    language: Language,
    test_framework: TestFramework,
  ) -> Self {
    Self {
      build_tool,
      language,
      test_framework,
    }
  }
}

/// Test framework for a language: explicit guide override wins, Groovy
/// defaults to Spock, every other language to JUnit.
#[must_use]
pub const fn test_framework_option(
  language: Language,
  test_framework: Option<TestFramework>,
) -> TestFramework {
  if let Some(test_framework) = test_framework {
    return test_framework;
  }
  match language {
    Language::Groovy => TestFramework::Spock,
    Language::Java | Language::Kotlin => TestFramework::Junit,
  }
}

/// Expands a guide into its option matrix.
///
/// Build-tool-major, language-minor, in the fixed enumeration order; the
/// ordering is load-bearing for generated file naming and must stay
/// deterministic. Build tools the guide skips produce no options.
#[must_use]
pub fn guides_options(guide: &Guide) -> Vec<GuidesOption> {
  let mut options = Vec::new();
  for &build_tool in &guide.build_tools {
    for language in Language::VALUES {
      if guide.should_skip(build_tool) {
        info!(
          "Skipping guide '{}' for {build_tool} and {language}",
          guide.slug
        );
        continue;
      }
      if guide.languages.contains(&language) {
        options.push(GuidesOption::new(
          build_tool,
          language,
          test_framework_option(language, guide.test_framework),
        ));
      }
    }
  }
  options
}

#[cfg(test)]
mod tests {
  use super::*;

  fn guide(languages: Vec<Language>, build_tools: Vec<BuildTool>) -> Guide {
    Guide {
      languages,
      build_tools,
      ..Guide::default()
    }
  }

  #[test]
  fn expansion_is_build_tool_major() {
    let guide = guide(
      vec![Language::Java, Language::Kotlin],
      vec![BuildTool::Gradle, BuildTool::Maven],
    );
    let options = guides_options(&guide);
    let pairs: Vec<(BuildTool, Language)> = options
      .iter()
      .map(|option| (option.build_tool, option.language))
      .collect();
    assert_eq!(pairs, vec![
      (BuildTool::Gradle, Language::Java),
      (BuildTool::Gradle, Language::Kotlin),
      (BuildTool::Maven, Language::Java),
      (BuildTool::Maven, Language::Kotlin),
    ]);
  }

  #[test]
  fn groovy_defaults_to_spock() {
    let guide = guide(vec![Language::Groovy], vec![BuildTool::Gradle]);
    let options = guides_options(&guide);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].test_framework, TestFramework::Spock);
  }

  #[test]
  fn explicit_test_framework_wins() {
    let mut guide = guide(vec![Language::Groovy], vec![BuildTool::Gradle]);
    guide.test_framework = Some(TestFramework::Junit);
    assert_eq!(
      guides_options(&guide)[0].test_framework,
      TestFramework::Junit
    );
  }

  #[test]
  fn skip_flags_drop_build_tools() {
    let mut guide = guide(
      vec![Language::Java],
      vec![BuildTool::Gradle, BuildTool::Maven],
    );
    guide.skip_maven_tests = true;
    let options = guides_options(&guide);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].build_tool, BuildTool::Gradle);
  }
}
