use super::MacroSubstitution;
use crate::{
  asciidoc::{IncludeDirective, Macro, Range, SourceBlock, ATTRIBUTE_LINES},
  config::GuidesConfig,
  error::Result,
  license::License,
  model::Guide,
  options::GuidesOption,
  scan,
};

const CLASSPATH_MAIN: &str = "main";
const CLASSPATH_TEST: &str = "test";
const SUFFIX_TEST: &str = "Test";

/// The concrete members of the source-block rule family. Each maps one
/// line-macro name onto a classpath and file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
  /// `source:` - main code.
  Source,
  /// `test:` - test code, target suffix follows the test framework.
  Test,
  /// `rawTest:` - test code rendered in the framework's own language.
  RawTest,
  /// `resource:` - main resources.
  Resource,
  /// `testResource:` - test resources.
  TestResource,
  /// `zipInclude:` - bundled files, titled with the bare target.
  ZipInclude,
}

impl SourceKind {
  pub const VALUES: [Self; 6] = [
    Self::Source,
    Self::Test,
    Self::RawTest,
    Self::Resource,
    Self::TestResource,
    Self::ZipInclude,
  ];

  const fn macro_name(self) -> &'static str {
    match self {
      Self::Source => "source",
      Self::Test => "test",
      Self::RawTest => "rawTest",
      Self::Resource => "resource",
      Self::TestResource => "testResource",
      Self::ZipInclude => "zipInclude",
    }
  }

  const fn classpath(self) -> &'static str {
    match self {
      Self::Source | Self::Resource | Self::ZipInclude => CLASSPATH_MAIN,
      Self::Test | Self::RawTest | Self::TestResource => CLASSPATH_TEST,
    }
  }

  /// Code files live under a language folder and a package path and get
  /// the license-header line exclusion; resources do not.
  const fn is_code(self) -> bool {
    matches!(self, Self::Source | Self::Test | Self::RawTest)
  }

  const fn rewrites_test_suffix(self) -> bool {
    matches!(self, Self::Test | Self::RawTest)
  }
}

/// Replaces a source-family line macro with a fenced source block holding
/// one include directive at the conventional path
/// `{sourceDir}/{slug}/{slug}-{buildTool}-{language}/...`.
pub struct SourceBlockSubstitution {
  kind: SourceKind,
  package_name: String,
  license_lines: usize,
}

impl SourceBlockSubstitution {
  #[must_use]
  pub fn new(
    kind: SourceKind,
    config: &GuidesConfig,
    license: &License,
  ) -> Self {
    Self {
      kind,
      package_name: config.package_name.clone(),
      license_lines: license.number_of_lines(),
    }
  }

  fn language(&self, option: &GuidesOption) -> &'static str {
    match self.kind {
      SourceKind::RawTest => option.test_framework.default_language().name(),
      _ => option.language.name(),
    }
  }

  fn extension(&self, option: &GuidesOption) -> &'static str {
    match self.kind {
      SourceKind::RawTest => {
        option.test_framework.default_language().extension()
      },
      _ => option.language.extension(),
    }
  }

  /// Target with the test-class suffix adjusted to the active framework.
  fn condensed_target(&self, target: &str, option: &GuidesOption) -> String {
    if self.kind.rewrites_test_suffix()
      && target.ends_with(SUFFIX_TEST)
      && let Some(stem_end) = target.find(SUFFIX_TEST)
    {
      return format!(
        "{}{}",
        &target[..stem_end],
        option.test_framework.test_suffix()
      );
    }
    target.to_owned()
  }

  /// Path of the file below the option's project directory, also used as
  /// the rendered block title.
  fn source_title(
    &self,
    app_name: &str,
    condensed_target: &str,
    language: &str,
  ) -> String {
    if self.kind == SourceKind::ZipInclude {
      return condensed_target.to_owned();
    }
    let mut title = String::new();
    if app_name != super::APP_NAME_DEFAULT {
      title.push_str(app_name);
      title.push('/');
    }
    title.push_str("src/");
    title.push_str(self.kind.classpath());
    title.push('/');
    if self.kind.is_code() {
      title.push_str(language);
      title.push('/');
      title.push_str(&self.package_name.replace('.', "/"));
      title.push('/');
    } else {
      title.push_str("resources/");
    }
    title.push_str(condensed_target);
    title
  }
}

impl MacroSubstitution for SourceBlockSubstitution {
  fn order(&self) -> i32 {
    1
  }

  fn substitute(
    &self,
    text: &str,
    guide: &Guide,
    option: &GuidesOption,
  ) -> Result<String> {
    let mut result = text.to_owned();
    for line in scan::find_macro_lines(text, self.kind.macro_name()) {
      let Some(macro_) = Macro::parse(self.kind.macro_name(), &line) else {
        continue;
      };
      let app_name = super::app_name(&macro_);

      // An explicit extension on the target overrides the option's
      // language for both the path and the block annotation.
      let mut condensed = self.condensed_target(&macro_.target, option);
      let mut language = self.language(option).to_owned();
      match condensed.rfind('.') {
        Some(dot) if dot != condensed.len() - 1 => {
          language =
            scan::asciidoctor_language_for_extension(&condensed[dot + 1..]);
        },
        _ => {
          condensed.push('.');
          condensed.push_str(self.extension(option));
        },
      }

      let title = self.source_title(app_name, &condensed, &language);
      let target = format!(
        "{{sourceDir}}/{}/{}/{title}",
        guide.slug,
        scan::source_dir(&guide.slug, option)
      );

      let mut include =
        IncludeDirective::new(target).with_attributes(&macro_.attributes);
      let license_range = Range::new(
        i32::try_from(self.license_lines).unwrap_or(i32::MAX),
        -1,
      );
      if self.kind.is_code()
        && license_range.is_valid()
        && macro_.attribute(ATTRIBUTE_LINES).is_none()
      {
        include = include.with_lines(license_range);
      }

      let block = SourceBlock::new(language)
        .with_title(title)
        .with_include(include);
      result = result.replace(&line, &block.to_string());
    }
    Ok(result)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{BuildTool, Language, TestFramework};

  fn guide() -> Guide {
    Guide {
      slug: "demo".to_owned(),
      ..Guide::default()
    }
  }

  fn option(language: Language, test_framework: TestFramework) -> GuidesOption {
    GuidesOption::new(BuildTool::Gradle, language, test_framework)
  }

  fn rule(kind: SourceKind) -> SourceBlockSubstitution {
    SourceBlockSubstitution::new(
      kind,
      &GuidesConfig::default(),
      &License::default(),
    )
  }

  #[test]
  fn source_macro_renders_conventional_path() {
    let out = rule(SourceKind::Source)
      .substitute(
        "source:Application[]",
        &guide(),
        &option(Language::Java, TestFramework::Junit),
      )
      .expect("substitute");
    assert_eq!(
      out,
      "[source,java]\n\
       .src/main/java/example/micronaut/Application.java\n\
       ----\n\
       include::{sourceDir}/demo/demo-gradle-java/\
       src/main/java/example/micronaut/Application.java[]\n\
       ----"
    );
  }

  #[test]
  fn named_app_prefixes_the_path() {
    let out = rule(SourceKind::Source)
      .substitute(
        "source:Application[app=cli]",
        &guide(),
        &option(Language::Java, TestFramework::Junit),
      )
      .expect("substitute");
    assert!(out.contains(
      "include::{sourceDir}/demo/demo-gradle-java/cli/\
       src/main/java/example/micronaut/Application.java[]"
    ));
  }

  #[test]
  fn test_target_rewrites_to_spec_under_spock() {
    let out = rule(SourceKind::Test)
      .substitute(
        "test:ApplicationTest[]",
        &guide(),
        &option(Language::Groovy, TestFramework::Spock),
      )
      .expect("substitute");
    assert!(out.contains("ApplicationSpec.groovy"));
    assert!(out.contains("src/test/groovy/"));
  }

  #[test]
  fn explicit_extension_overrides_language() {
    let out = rule(SourceKind::Resource)
      .substitute(
        "resource:application.yml[]",
        &guide(),
        &option(Language::Java, TestFramework::Junit),
      )
      .expect("substitute");
    assert!(out.starts_with("[source,yaml]\n"));
    assert!(out.contains("src/main/resources/application.yml"));
  }

  #[test]
  fn license_header_lines_are_excluded_for_code() {
    let license = License::from_header("line one\nline two\n");
    let rule = SourceBlockSubstitution::new(
      SourceKind::Source,
      &GuidesConfig::default(),
      &license,
    );
    let out = rule
      .substitute(
        "source:Application[]",
        &guide(),
        &option(Language::Java, TestFramework::Junit),
      )
      .expect("substitute");
    assert!(out.contains("[lines=3..-1]"));
  }

  #[test]
  fn explicit_lines_attribute_wins_over_license_range() {
    let license = License::from_header("header\n");
    let rule = SourceBlockSubstitution::new(
      SourceKind::Source,
      &GuidesConfig::default(),
      &license,
    );
    let out = rule
      .substitute(
        "source:Application[lines=5..10]",
        &guide(),
        &option(Language::Java, TestFramework::Junit),
      )
      .expect("substitute");
    assert!(out.contains("[lines=5..10]"));
  }

  #[test]
  fn zip_include_uses_bare_target() {
    let out = rule(SourceKind::ZipInclude)
      .substitute(
        "zipInclude:data/books.csv[]",
        &guide(),
        &option(Language::Java, TestFramework::Junit),
      )
      .expect("substitute");
    assert!(out.starts_with("[source,csv]\n.data/books.csv\n"));
    assert!(out.contains(
      "include::{sourceDir}/demo/demo-gradle-java/data/books.csv[]"
    ));
  }

  #[test]
  fn raw_test_renders_framework_language() {
    let out = rule(SourceKind::RawTest)
      .substitute(
        "rawTest:ApplicationTest[]",
        &guide(),
        &option(Language::Java, TestFramework::Spock),
      )
      .expect("substitute");
    assert!(out.starts_with("[source,groovy]\n"));
    assert!(out.contains("ApplicationSpec.groovy"));
  }
}
