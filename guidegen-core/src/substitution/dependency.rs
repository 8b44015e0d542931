use super::MacroSubstitution;
use crate::{
  asciidoc::Macro,
  error::Result,
  model::{BuildTool, Guide, Language},
  options::GuidesOption,
  scan,
};

const MACRO_DEPENDENCY: &str = "dependency";
const MACRO_DEPENDENCIES: &str = "dependencies";
const DEFAULT_GROUP_ID: &str = "io.micronaut";
const DEFAULT_SCOPE: &str = "implementation";

/// Renders `dependency:artifact[...]` lines and `:dependencies:` fenced
/// groups as build-tool specific snippets: Gradle configuration lines or a
/// Maven `<dependency>` stanza, wrapped in a fenced source block.
///
/// Recognized attributes: `groupId`, `scope`, `version`, `callout`.
pub struct DependencySubstitution;

struct Dependency {
  group_id: String,
  artifact_id: String,
  scope: String,
  version: Option<String>,
  callout: Option<String>,
}

impl Dependency {
  fn parse(line: &str) -> Option<Self> {
    let macro_ = Macro::parse(MACRO_DEPENDENCY, line)?;
    Some(Self {
      group_id: macro_
        .attribute("groupId")
        .unwrap_or(DEFAULT_GROUP_ID)
        .to_owned(),
      scope: macro_
        .attribute("scope")
        .unwrap_or(DEFAULT_SCOPE)
        .to_owned(),
      version: macro_.attribute("version").map(str::to_owned),
      callout: macro_.attribute("callout").map(str::to_owned),
      artifact_id: macro_.target,
    })
  }

  fn gradle_scope(&self, language: Language) -> &str {
    if self.scope == "annotationProcessor" && language == Language::Kotlin {
      return "kapt";
    }
    &self.scope
  }

  /// Maven has no per-configuration scopes; Gradle configurations map
  /// onto the closest Maven scope, with compile left implicit.
  fn maven_scope(&self) -> Option<&'static str> {
    match self.scope.as_str() {
      "testImplementation" | "testCompileOnly" | "testRuntimeOnly" => {
        Some("test")
      },
      "compileOnly" | "annotationProcessor" => Some("provided"),
      "runtimeOnly" => Some("runtime"),
      _ => None,
    }
  }

  fn gradle_lines(&self, language: Language) -> Vec<String> {
    let version = self
      .version
      .as_ref()
      .map(|version| format!(":{version}"))
      .unwrap_or_default();
    let callout = self
      .callout
      .as_ref()
      .map(|number| format!(" // <{number}>"))
      .unwrap_or_default();
    vec![format!(
      "{}(\"{}:{}{version}\"){callout}",
      self.gradle_scope(language),
      self.group_id,
      self.artifact_id
    )]
  }

  fn maven_lines(&self) -> Vec<String> {
    let callout = self
      .callout
      .as_ref()
      .map(|number| format!(" <!--{number}-->"))
      .unwrap_or_default();
    let mut lines = vec![
      format!("<dependency>{callout}"),
      format!("    <groupId>{}</groupId>", self.group_id),
      format!("    <artifactId>{}</artifactId>", self.artifact_id),
    ];
    if let Some(version) = &self.version {
      lines.push(format!("    <version>{version}</version>"));
    }
    if let Some(scope) = self.maven_scope() {
      lines.push(format!("    <scope>{scope}</scope>"));
    }
    lines.push("</dependency>".to_owned());
    lines
  }
}

/// One fenced snippet for a set of dependencies.
fn snippet(dependencies: &[Dependency], option: &GuidesOption) -> String {
  let (language, file) = match option.build_tool {
    BuildTool::Gradle => ("groovy", "build.gradle"),
    BuildTool::Maven => ("xml", "pom.xml"),
  };
  let mut lines = vec![
    format!("[source,{language}]"),
    format!(".{file}"),
    "----".to_owned(),
  ];
  for dependency in dependencies {
    match option.build_tool {
      BuildTool::Gradle => {
        lines.extend(dependency.gradle_lines(option.language));
      },
      BuildTool::Maven => lines.extend(dependency.maven_lines()),
    }
  }
  lines.push("----".to_owned());
  lines.join("\n")
}

impl MacroSubstitution for DependencySubstitution {
  fn order(&self) -> i32 {
    1
  }

  fn substitute(
    &self,
    text: &str,
    _guide: &Guide,
    option: &GuidesOption,
  ) -> Result<String> {
    let mut result = text.to_owned();

    for block in scan::find_macro_groups(text, MACRO_DEPENDENCIES) {
      let dependencies: Vec<Dependency> = block
        .lines()
        .filter_map(Dependency::parse)
        .collect();
      if !dependencies.is_empty() {
        result = result.replace(&block, &snippet(&dependencies, option));
      }
    }

    let lines = scan::find_macro_lines(&result, MACRO_DEPENDENCY);
    for line in lines {
      if let Some(dependency) = Dependency::parse(&line) {
        result = result.replace(&line, &snippet(&[dependency], option));
      }
    }

    Ok(result)
  }
}
