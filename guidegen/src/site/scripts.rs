//! Bash test scripts written next to each guide's generated projects.

use std::fmt::Write as _;

use guidegen_core::{
  model::{App, BuildTool, Guide, Language, TestFramework},
  options::{GuidesOption, guides_options},
  scan,
  substitution::APP_NAME_DEFAULT,
};

const HEADER: &str = "#!/usr/bin/env bash\nset -e\n\n\
                      FAILED_PROJECTS=()\nEXIT_STATUS=0\n";

const FOOTER: &str = "if [ ${#FAILED_PROJECTS[@]} -ne 0 ]; then\n\
                      \u{20} echo \"\"\n\
                      \u{20} echo \"-------------------------------------------------\"\n\
                      \u{20} echo \"Projects with errors:\"\n\
                      \u{20} for p in `echo ${FAILED_PROJECTS[@]}`; do\n\
                      \u{20}   echo \"  $p\"\n\
                      \u{20} done;\n\
                      \u{20} echo \"-------------------------------------------------\"\n\
                      \u{20} exit 1\n\
                      else\n\
                      \u{20} exit 0\n\
                      fi\n";

fn is_micronaut_framework(app: &App) -> bool {
  app.framework() == "Micronaut"
}

/// Native image tests only run for Micronaut Gradle projects under JUnit,
/// and Groovy has no native support.
fn supports_native_test(app: &App, option: &GuidesOption) -> bool {
  is_micronaut_framework(app)
    && option.build_tool == BuildTool::Gradle
    && option.language != Language::Groovy
    && option.test_framework == TestFramework::Junit
}

fn test_command(
  build_tool: BuildTool,
  native: bool,
  validate_license: bool,
) -> &'static str {
  match (build_tool, native, validate_license) {
    (BuildTool::Maven, true, _) => "./mvnw -Pnative test",
    (BuildTool::Gradle, true, _) => "./gradlew nativeTest",
    (BuildTool::Maven, false, true) => "./mvnw -q test spotless:check",
    (BuildTool::Maven, false, false) => "./mvnw -q test",
    (BuildTool::Gradle, false, _) => "./gradlew -q check",
  }
}

fn script_for_folder(
  nested_folder: &str,
  folder: &str,
  build_tool: BuildTool,
  native: bool,
  validate_license: bool,
) -> String {
  let test_copy = if native { "native tests" } else { "tests" };
  let mut script = format!(
    "cd {nested_folder}\n\
     echo \"-------------------------------------------------\"\n\
     echo \"Executing '{folder}' {test_copy}\"\n\
     {} || EXIT_STATUS=$?\n\
     cd ..\n",
    test_command(build_tool, native, validate_license)
  );
  let _ = write!(
    script,
    "if [ $EXIT_STATUS -ne 0 ]; then\n\
     \u{20} FAILED_PROJECTS=(\"${{FAILED_PROJECTS[@]}}\" {folder})\n\
     \u{20} echo \"'{folder}' {test_copy} failed => exit $EXIT_STATUS\"\n\
     fi\n\
     EXIT_STATUS=0\n"
  );
  script
}

fn generate(guide: &Guide, native: bool) -> String {
  let mut script = String::from(HEADER);
  for option in guides_options(guide) {
    let folder = scan::source_dir(&guide.slug, &option);
    // Groovy under Maven is not generated.
    if option.build_tool == BuildTool::Maven
      && option.language == Language::Groovy
    {
      continue;
    }
    script.push('\n');
    if let Some(app) = guide.app(APP_NAME_DEFAULT) {
      if !native || supports_native_test(app, &option) {
        script.push_str(&script_for_folder(
          &folder,
          &folder,
          option.build_tool,
          native,
          app.validate_license(),
        ));
      }
    } else {
      let _ = writeln!(script, "cd {folder}");
      for app in &guide.apps {
        if !native || supports_native_test(app, &option) {
          script.push_str(&script_for_folder(
            &app.name,
            &format!("{folder}/{}", app.name),
            option.build_tool,
            native,
            app.validate_license(),
          ));
        }
      }
      script.push_str("cd ..\n");
    }
  }
  script.push('\n');
  script.push_str(FOOTER);
  script
}

/// The `test.sh` script for one guide's generated projects.
#[must_use]
pub fn test_script(guide: &Guide) -> String {
  generate(guide, false)
}

/// The `native-test.sh` script; options without native support are left
/// out.
#[must_use]
pub fn native_test_script(guide: &Guide) -> String {
  generate(guide, true)
}
