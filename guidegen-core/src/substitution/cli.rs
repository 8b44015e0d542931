use super::{substitute_placeholder_with_target, MacroSubstitution};
use crate::{
  error::{Error, Result},
  model::{ApplicationType, Guide},
  options::GuidesOption,
};

const MACRO_CLI_COMMAND: &str = "cli-command";

/// Replaces `@app:cli-command@` with the project-generator command for the
/// app's kind. An unknown app name or an unrecognized kind is fatal.
pub struct CliCommandSubstitution;

fn cli_command(
  kind: ApplicationType,
  app: &str,
  guide: &Guide,
) -> Result<&'static str> {
  match kind {
    ApplicationType::Default => Ok("create-app"),
    ApplicationType::Cli => Ok("create-cli-app"),
    ApplicationType::Function => Ok("create-function-app"),
    ApplicationType::Grpc => Ok("create-grpc-app"),
    ApplicationType::Messaging => Ok("create-messaging-app"),
    ApplicationType::Unknown => Err(Error::UnknownApplicationType {
      app: app.to_owned(),
      slug: guide.slug.clone(),
    }),
  }
}

impl MacroSubstitution for CliCommandSubstitution {
  fn order(&self) -> i32 {
    2
  }

  fn substitute(
    &self,
    text: &str,
    guide: &Guide,
    _option: &GuidesOption,
  ) -> Result<String> {
    substitute_placeholder_with_target(text, MACRO_CLI_COMMAND, |app_name| {
      let app = super::require_app(guide, app_name)?;
      Ok(cli_command(app.application_type(), app_name, guide)?.to_owned())
    })
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;
  use crate::model::{App, BuildTool, Language, TestFramework};

  fn option() -> GuidesOption {
    GuidesOption::new(BuildTool::Gradle, Language::Java, TestFramework::Junit)
  }

  fn guide_with(kind: ApplicationType) -> Guide {
    Guide {
      slug: "demo".to_owned(),
      apps: vec![App {
        name: "default".to_owned(),
        application_type: Some(kind),
        ..App::default()
      }],
      ..Guide::default()
    }
  }

  #[test]
  fn default_kind_maps_to_create_app() {
    let out = CliCommandSubstitution
      .substitute(
        "mn @cli-command@ example.micronaut.demo",
        &guide_with(ApplicationType::Default),
        &option(),
      )
      .expect("substitute");
    assert_eq!(out, "mn create-app example.micronaut.demo");
  }

  #[test]
  fn cli_kind_maps_to_create_cli_app() {
    let out = CliCommandSubstitution
      .substitute(
        "@default:cli-command@",
        &guide_with(ApplicationType::Cli),
        &option(),
      )
      .expect("substitute");
    assert_eq!(out, "create-cli-app");
  }

  #[test]
  fn unknown_kind_is_fatal() {
    let err = CliCommandSubstitution
      .substitute(
        "@cli-command@",
        &guide_with(ApplicationType::Unknown),
        &option(),
      )
      .unwrap_err();
    assert!(matches!(err, Error::UnknownApplicationType { .. }));
  }

  #[test]
  fn missing_app_is_fatal() {
    let err = CliCommandSubstitution
      .substitute(
        "@other:cli-command@",
        &guide_with(ApplicationType::Default),
        &option(),
      )
      .unwrap_err();
    assert!(matches!(err, Error::AppNotFound { .. }));
  }
}
