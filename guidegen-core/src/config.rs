use serde::Deserialize;

/// Immutable configuration for a generation run.
///
/// Every recognized field is enumerated here; the struct is loaded once at
/// process start (from `guidegen.toml` plus CLI overrides) and passed by
/// reference into the pipeline. Substitution rules never mutate it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GuidesConfig {
  /// Site title, used by the index page and the feeds.
  pub title: String,

  /// Public base URL of the published site.
  pub home_page_url: String,

  /// Base URL substituted for the `@api@` placeholder.
  pub api_url: String,

  /// Package name used when computing conventional source paths.
  pub package_name: String,

  /// Name of a guide's primary application.
  pub default_app_name: String,

  /// Path to the license header file prepended to generated sources.
  /// `None` disables license-header line exclusion in source blocks.
  pub license_path: Option<String>,

  /// Minimum JDK assumed when a guide does not declare one.
  pub default_min_jdk: u32,

  /// Framework version substituted for the `@micronaut@` placeholder.
  pub version: String,

  /// Directory name holding the guide definitions.
  pub guides_dir: String,

  /// Environment variable consulted for the active JDK version.
  pub env_jdk_version: String,

  /// Name of the Java CI workflow, checked against `env_github_workflow`.
  pub github_workflow_java_ci: String,

  /// Environment variable holding the current GitHub workflow name.
  pub env_github_workflow: String,

  /// Extensions of source files that carry the license header.
  pub source_files_extensions: Vec<String>,

  /// URL of the external project generator linked from guides.
  pub project_generator_url: String,
}

impl Default for GuidesConfig {
  fn default() -> Self {
    Self {
      title: "Guides".into(),
      home_page_url: "https://guides.example.io/latest/".into(),
      api_url: "https://docs.micronaut.io/latest/api".into(),
      package_name: "example.micronaut".into(),
      default_app_name: "default".into(),
      license_path: None,
      default_min_jdk: 17,
      version: "0.0.0".into(),
      guides_dir: "guides".into(),
      env_jdk_version: "JDK_VERSION".into(),
      github_workflow_java_ci: "Java CI".into(),
      env_github_workflow: "GITHUB_WORKFLOW".into(),
      source_files_extensions: vec![
        "java".into(),
        "kotlin".into(),
        "groovy".into(),
      ],
      project_generator_url: "https://micronaut.io/launch".into(),
    }
  }
}
