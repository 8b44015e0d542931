use std::fmt;

use serde::Deserialize;

/// Programming language a guide's applications can be written in.
///
/// The declaration order is the fixed enumeration order used by option
/// expansion; generated file names depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  Java,
  Groovy,
  Kotlin,
}

impl Language {
  /// All languages, in the fixed enumeration order.
  pub const VALUES: [Self; 3] = [Self::Java, Self::Groovy, Self::Kotlin];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Java => "java",
      Self::Groovy => "groovy",
      Self::Kotlin => "kotlin",
    }
  }

  /// Source file extension for the language.
  #[must_use]
  pub const fn extension(self) -> &'static str {
    match self {
      Self::Java => "java",
      Self::Groovy => "groovy",
      Self::Kotlin => "kt",
    }
  }

  /// Capitalized display name, used by the `@language@` placeholder.
  #[must_use]
  pub const fn capitalized(self) -> &'static str {
    match self {
      Self::Java => "Java",
      Self::Groovy => "Groovy",
      Self::Kotlin => "Kotlin",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Build tool a guide's applications are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
  Gradle,
  Maven,
}

impl BuildTool {
  pub const VALUES: [Self; 2] = [Self::Gradle, Self::Maven];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Gradle => "gradle",
      Self::Maven => "maven",
    }
  }
}

impl fmt::Display for BuildTool {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Test framework used to exercise a guide's applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
  Junit,
  Spock,
  Kotest,
}

impl TestFramework {
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Junit => "junit",
      Self::Spock => "spock",
      Self::Kotest => "kotest",
    }
  }

  /// Language that test sources for this framework are written in.
  #[must_use]
  pub const fn default_language(self) -> Language {
    match self {
      Self::Junit => Language::Java,
      Self::Spock => Language::Groovy,
      Self::Kotest => Language::Kotlin,
    }
  }

  /// Class name suffix of test sources, used by the `@testsuffix@`
  /// placeholder and the `test:` macro target rewrite.
  #[must_use]
  pub const fn test_suffix(self) -> &'static str {
    match self {
      Self::Spock => "Spec",
      Self::Junit | Self::Kotest => "Test",
    }
  }
}

impl fmt::Display for TestFramework {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Kind of application generated for a guide.
///
/// `Unknown` absorbs unrecognized metadata values; rules that need a
/// concrete kind (CLI command substitution) fail loudly when they meet it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
  #[default]
  Default,
  Cli,
  Function,
  Grpc,
  Messaging,
  #[serde(other)]
  Unknown,
}

/// Cloud provider a guide targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cloud {
  Oci,
  Aws,
  Azure,
  Gcp,
}

impl Cloud {
  #[must_use]
  pub const fn display_name(self) -> &'static str {
    match self {
      Self::Oci => "Oracle Cloud",
      Self::Aws => "Amazon Web Services",
      Self::Azure => "Microsoft Azure",
      Self::Gcp => "Google Cloud Platform",
    }
  }

  #[must_use]
  pub const fn acronym(self) -> &'static str {
    match self {
      Self::Oci => "OCI",
      Self::Aws => "AWS",
      Self::Azure => "Azure",
      Self::Gcp => "GCP",
    }
  }
}
