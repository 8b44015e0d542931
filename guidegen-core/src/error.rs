use std::io;

use thiserror::Error;

/// Top-level error type for the guidegen-core crate.
///
/// Variants map onto the error taxonomy of the generation pipeline:
/// configuration errors and macro-structural errors are fatal for the run,
/// while per-guide parse and validation problems are reported by the parser
/// as skips, not as errors.
#[derive(Debug, Error)]
pub enum Error {
  /// A required template resource is missing. Fatal.
  #[error("Missing template resource: {0}")]
  MissingTemplate(String),

  /// A guide declares a `base` slug that no parsed guide provides. Fatal.
  #[error("Guide '{slug}' references unknown base guide '{base}'")]
  MissingBaseGuide { slug: String, base: String },

  /// A group macro close marker was found with no matching open marker.
  /// Pairing cannot be guessed safely, so the whole run aborts.
  #[error("Unbalanced '{macro_name}' macro group")]
  UnbalancedMacroGroup { macro_name: String },

  /// A macro referenced an app name that the guide does not declare. Fatal.
  #[error("App '{app}' not found in guide '{slug}'")]
  AppNotFound { app: String, slug: String },

  /// An app's application type has no CLI command mapping. Fatal.
  #[error("Unknown application type for app '{app}' in guide '{slug}'")]
  UnknownApplicationType { app: String, slug: String },

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
