//! Parses one directory's metadata document into a [`Guide`].
//!
//! Parsing is deliberately forgiving at the run level: a guide whose
//! metadata fails validation or deserialization is logged and skipped so
//! the rest of the site still builds. Draft guides (`publish == false`)
//! skip schema validation entirely since they may be incomplete.

use log::{debug, warn};
use serde_json::Value;

use crate::model::Guide;

/// Produces schema violations for a metadata document; an empty list means
/// the document is valid. Implementations live outside the engine.
pub trait SchemaValidator {
  fn validate(&self, json: &str) -> Vec<String>;
}

/// A validator that accepts everything. Useful for tests and for callers
/// that validate elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl SchemaValidator for AcceptAll {
  fn validate(&self, _json: &str) -> Vec<String> {
    Vec::new()
  }
}

/// Parses a guide metadata document, assigning the slug from the containing
/// directory name. Returns `None` when the guide must be skipped.
#[must_use]
pub fn parse_guide(
  content: &str,
  dir_name: &str,
  validator: &dyn SchemaValidator,
) -> Option<Guide> {
  let raw: Value = match serde_json::from_str(content) {
    Ok(raw) => raw,
    Err(e) => {
      debug!("Error parsing guide metadata for '{dir_name}': {e}. Skipping guide.");
      return None;
    },
  };
  let publish = raw
    .get("publish")
    .and_then(Value::as_bool)
    .unwrap_or(true);

  if publish {
    let violations = validator.validate(content);
    if !violations.is_empty() {
      warn!(
        "Guide metadata for '{dir_name}' does not validate the JSON schema: \
         {}. Skipping guide.",
        violations.join("; ")
      );
      return None;
    }
  }

  let mut guide: Guide = match serde_json::from_str(content) {
    Ok(guide) => guide,
    Err(e) => {
      debug!("Error parsing guide metadata for '{dir_name}': {e}. Skipping guide.");
      return None;
    },
  };

  guide.slug = dir_name.to_owned();
  guide.asciidoctor = publish.then(|| format!("{dir_name}.adoc"));
  if !publish {
    guide.publication_date = None;
  }

  Some(guide)
}
