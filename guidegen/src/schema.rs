//! JSON Schema validation of guide metadata against the embedded schema.

use color_eyre::eyre::{Context, Result};
use guidegen_core::parser::SchemaValidator;
use jsonschema::Validator;
use serde_json::Value;

/// The guide metadata schema, embedded at compile time.
const GUIDE_SCHEMA: &str = include_str!("../resources/guide-schema.json");

/// Validates metadata documents against the guide schema, surfacing
/// violations as plain strings for the parser to log.
pub struct JsonSchemaValidator {
  validator: Validator,
}

impl JsonSchemaValidator {
  pub fn new() -> Result<Self> {
    let schema: Value = serde_json::from_str(GUIDE_SCHEMA)
      .wrap_err("Embedded guide schema is not valid JSON")?;
    let validator = jsonschema::validator_for(&schema)
      .wrap_err("Embedded guide schema does not compile")?;
    Ok(Self { validator })
  }
}

impl SchemaValidator for JsonSchemaValidator {
  fn validate(&self, json: &str) -> Vec<String> {
    let Ok(instance) = serde_json::from_str::<Value>(json) else {
      return vec!["document is not valid JSON".to_owned()];
    };
    self
      .validator
      .iter_errors(&instance)
      .map(|error| format!("{}: {error}", error.instance_path))
      .collect()
  }
}
