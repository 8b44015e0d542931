//! Named template resolution: embedded defaults, each replaceable by a
//! same-named file from an override directory.

use std::{collections::HashMap, fs, path::Path};

use color_eyre::eyre::{Context, Result};
use guidegen_core::Error;
use log::debug;

/// The template set for one generation run.
pub struct TemplateSet {
  templates: HashMap<&'static str, String>,
}

impl TemplateSet {
  /// Loads the embedded templates, applying overrides from the directory
  /// when one is configured.
  pub fn load(overrides: Option<&Path>) -> Result<Self> {
    let mut templates: HashMap<&'static str, String> =
      guidegen_templates::all_templates()
        .into_iter()
        .map(|(name, content)| (name, content.to_owned()))
        .collect();
    if let Some(dir) = overrides {
      for (name, content) in &mut templates {
        let file = dir.join(name);
        if file.exists() {
          debug!("Using template override {}", file.display());
          *content = fs::read_to_string(&file)
            .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
        }
      }
    }
    Ok(Self { templates })
  }

  /// The template registered under `name`. Unknown names are fatal; the
  /// set of names is fixed at compile time.
  pub fn get(&self, name: &str) -> guidegen_core::Result<&str> {
    self
      .templates
      .get(name)
      .map(String::as_str)
      .ok_or_else(|| Error::MissingTemplate(name.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_templates_resolve_by_file_name() {
    let templates = TemplateSet::load(None).expect("load");
    assert_eq!(
      templates.get("guide.html").expect("template"),
      guidegen_templates::GUIDE_TEMPLATE
    );
  }

  #[test]
  fn unknown_template_name_is_fatal() {
    let templates = TemplateSet::load(None).expect("load");
    let err = templates.get("missing.html").expect_err("unknown");
    assert!(matches!(err, Error::MissingTemplate(_)));
  }

  #[test]
  fn override_directory_replaces_embedded_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("guide.html"), "<main>{content}</main>")
      .expect("write");
    let templates = TemplateSet::load(Some(dir.path())).expect("load");
    assert_eq!(
      templates.get("guide.html").expect("template"),
      "<main>{content}</main>"
    );
    assert_eq!(
      templates.get("guides.html").expect("template"),
      guidegen_templates::GUIDES_INDEX_TEMPLATE
    );
  }
}
