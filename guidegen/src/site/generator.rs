//! End-to-end site generation: parse, merge, render, write.

use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result, bail};
use guidegen_core::{
  coordinates::{CoordinatesProvider as _, StaticCoordinates},
  license::License,
  merge::merge_guide_set,
  model::Guide,
  options::guides_options,
  parser::{self, SchemaValidator},
  scan,
  substitution::Pipeline,
};
use log::{debug, info};

use super::{feed, index, page, scripts, templates::TemplateSet, transfer};
use crate::config::Config;

const FILENAME_METADATA: &str = "metadata.json";
const FILENAME_TEST_SH: &str = "test.sh";
const FILENAME_NATIVE_TEST_SH: &str = "native-test.sh";
const FILENAME_INDEX_HTML: &str = "index.html";

/// Generates the whole site from an input tree of guide directories.
pub struct SiteGenerator<'a> {
  config: &'a Config,
  license: License,
  pipeline: Pipeline,
  converter: &'a dyn super::convert::AsciidocConverter,
  validator: &'a dyn SchemaValidator,
}

impl<'a> SiteGenerator<'a> {
  pub fn new(
    config: &'a Config,
    license: License,
    converter: &'a dyn super::convert::AsciidocConverter,
    validator: &'a dyn SchemaValidator,
  ) -> Self {
    let coordinates = StaticCoordinates::new(config.coordinates.clone());
    let pipeline = Pipeline::with_default_rules(
      &config.guides,
      coordinates.coordinates(),
      &license,
    );
    Self {
      config,
      license,
      pipeline,
      converter,
      validator,
    }
  }

  /// Parses every guide directory under the input tree, in directory-name
  /// order. Directories without a metadata document are skipped.
  fn parse_guides(&self, input: &Path) -> Result<Vec<Guide>> {
    let mut entries: Vec<_> = fs::read_dir(input)
      .wrap_err_with(|| format!("Failed to read {}", input.display()))?
      .filter_map(std::result::Result::ok)
      .filter(|entry| entry.path().is_dir())
      .collect();
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut guides = Vec::new();
    for entry in entries {
      let metadata_path = entry.path().join(FILENAME_METADATA);
      if !metadata_path.exists() {
        debug!("No {FILENAME_METADATA} in {}", entry.path().display());
        continue;
      }
      let content = fs::read_to_string(&metadata_path).wrap_err_with(|| {
        format!("Failed to read {}", metadata_path.display())
      })?;
      let dir_name = entry.file_name().to_string_lossy().into_owned();
      if let Some(guide) =
        parser::parse_guide(&content, &dir_name, self.validator)
      {
        guides.push(guide);
      }
    }
    merge_guide_set(&mut guides)?;
    Ok(guides)
  }

  /// Renders one guide: generated projects, test scripts, one HTML page
  /// per option and the option matrix page.
  fn generate_guide(
    &self,
    input: &Path,
    output: &Path,
    guide: &Guide,
    templates: &TemplateSet,
  ) -> Result<()> {
    info!("Generating guide '{}'", guide.slug);
    let guide_input = input.join(&guide.slug);
    let guide_output = output.join(&guide.slug);
    fs::create_dir_all(&guide_output)?;

    transfer::transfer_files(
      &guide_input,
      &guide_output,
      guide,
      &self.config.guides,
      &self.license,
    )?;
    fs::write(
      guide_output.join(FILENAME_TEST_SH),
      scripts::test_script(guide),
    )?;
    fs::write(
      guide_output.join(FILENAME_NATIVE_TEST_SH),
      scripts::native_test_script(guide),
    )?;

    let Some(document) = &guide.asciidoctor else {
      info!("Skipping draft guide '{}'", guide.slug);
      return Ok(());
    };
    let asciidoc_path = guide_input.join(document);
    if !asciidoc_path.exists() {
      bail!("asciidoc file not found for {}", guide.slug);
    }
    let asciidoc = fs::read_to_string(&asciidoc_path)?;

    for option in guides_options(guide) {
      let name = scan::source_dir(&guide.slug, &option);
      let substituted = self.pipeline.apply(&asciidoc, guide, &option)?;
      let html = self.converter.convert(&substituted, output)?;
      let (toc, content) = page::extract_toc(&html);
      let rendered =
        page::render(templates.get("guide.html")?, &toc, &content);
      fs::write(output.join(format!("{name}.html")), rendered)?;
    }

    fs::write(
      output.join(format!("{}.html", guide.slug)),
      index::render_matrix(guide),
    )?;
    Ok(())
  }

  /// Runs the full generation: every guide, then the index page and both
  /// feeds.
  pub fn generate(&self, input: &Path, output: &Path) -> Result<()> {
    fs::create_dir_all(output)?;
    let templates =
      TemplateSet::load(self.config.templates_dir.as_deref())?;
    let guides = self.parse_guides(input)?;
    info!("Parsed {} guides", guides.len());

    for guide in &guides {
      self.generate_guide(input, output, guide, &templates)?;
    }

    fs::write(
      output.join(FILENAME_INDEX_HTML),
      index::render_index(
        templates.get("guides.html")?,
        templates.get("index-item.html")?,
        &guides,
      ),
    )?;
    fs::write(
      output.join(feed::RSS_FILENAME),
      feed::rss_feed(&self.config.guides, &guides)?,
    )?;
    fs::write(
      output.join(feed::JSON_FEED_FILENAME),
      feed::json_feed(&self.config.guides, &guides)?,
    )?;
    info!("Site generated at {}", output.display());
    Ok(())
  }
}
