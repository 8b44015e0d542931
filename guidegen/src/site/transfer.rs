//! Copies guide source trees into the per-option output directories.

use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result};
use fs_extra::dir::{CopyOptions, copy};
use guidegen_core::{
  config::GuidesConfig,
  license::License,
  model::{Guide, Language},
  options::{GuidesOption, guides_options},
  scan,
};
use log::debug;
use walkdir::WalkDir;

/// Path of an excluded source or test file below the app directory:
/// `[{app}/]src/{classpath}/{lang}/{package}/{name}.{ext}`. Excluded test
/// names get the framework suffix rewrite so `FooTest` matches the
/// generated `FooSpec` under Spock.
fn excluded_path(
  app_name: &str,
  file_name: &str,
  classpath: &str,
  option: &GuidesOption,
  config: &GuidesConfig,
) -> String {
  let mut name = file_name.to_owned();
  if classpath == "test"
    && let Some(stem_end) = name.find("Test")
    && name.ends_with("Test")
  {
    name = format!("{}{}", &name[..stem_end], option.test_framework.test_suffix());
  }
  let module = if app_name.is_empty() {
    String::new()
  } else {
    format!("{app_name}/")
  };
  format!(
    "{module}src/{classpath}/{}/{}/{name}.{}",
    option.language,
    config.package_name.replace('.', "/"),
    option.language.extension()
  )
}

/// Copies one app's sources for one language into the destination: the
/// language-independent `src` tree first, then the per-language tree.
fn copy_app_sources(
  input_dir: &Path,
  destination: &Path,
  app_name: &str,
  option: &GuidesOption,
) -> Result<()> {
  fs::create_dir_all(destination)?;
  let options = CopyOptions::new().overwrite(true).content_only(true);

  let shared = input_dir.join(app_name).join("src");
  if shared.exists() {
    let target = destination.join("src");
    fs::create_dir_all(&target)?;
    copy(&shared, &target, &options).wrap_err_with(|| {
      format!("Failed to copy shared sources from {}", shared.display())
    })?;
  }

  let per_language = input_dir.join(app_name).join(option.language.name());
  if per_language.exists() {
    copy(&per_language, destination, &options).wrap_err_with(|| {
      format!("Failed to copy sources from {}", per_language.display())
    })?;
  } else {
    debug!("No {} sources under {}", option.language, input_dir.display());
  }
  Ok(())
}

fn remove_if_present(destination: &Path, relative: &str) -> Result<()> {
  let file = destination.join(relative);
  if file.exists() {
    debug!("Removing excluded file {}", file.display());
    fs::remove_file(&file)?;
  }
  Ok(())
}

/// File extensions configured as language names ("kotlin") map onto the
/// extension source files actually use ("kt").
fn header_extensions(config: &GuidesConfig) -> Vec<&str> {
  config
    .source_files_extensions
    .iter()
    .map(|name| {
      Language::VALUES
        .iter()
        .find(|language| language.name() == name)
        .map_or(name.as_str(), |language| language.extension())
    })
    .collect()
}

/// Prepends the license header to source files in the folder that do not
/// carry one yet.
fn add_licenses(
  folder: &Path,
  license: &License,
  config: &GuidesConfig,
) -> Result<()> {
  if license.text().is_empty() {
    return Ok(());
  }
  let extensions = header_extensions(config);
  for entry in WalkDir::new(folder).into_iter().filter_map(Result::ok) {
    let path = entry.path();
    let needs_header = path
      .extension()
      .and_then(|extension| extension.to_str())
      .is_some_and(|extension| extensions.contains(&extension));
    if !needs_header || !path.is_file() {
      continue;
    }
    let content = fs::read_to_string(path)?;
    if !content.contains("Licensed under") {
      fs::write(path, format!("{}{content}", license.text()))?;
    }
  }
  Ok(())
}

/// Copies a guide's input tree into `{output}/{sourceDir}` for every
/// option, honoring base-guide layering, excluded files, zip includes and
/// license headers.
pub fn transfer_files(
  input_dir: &Path,
  output_dir: &Path,
  guide: &Guide,
  config: &GuidesConfig,
  license: &License,
) -> Result<()> {
  for option in guides_options(guide) {
    let folder = scan::source_dir(&guide.slug, &option);
    for app in &guide.apps {
      let app_name = if app.name == config.default_app_name {
        ""
      } else {
        app.name.as_str()
      };
      let destination = output_dir.join(&folder).join(app_name);

      // A base guide's sources come first and may be overwritten.
      if let Some(base) = &guide.base
        && let Some(parent) = input_dir.parent()
      {
        copy_app_sources(&parent.join(base), &destination, app_name, &option)?;
      }
      copy_app_sources(input_dir, &destination, app_name, &option)?;

      for name in &app.exclude_source {
        remove_if_present(
          &destination,
          &excluded_path(app_name, name, "main", &option, config),
        )?;
      }
      for name in &app.exclude_test {
        remove_if_present(
          &destination,
          &excluded_path(app_name, name, "test", &option, config),
        )?;
      }
    }

    let destination_root = output_dir.join(&folder);
    for include in &guide.zip_includes {
      let source = input_dir.join(include);
      let target = destination_root.join(include);
      if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
      }
      fs::copy(&source, &target).wrap_err_with(|| {
        format!("Failed to copy zip include {}", source.display())
      })?;
    }
    add_licenses(&destination_root, license, config)?;
  }
  Ok(())
}
