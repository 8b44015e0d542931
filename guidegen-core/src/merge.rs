//! Merging of derived guides into their base guide.
//!
//! A guide naming a `base` slug inherits every field it leaves unset.
//! List fields are unioned base-first with duplicates dropped, apps are
//! matched by name and merged field by field, and one level of inheritance
//! is resolved per run. The merged guide set comes back sorted by slug so
//! downstream output is deterministic.

use std::collections::BTreeMap;

use crate::{
  error::{Error, Result},
  model::{App, Guide},
};

/// Union of two lists, base elements first, order-preserving, duplicates
/// dropped.
fn merge_lists<T: Clone + PartialEq>(base: &[T], derived: &[T]) -> Vec<T> {
  let mut merged: Vec<T> = Vec::with_capacity(base.len() + derived.len());
  for item in base.iter().chain(derived) {
    if !merged.contains(item) {
      merged.push(item.clone());
    }
  }
  merged
}

fn inherit<T: Clone>(base: &Option<T>, derived: &mut Option<T>) {
  if derived.is_none() {
    *derived = base.clone();
  }
}

fn inherit_string(base: &str, derived: &mut String) {
  if derived.is_empty() {
    *derived = base.to_owned();
  }
}

/// Merges a base app into a derived app of the same name. Scalars the
/// derived app leaves unset are inherited; feature and exclusion lists are
/// unioned.
fn merge_app(base: &App, derived: &mut App) {
  inherit(&base.package_name, &mut derived.package_name);
  inherit(&base.application_type, &mut derived.application_type);
  inherit(&base.framework, &mut derived.framework);
  inherit(&base.test_framework, &mut derived.test_framework);
  inherit(&base.validate_license, &mut derived.validate_license);
  derived.features = merge_lists(&base.features, &derived.features);
  derived.invisible_features =
    merge_lists(&base.invisible_features, &derived.invisible_features);
  derived.java_features =
    merge_lists(&base.java_features, &derived.java_features);
  derived.kotlin_features =
    merge_lists(&base.kotlin_features, &derived.kotlin_features);
  derived.groovy_features =
    merge_lists(&base.groovy_features, &derived.groovy_features);
  derived.exclude_test = merge_lists(&base.exclude_test, &derived.exclude_test);
  derived.exclude_source =
    merge_lists(&base.exclude_source, &derived.exclude_source);
}

/// Merges app lists by name: apps unique to either side are kept as-is,
/// apps present in both are merged field by field. Base-only apps come
/// first, then derived-only apps, then the merged shared apps, each group
/// in declaration order.
fn merge_apps(base: &[App], derived: Vec<App>) -> Vec<App> {
  let mut merged: Vec<App> = base
    .iter()
    .filter(|app| !derived.iter().any(|d| d.name == app.name))
    .cloned()
    .collect();
  let mut shared: Vec<App> = Vec::new();
  for mut app in derived {
    if let Some(base_app) = base.iter().find(|b| b.name == app.name) {
      merge_app(base_app, &mut app);
      shared.push(app);
    } else {
      merged.push(app);
    }
  }
  merged.extend(shared);
  merged
}

/// Merges a base guide into a derived guide, in place.
///
/// Identity fields (slug, document name, publish flag, the base reference
/// itself) always stay the derived guide's own. Skip flags combine with
/// logical or so a base that opts out of a build tool opts its derived
/// guides out too.
pub fn merge_guide(base: &Guide, derived: &mut Guide) {
  inherit_string(&base.title, &mut derived.title);
  inherit_string(&base.intro, &mut derived.intro);
  inherit(&base.publication_date, &mut derived.publication_date);
  inherit(&base.minimum_java_version, &mut derived.minimum_java_version);
  inherit(&base.maximum_java_version, &mut derived.maximum_java_version);
  inherit(&base.cloud, &mut derived.cloud);
  inherit(&base.test_framework, &mut derived.test_framework);
  derived.skip_gradle_tests |= base.skip_gradle_tests;
  derived.skip_maven_tests |= base.skip_maven_tests;
  derived.authors = merge_lists(&base.authors, &derived.authors);
  derived.categories = merge_lists(&base.categories, &derived.categories);
  derived.languages = merge_lists(&base.languages, &derived.languages);
  derived.tags = merge_lists(&base.tags, &derived.tags);
  derived.build_tools = merge_lists(&base.build_tools, &derived.build_tools);
  derived.zip_includes = merge_lists(&base.zip_includes, &derived.zip_includes);
  if derived.env.is_empty() {
    derived.env = base.env.clone();
  }
  derived.apps = merge_apps(&base.apps, std::mem::take(&mut derived.apps));
}

/// Resolves every `base` reference in a guide set, replacing the set with
/// the merged guides sorted by slug.
///
/// One level of inheritance is resolved; a base guide may not name a base
/// of its own. A reference to a slug absent from the set is fatal.
pub fn merge_guide_set(guides: &mut Vec<Guide>) -> Result<()> {
  let mut by_slug: BTreeMap<String, Guide> = guides
    .drain(..)
    .map(|guide| (guide.slug.clone(), guide))
    .collect();

  let slugs: Vec<String> = by_slug.keys().cloned().collect();
  for slug in slugs {
    let Some(base_slug) = by_slug[&slug].base.clone() else {
      continue;
    };
    let base = by_slug
      .get(&base_slug)
      .ok_or_else(|| Error::MissingBaseGuide {
        slug: slug.clone(),
        base: base_slug,
      })?
      .clone();
    if let Some(derived) = by_slug.get_mut(&slug) {
      merge_guide(&base, derived);
    }
  }

  guides.extend(by_slug.into_values());
  Ok(())
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  fn guide(slug: &str, base: Option<&str>) -> Guide {
    Guide {
      slug: slug.to_owned(),
      base: base.map(str::to_owned),
      languages: Vec::new(),
      build_tools: Vec::new(),
      ..Guide::default()
    }
  }

  fn app(name: &str) -> App {
    App {
      name: name.to_owned(),
      ..App::default()
    }
  }

  #[test]
  fn unset_scalars_inherit_from_base() {
    let mut base = guide("base", None);
    base.title = "Base title".to_owned();
    base.minimum_java_version = Some(17);
    let mut derived = guide("derived", Some("base"));
    derived.intro = "Derived intro".to_owned();

    merge_guide(&base, &mut derived);
    assert_eq!(derived.title, "Base title");
    assert_eq!(derived.intro, "Derived intro");
    assert_eq!(derived.minimum_java_version, Some(17));
    assert_eq!(derived.slug, "derived");
  }

  #[test]
  fn authors_inherit_when_absent() {
    let mut base = guide("base", None);
    base.authors = vec!["Sergio".to_owned()];
    let mut derived = guide("derived", Some("base"));

    merge_guide(&base, &mut derived);
    assert_eq!(derived.authors, vec!["Sergio".to_owned()]);
  }

  #[test]
  fn tag_union_drops_duplicates_base_first() {
    let mut base = guide("base", None);
    base.tags = vec!["data".to_owned(), "sql".to_owned()];
    let mut derived = guide("derived", Some("base"));
    derived.tags = vec!["sql".to_owned(), "jdbc".to_owned()];

    merge_guide(&base, &mut derived);
    assert_eq!(derived.tags, vec![
      "data".to_owned(),
      "sql".to_owned(),
      "jdbc".to_owned()
    ]);
  }

  #[test]
  fn skip_flags_combine_with_or() {
    let mut base = guide("base", None);
    base.skip_maven_tests = true;
    let mut derived = guide("derived", Some("base"));

    merge_guide(&base, &mut derived);
    assert!(derived.skip_maven_tests);
    assert!(!derived.skip_gradle_tests);
  }

  #[test]
  fn apps_with_distinct_names_are_both_kept() {
    let mut base = guide("base", None);
    base.apps = vec![app("x")];
    let mut derived = guide("derived", Some("base"));
    derived.apps = vec![app("y")];

    merge_guide(&base, &mut derived);
    let names: Vec<&str> =
      derived.apps.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
  }

  #[test]
  fn shared_app_inherits_unset_framework() {
    let mut base = guide("base", None);
    let mut base_app = app("x");
    base_app.framework = Some("Spring Boot".to_owned());
    base_app.features = vec!["yaml".to_owned()];
    base.apps = vec![base_app];

    let mut derived = guide("derived", Some("base"));
    let mut derived_app = app("x");
    derived_app.features = vec!["graalvm".to_owned()];
    derived.apps = vec![derived_app];

    merge_guide(&base, &mut derived);
    assert_eq!(derived.apps.len(), 1);
    assert_eq!(derived.apps[0].framework(), "Spring Boot");
    assert_eq!(derived.apps[0].features, vec![
      "yaml".to_owned(),
      "graalvm".to_owned()
    ]);
  }

  #[test]
  fn guide_set_is_merged_and_sorted_by_slug() {
    let mut base = guide("zz-base", None);
    base.title = "Base".to_owned();
    let derived = guide("aa-derived", Some("zz-base"));

    let mut guides = vec![base, derived];
    merge_guide_set(&mut guides).expect("merge");
    assert_eq!(guides[0].slug, "aa-derived");
    assert_eq!(guides[0].title, "Base");
    assert_eq!(guides[1].slug, "zz-base");
  }

  #[test]
  fn missing_base_is_fatal() {
    let mut guides = vec![guide("derived", Some("nope"))];
    let err = merge_guide_set(&mut guides).unwrap_err();
    assert!(matches!(err, Error::MissingBaseGuide { .. }));
  }
}
