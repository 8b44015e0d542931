//! Dependency-coordinate lookup behind a narrow trait. Resolving
//! coordinates is an external concern; the engine only reads the table for
//! the `@{key}Version@` placeholder family.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A dependency coordinate; only the version participates in substitution.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Coordinate {
  #[serde(default)]
  pub version: String,
}

/// Read-only source of the coordinate table, loaded once per run.
pub trait CoordinatesProvider {
  fn coordinates(&self) -> &BTreeMap<String, Coordinate>;
}

/// In-memory coordinate table.
#[derive(Debug, Clone, Default)]
pub struct StaticCoordinates {
  coordinates: BTreeMap<String, Coordinate>,
}

impl StaticCoordinates {
  #[must_use]
  pub const fn new(coordinates: BTreeMap<String, Coordinate>) -> Self {
    Self { coordinates }
  }
}

impl CoordinatesProvider for StaticCoordinates {
  fn coordinates(&self) -> &BTreeMap<String, Coordinate> {
    &self.coordinates
  }
}
