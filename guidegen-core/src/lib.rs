//! # guidegen-core - the guide composition engine
//!
//! Turns per-guide metadata plus Asciidoc markup with custom macros into
//! renderable documents, one per (build tool, language, test framework)
//! option.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use guidegen_core::{
//!   config::GuidesConfig,
//!   license::License,
//!   model::{BuildTool, Language, TestFramework},
//!   options::GuidesOption,
//!   substitution::Pipeline,
//! };
//!
//! let pipeline = Pipeline::with_default_rules(
//!   &GuidesConfig::default(),
//!   &BTreeMap::new(),
//!   &License::default(),
//! );
//! let option = GuidesOption::new(
//!   BuildTool::Gradle,
//!   Language::Java,
//!   TestFramework::Junit,
//! );
//! let guide = guidegen_core::model::Guide::default();
//! let rendered = pipeline.apply("Plain prose stays as-is.", &guide, &option);
//! assert!(rendered.is_ok());
//! ```
//!
//! The crate is deliberately filesystem-free: parsing takes strings,
//! substitution returns strings, and the binary crate owns all I/O.

pub mod asciidoc;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod license;
pub mod merge;
pub mod model;
pub mod options;
pub mod parser;
pub mod scan;
pub mod substitution;

pub use error::{Error, Result};
