//! Entity graph for guide metadata: guides, their applications and the
//! closed enumerations the option matrix is built from.

mod app;
mod guide;
mod types;

pub use app::App;
pub use guide::Guide;
pub use types::{ApplicationType, BuildTool, Cloud, Language, TestFramework};
