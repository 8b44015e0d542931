//! Site assembly: everything between the substitution pipeline's output and
//! files on disk.

pub mod convert;
pub mod feed;
pub mod generator;
pub mod index;
pub mod page;
pub mod scripts;
pub mod templates;
pub mod transfer;
