//! Expose the CLI's internals for integration tests. The supported surface
//! is the `guidegen` binary; this API carries no stability promise.
pub mod cli;
pub mod config;
pub mod schema;
pub mod site;
