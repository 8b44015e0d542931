use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for guidegen
#[derive(Parser, Debug)]
#[command(author, version, about = "guidegen: Asciidoc guide site generator")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to the configuration file
  #[arg(short = 'c', long = "config-file", default_value = "guidegen.toml")]
  pub config_file: PathBuf,
}

/// All supported subcommands for the guidegen CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Write a default configuration file to get started.
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "guidegen.toml")]
    output: PathBuf,

    /// Force overwrite if the file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Generate the guide site: one HTML page per guide option, index and
  /// matrix pages, RSS and JSON feeds.
  Generate {
    /// Directory containing one subdirectory per guide
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the generated site
    #[arg(short, long)]
    output: PathBuf,
  },
}

impl Cli {
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
