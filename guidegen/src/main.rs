use color_eyre::eyre::Result;
use log::LevelFilter;

mod cli;
mod config;
mod schema;
mod site;

use cli::{Cli, Commands};
use config::Config;
use schema::JsonSchemaValidator;
use site::{convert::AsciidoctorProcess, generator::SiteGenerator};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::Init { output, force } => {
      if output.exists() && !force {
        color_eyre::eyre::bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }
      Config::write_default(output)
    },
    Commands::Generate { input, output } => {
      let config = Config::load(&cli.config_file)?;
      let license = config.load_license()?;
      let converter = AsciidoctorProcess::default();
      let validator = JsonSchemaValidator::new()?;
      let generator =
        SiteGenerator::new(&config, license, &converter, &validator);
      generator.generate(input, output)
    },
  }
}
