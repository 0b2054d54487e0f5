pub mod settings;
pub mod toml_config;

pub use settings::SeedSettings;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::LockerQuoting;
#[cfg(feature = "cli")]
use settings::parse_delimiter;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "employee-seed")]
#[command(about = "Generate a PostgreSQL insert script for the employees table")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read employees from a CSV file instead of the built-in examples
    #[arg(short, long)]
    pub input: Option<String>,

    /// Field delimiter for the input file (one character, or \t); `.tsv` files default to tab
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Split the insert into statements of at most this many rows
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Quote locker numbers without escaping, like older scripts did
    #[arg(long)]
    pub verbatim_lockers: bool,

    /// Leave out the usage template block
    #[arg(long)]
    pub no_template: bool,

    /// Validate the rows and print them as JSON without writing SQL
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔 (如有) 並套用命令列覆蓋設定
    pub fn load_settings(&self) -> Result<SeedSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.to_settings()?
            }
            None => SeedSettings::default(),
        };
        self.apply_overrides(&mut settings)?;
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut SeedSettings) -> Result<()> {
        if let Some(input) = &self.input {
            settings.input = Some(PathBuf::from(input));
        }
        if let Some(delimiter) = &self.delimiter {
            settings.delimiter = Some(parse_delimiter("--delimiter", delimiter)?);
        }
        if let Some(output) = &self.output {
            settings.output = Some(PathBuf::from(output));
        }
        if let Some(batch_size) = self.batch_size {
            settings.options.batch_size = Some(batch_size);
        }
        if self.verbatim_lockers {
            settings.options.locker_quoting = LockerQuoting::Verbatim;
        }
        if self.no_template {
            settings.options.include_template = false;
        }
        Ok(())
    }
}
