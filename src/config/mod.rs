pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "flight-finder")]
#[command(about = "An interactive flight search tool over flat-file flight data")]
pub struct CliConfig {
    #[arg(long, default_value = ".")]
    pub base_dir: String,

    #[arg(long, default_value = "flights.txt")]
    pub data_file: String,

    #[arg(long, default_value = "results.txt")]
    pub output_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("base_dir", &self.base_dir)?;
        validate_path("data_file", &self.data_file)?;
        validate_path("output_file", &self.output_file)?;
        Ok(())
    }
}
