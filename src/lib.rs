pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::engine::SearchEngine;
pub use domain::model::Flight;
pub use utils::error::{FlightError, Result};
