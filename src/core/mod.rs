pub mod engine;
pub mod filter;
pub mod parser;
pub mod repository;
pub mod writer;

pub use crate::domain::model::Flight;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
