use crate::utils::error::{FlightError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FlightError::ConfigError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FlightError::ConfigError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

// 與原始輸入逐字解析，不修剪空白
pub fn parse_price(input: &str) -> Result<i32> {
    input.parse::<i32>().map_err(|_| FlightError::ValidationError {
        input: input.to_string(),
    })
}
