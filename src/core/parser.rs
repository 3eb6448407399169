use crate::domain::model::Flight;
use crate::utils::error::{FlightError, Result};
use regex::Regex;
use std::sync::OnceLock;

static FLIGHT_LINE: OnceLock<Regex> = OnceLock::new();

// ORIGIN,DEST,PRICE — any run of whitespace allowed after each comma
fn flight_line() -> &'static Regex {
    FLIGHT_LINE.get_or_init(|| Regex::new(r"^(\w+),\s*(\w+),\s*(\d+)$").unwrap())
}

pub fn parse_flight(line: &str) -> Result<Flight> {
    let caps = flight_line()
        .captures(line)
        .ok_or_else(|| FlightError::FormatError {
            line: line.to_string(),
        })?;

    // 價格超出 i32 範圍時整行視為格式錯誤
    let price: i32 = caps[3].parse().map_err(|_| FlightError::FormatError {
        line: line.to_string(),
    })?;

    Ok(Flight {
        origin: caps[1].to_string(),
        destination: caps[2].to_string(),
        price,
    })
}
