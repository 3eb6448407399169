use crate::core::parser;
use crate::domain::model::Flight;
use crate::domain::ports::Storage;
use crate::utils::error::{FlightError, Result};

pub fn load_flights<S: Storage>(storage: &S, path: &str) -> Result<Vec<Flight>> {
    let contents = storage.read_to_string(path)?;

    let mut flights = Vec::new();
    for line in contents.lines() {
        match parser::parse_flight(line) {
            Ok(flight) => flights.push(flight),
            Err(FlightError::FormatError { line }) => {
                // 跳過壞行，繼續載入
                tracing::warn!("Malformed record skipped: {}", line);
                println!("⚠️ Skipping malformed line: {}", line);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!("Loaded {} flights from {}", flights.len(), path);
    Ok(flights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Mutex::new(HashMap::new()),
            }
        }

        fn insert(&self, path: &str, data: &str) {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }
    }

    impl Storage for MockStorage {
        fn read_to_string(&self, path: &str) -> Result<String> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
                .ok_or_else(|| {
                    FlightError::IoError(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("File not found: {}", path),
                    ))
                })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let storage = MockStorage::new();
        storage.insert(
            "flights.txt",
            "Moscow,Paris,500\nMoscow,Paris,abc\nKiev,London,700\n",
        );

        let flights = load_flights(&storage, "flights.txt").unwrap();
        assert_eq!(
            flights,
            vec![
                Flight::new("Moscow", "Paris", 500),
                Flight::new("Kiev", "London", 700),
            ]
        );
    }

    #[test]
    fn test_load_preserves_file_order() {
        let storage = MockStorage::new();
        storage.insert(
            "flights.txt",
            "C,Paris,300\nA,Paris,100\nB,Paris,200\n",
        );

        let flights = load_flights(&storage, "flights.txt").unwrap();
        let origins: Vec<&str> = flights.iter().map(|f| f.origin.as_str()).collect();
        assert_eq!(origins, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_load_handles_crlf_line_endings() {
        let storage = MockStorage::new();
        storage.insert("flights.txt", "Moscow,Paris,500\r\nKiev,London,700\r\n");

        let flights = load_flights(&storage, "flights.txt").unwrap();
        assert_eq!(flights.len(), 2);
    }

    #[test]
    fn test_load_empty_file_yields_no_flights() {
        let storage = MockStorage::new();
        storage.insert("flights.txt", "");

        let flights = load_flights(&storage, "flights.txt").unwrap();
        assert!(flights.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let storage = MockStorage::new();

        let err = load_flights(&storage, "flights.txt").unwrap_err();
        assert!(matches!(err, FlightError::IoError(_)));
    }
}
