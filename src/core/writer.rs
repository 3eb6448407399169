use crate::domain::model::Flight;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Renders one line per record and overwrites the destination in a single write.
pub fn save_results<S: Storage>(storage: &S, path: &str, flights: &[Flight]) -> Result<()> {
    let mut body = String::new();
    for flight in flights {
        body.push_str(&format!("{}\n", flight));
    }

    storage.write_file(path, body.as_bytes())?;

    tracing::info!("Saved {} results to {}", flights.len(), path);
    Ok(())
}
