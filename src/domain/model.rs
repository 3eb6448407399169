use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub origin: String,
    pub destination: String,
    pub price: i32,
}

impl Flight {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, price: i32) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            price,
        }
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight from {} to {} for {} rubles",
            self.origin, self.destination, self.price
        )
    }
}
