use serde::{Deserialize, Serialize};

/// A single line entry on a submitted receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,  // Decimal string, e.g. "6.49"
}

/// Receipt as submitted to `POST /receipts/process`
///
/// All fields are kept as raw strings. Parsing happens inside the individual
/// scoring rules so that a malformed field only costs the points of its own rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,  // YYYY-MM-DD
    pub purchase_time: String,  // HH:MM, 24-hour
    pub total: String,
    pub items: Vec<Item>,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}
