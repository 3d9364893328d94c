use serde::{Deserialize, Serialize};

/// Response body for `POST /receipts/process`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Response body for `GET /receipts/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}
