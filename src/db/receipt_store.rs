use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::db::errors::{Result, StoreError};

/// In-memory mapping of receipt id to awarded points
///
/// Cloning is cheap and every clone shares the same map. Entries are written
/// once and never updated or removed; the contents live as long as the process.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    points_by_id: Arc<RwLock<HashMap<String, u64>>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the points for a freshly generated id
    pub async fn put(&self, id: &str, points: u64) -> Result<()> {
        let mut points_by_id = self.points_by_id.write().await;
        if points_by_id.contains_key(id) {
            return Err(StoreError::DuplicateId(id.to_string()));
        }
        points_by_id.insert(id.to_string(), points);
        debug!(id = %id, points = points, "Stored receipt points");
        Ok(())
    }

    /// Look up the points recorded for `id`
    pub async fn get(&self, id: &str) -> Result<u64> {
        self.points_by_id
            .read()
            .await
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub async fn len(&self) -> usize {
        self.points_by_id.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.points_by_id.read().await.is_empty()
    }
}
