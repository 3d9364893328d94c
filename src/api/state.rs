use crate::config::ValidationMode;
use crate::db::ReceiptStore;

/// Shared state handed to every handler
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub store: ReceiptStore,
    pub validation: ValidationMode,
}

impl AppState {
    pub fn new(store: ReceiptStore, validation: ValidationMode) -> Self {
        Self { store, validation }
    }
}
