pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod models;

// Re-export commonly used types
pub use models::{Item, PointsResponse, ProcessReceiptResponse, Receipt};

pub use db::{ReceiptStore, StoreError};

pub use domain::{compute_total, score_breakdown, validate_receipt, PointsBreakdown};

pub use config::{ConfigError, ServerConfig, ValidationMode};

pub use api::{create_app, run_server, AppState};
