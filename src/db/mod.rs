pub mod errors;
pub mod receipt_store;

pub use errors::*;
pub use receipt_store::*;
