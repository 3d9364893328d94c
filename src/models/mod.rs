pub mod receipt;
pub mod v1_api;

pub use receipt::*;
pub use v1_api::*;
