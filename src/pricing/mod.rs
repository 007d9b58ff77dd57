#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod types;
