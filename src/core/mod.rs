//! Core types shared by providers and the command line

pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod log;

// Re-export main types for cleaner imports
pub use conversion::Conversion;
pub use currency::{Currency, CurrencyRateProvider};
pub use error::RateError;
