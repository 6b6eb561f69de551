pub mod config;
pub mod currency;
pub mod error;
pub mod scenario;
