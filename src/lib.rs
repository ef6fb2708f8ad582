pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fileio;
pub mod registry;

pub use error::{Result, TgError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
