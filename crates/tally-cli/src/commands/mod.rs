//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (config loading, date resolution)
//! - `insights` - Run the insight engine over a snapshot
//! - `config` - Inspect the insight threshold configuration

pub mod config;
pub mod core;
pub mod insights;

// Re-export command functions for main.rs
pub use config::*;
pub use core::*;
pub use insights::*;
