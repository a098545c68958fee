//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - Domain models for transactions and budgets
//! - Snapshot loading with boundary normalization
//! - Insight threshold configuration
//! - Rule-based insight engine (burn rate, category anomalies, improvements)

pub mod config;
pub mod error;
pub mod format;
pub mod insights;
pub mod models;
pub mod snapshot;

pub use config::InsightConfig;
pub use error::{Error, Result};
pub use insights::{
    generate_insights, generate_insights_today, AnalysisContext, Insight, InsightEngine,
    InsightKind, InsightRule, RuleType,
};
pub use models::{BudgetConfig, Transaction, TransactionKind};
pub use snapshot::{RawSnapshot, Snapshot};
