//! Insight Engine - Rule-Based Spending Observations
//!
//! Scans a user's transactions and budget and surfaces short, prioritized
//! observations. The engine is a pure function of its inputs: the caller
//! passes the reference date, nothing is cached, and repeated calls with the
//! same arguments give the same output.
//!
//! ## Rules
//!
//! - **Burn Rate** - budget exhausted (danger) or spent too fast (warning)
//! - **Category Anomaly** - a category far above its recent monthly history
//! - **Month-over-Month** - spending well below last month (success)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::insights::generate_insights;
//!
//! let insights = generate_insights(&transactions, &budget, &categories, today);
//! if let Some(top) = insights.first() {
//!     println!("{}: {}", top.title, top.message);
//! }
//! ```

pub mod burn_rate;
pub mod category_anomaly;
pub mod engine;
pub mod month_over_month;
pub mod period;
pub mod types;

pub use burn_rate::BurnRateRule;
pub use category_anomaly::{CategoryAnomalyRule, HistoryStats};
pub use engine::{
    generate_insights, generate_insights_today, AnalysisContext, InsightEngine, InsightRule,
};
pub use month_over_month::MonthOverMonthRule;
pub use period::{MonthBucket, MonthKey};
pub use types::{
    Insight, InsightKind, RuleType, PRIORITY_ANOMALY, PRIORITY_IMPROVEMENT, PRIORITY_OVERSPEND,
    PRIORITY_PACE,
};
