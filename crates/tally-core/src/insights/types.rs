//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monthly spend has reached the budget
pub const PRIORITY_OVERSPEND: i32 = 10;
/// A category is far above its own history
pub const PRIORITY_ANOMALY: i32 = 8;
/// Budget is being used faster than the month is passing
pub const PRIORITY_PACE: i32 = 5;
/// Spending dropped compared to last month
pub const PRIORITY_IMPROVEMENT: i32 = 3;

/// Rules that can produce insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Compares budget consumption with elapsed time
    BurnRate,
    /// Flags categories far above their recent history
    CategoryAnomaly,
    /// Celebrates a drop versus last month
    MonthOverMonth,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::BurnRate => "burn_rate",
            RuleType::CategoryAnomaly => "category_anomaly",
            RuleType::MonthOverMonth => "month_over_month",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "burn_rate" => Ok(RuleType::BurnRate),
            "category_anomaly" => Ok(RuleType::CategoryAnomaly),
            "month_over_month" => Ok(RuleType::MonthOverMonth),
            _ => Err(format!("Unknown rule type: {}", s)),
        }
    }
}

/// Sentiment of an insight, used by callers to pick color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Warning,
    Danger,
    Success,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Warning => "warning",
            InsightKind::Danger => "danger",
            InsightKind::Success => "success",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(InsightKind::Warning),
            "danger" => Ok(InsightKind::Danger),
            "success" => Ok(InsightKind::Success),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// One human-readable observation produced by a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Rule that produced this insight
    pub rule: RuleType,
    pub kind: InsightKind,
    /// Short label (e.g., "Budget Exceeded")
    pub title: String,
    /// Full sentence with the computed figures
    pub message: String,
    /// Higher sorts first
    pub priority: i32,
}

impl Insight {
    pub fn new(
        rule: RuleType,
        kind: InsightKind,
        title: impl Into<String>,
        message: impl Into<String>,
        priority: i32,
    ) -> Self {
        Self {
            rule,
            kind,
            title: title.into(),
            message: message.into(),
            priority,
        }
    }
}
