//! Category Anomaly Rule
//!
//! For each category the user has defined, looks back over the previous
//! months and flags the current month when its spend sits well above that
//! category's history (mean + k standard deviations) and above an absolute
//! floor. Months with no spend in the category are left out of the history
//! rather than counted as zero.

use crate::config::{InsightConfig, MAX_HISTORY_MONTHS};
use crate::format::{format_amount, round_percent};

use super::engine::{AnalysisContext, InsightRule};
use super::period::MonthBucket;
use super::types::{Insight, InsightKind, RuleType, PRIORITY_ANOMALY};

/// Mean and population standard deviation of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl HistoryStats {
    /// `None` for an empty sample
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Rule that flags categories spending far above their own history
pub struct CategoryAnomalyRule {
    /// Months scanned before the current one (default 6)
    history_months: u32,
    /// Months with spend needed to evaluate a category (default 3)
    min_history_months: usize,
    /// Standard deviations above the mean (default 1.5)
    std_dev_multiplier: f64,
    /// Absolute floor for the current total (default 1000)
    min_amount: f64,
    currency_symbol: String,
}

impl CategoryAnomalyRule {
    pub fn new() -> Self {
        Self::from_config(&InsightConfig::default())
    }

    pub fn from_config(config: &InsightConfig) -> Self {
        Self {
            history_months: config.anomaly.history_months.min(MAX_HISTORY_MONTHS),
            min_history_months: config.anomaly.min_history_months,
            std_dev_multiplier: config.anomaly.std_dev_multiplier,
            min_amount: config.anomaly.min_amount,
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// Nonzero monthly totals of `category` over the history window,
    /// most recent month first
    fn history(&self, buckets: &[MonthBucket<'_>], category: &str) -> Vec<f64> {
        buckets
            .iter()
            .map(|bucket| bucket.category_total(category))
            .filter(|total| *total > 0.0)
            .collect()
    }
}

impl Default for CategoryAnomalyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for CategoryAnomalyRule {
    fn id(&self) -> RuleType {
        RuleType::CategoryAnomaly
    }

    fn name(&self) -> &'static str {
        "Category Anomaly"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        if ctx.category_names.is_empty() {
            return vec![];
        }

        let month = ctx.current_month();
        let buckets: Vec<MonthBucket<'_>> = (1..=self.history_months)
            .map(|i| MonthBucket::collect(ctx.transactions, month.months_back(i)))
            .collect();

        let mut insights = Vec::new();

        for category in &ctx.category_names {
            let history = self.history(&buckets, category);
            if history.len() < self.min_history_months {
                continue;
            }

            let Some(stats) = HistoryStats::from_values(&history) else {
                continue;
            };
            if stats.mean <= 0.0 {
                continue;
            }

            let current = ctx.current.category_total(category);
            let threshold = stats.mean + self.std_dev_multiplier * stats.std_dev;

            if current > threshold && current > self.min_amount {
                let above = (current - stats.mean) / stats.mean;
                tracing::debug!(
                    category = category.as_str(),
                    current,
                    mean = stats.mean,
                    std_dev = stats.std_dev,
                    "Category spending anomaly"
                );
                insights.push(Insight::new(
                    RuleType::CategoryAnomaly,
                    InsightKind::Warning,
                    format!("Unusual \"{}\" Spending", category),
                    format!(
                        "Spent {} on {} this month, {}% above the {}-month average.",
                        format_amount(current, &self.currency_symbol),
                        category,
                        round_percent(above),
                        self.history_months
                    ),
                    PRIORITY_ANOMALY,
                ));
            }
        }

        insights
    }
}
