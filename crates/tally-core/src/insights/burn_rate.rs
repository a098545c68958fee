//! Budget Burn Rate Rule
//!
//! Compares the share of the monthly budget already spent with the share of
//! the month that has elapsed. Emits a danger insight once the budget is
//! used up, or a pace warning when spending runs well ahead of the calendar.

use chrono::Datelike;

use crate::config::InsightConfig;
use crate::format::{format_amount, round_percent};

use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightKind, RuleType, PRIORITY_OVERSPEND, PRIORITY_PACE};

/// Rule that watches monthly budget consumption
pub struct BurnRateRule {
    /// Allowed lead of spend share over time share (default 0.20)
    pace_slack: f64,
    currency_symbol: String,
}

impl BurnRateRule {
    pub fn new() -> Self {
        Self::from_config(&InsightConfig::default())
    }

    pub fn from_config(config: &InsightConfig) -> Self {
        Self {
            pace_slack: config.burn_rate.pace_slack,
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

impl Default for BurnRateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for BurnRateRule {
    fn id(&self) -> RuleType {
        RuleType::BurnRate
    }

    fn name(&self) -> &'static str {
        "Budget Burn Rate"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        if !ctx.budget.has_monthly_limit() {
            return vec![];
        }

        let limit = ctx.budget.monthly_limit;
        let spent = ctx.current.total();
        let spend_ratio = spent / limit;
        let time_ratio = ctx.today.day() as f64 / ctx.current_month().days_in_month() as f64;

        if spend_ratio >= 1.0 {
            return vec![Insight::new(
                RuleType::BurnRate,
                InsightKind::Danger,
                "Budget Exceeded",
                format!(
                    "Spending this month of {} has exceeded the monthly budget of {}.",
                    format_amount(spent, &self.currency_symbol),
                    format_amount(limit, &self.currency_symbol)
                ),
                PRIORITY_OVERSPEND,
            )];
        }

        if spend_ratio > time_ratio + self.pace_slack {
            return vec![Insight::new(
                RuleType::BurnRate,
                InsightKind::Warning,
                "Spending Too Fast",
                format!(
                    "Only {}% of the month has passed, but {}% of the budget is already spent.",
                    round_percent(time_ratio),
                    round_percent(spend_ratio)
                ),
                PRIORITY_PACE,
            )];
        }

        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetConfig, Transaction};
    use chrono::NaiveDate;

    fn run(txs: &[Transaction], limit: f64, today: NaiveDate) -> Vec<Insight> {
        let budget = BudgetConfig::new(limit, 0.0);
        let ctx = AnalysisContext::new(txs, &budget, &[] as &[&str], today);
        BurnRateRule::new().analyze(&ctx)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn test_no_limit_disables_rule() {
        let txs = vec![Transaction::expense("2024-04-01", 5000.0, "Food")];
        assert!(run(&txs, 0.0, day(2)).is_empty());
    }

    #[test]
    fn test_overspend_is_danger() {
        let txs = vec![
            Transaction::expense("2024-04-02", 700.0, "Food"),
            Transaction::expense("2024-04-03", 500.0, "Rent"),
        ];
        let insights = run(&txs, 1000.0, day(20));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Danger);
        assert_eq!(insights[0].priority, PRIORITY_OVERSPEND);
        assert!(insights[0].message.contains("$1,200"));
        assert!(insights[0].message.contains("$1,000"));
    }

    #[test]
    fn test_exactly_at_limit_is_danger() {
        let txs = vec![Transaction::expense("2024-04-02", 1000.0, "Food")];
        let insights = run(&txs, 1000.0, day(30));
        assert_eq!(insights[0].kind, InsightKind::Danger);
    }

    #[test]
    fn test_pace_warning() {
        // Day 10 of 30: 33% elapsed, 70% spent
        let txs = vec![Transaction::expense("2024-04-05", 700.0, "Food")];
        let insights = run(&txs, 1000.0, day(10));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert_eq!(insights[0].priority, PRIORITY_PACE);
        assert!(insights[0].message.contains("33%"));
        assert!(insights[0].message.contains("70%"));
    }

    #[test]
    fn test_on_pace_is_quiet() {
        // Day 15 of 30: 50% elapsed, 60% spent is inside the 20 point slack
        let txs = vec![Transaction::expense("2024-04-05", 600.0, "Food")];
        assert!(run(&txs, 1000.0, day(15)).is_empty());
    }

    #[test]
    fn test_income_and_other_months_ignored() {
        let txs = vec![
            Transaction::income("2024-04-01", 5000.0, "Salary"),
            Transaction::expense("2024-03-31", 5000.0, "Food"),
        ];
        assert!(run(&txs, 1000.0, day(2)).is_empty());
    }
}
