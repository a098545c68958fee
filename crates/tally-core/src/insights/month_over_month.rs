//! Month-over-Month Improvement Rule
//!
//! Once the month is past its midpoint, compares spending so far with the
//! whole of last month and reports a meaningful drop.

use chrono::Datelike;

use crate::config::InsightConfig;
use crate::format::round_percent;

use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightKind, RuleType, PRIORITY_IMPROVEMENT};

/// Rule that reports spending reductions versus last month
pub struct MonthOverMonthRule {
    /// Rule only runs after this day of the month (default 15)
    min_day_of_month: u32,
    /// Current must be below previous times this (default 0.80)
    max_ratio: f64,
}

impl MonthOverMonthRule {
    pub fn new() -> Self {
        Self::from_config(&InsightConfig::default())
    }

    pub fn from_config(config: &InsightConfig) -> Self {
        Self {
            min_day_of_month: config.improvement.min_day_of_month,
            max_ratio: config.improvement.max_ratio,
        }
    }
}

impl Default for MonthOverMonthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for MonthOverMonthRule {
    fn id(&self) -> RuleType {
        RuleType::MonthOverMonth
    }

    fn name(&self) -> &'static str {
        "Month-over-Month Improvement"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        if ctx.today.day() <= self.min_day_of_month {
            return vec![];
        }

        let previous = ctx.previous.total();
        if previous <= 0.0 {
            return vec![];
        }

        let current = ctx.current.total();
        if current >= previous * self.max_ratio {
            return vec![];
        }

        vec![Insight::new(
            RuleType::MonthOverMonth,
            InsightKind::Success,
            "Spending Under Control",
            format!(
                "Spending so far this month is {}% lower than last month. Keep it up!",
                round_percent(1.0 - current / previous)
            ),
            PRIORITY_IMPROVEMENT,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetConfig, Transaction};
    use chrono::NaiveDate;

    fn run(txs: &[Transaction], today: NaiveDate) -> Vec<Insight> {
        let budget = BudgetConfig::unlimited();
        let ctx = AnalysisContext::new(txs, &budget, &[] as &[&str], today);
        MonthOverMonthRule::new().analyze(&ctx)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense("2024-05-03", 1000.0, "Food"),
            Transaction::expense("2024-06-03", 400.0, "Food"),
        ]
    }

    #[test]
    fn test_gate_closed_before_midmonth() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(run(&sample(), today).is_empty());

        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(run(&sample(), today).is_empty());
    }

    #[test]
    fn test_improvement_after_midmonth() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let insights = run(&sample(), today);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Success);
        assert_eq!(insights[0].priority, PRIORITY_IMPROVEMENT);
        assert!(insights[0].message.contains("60% lower"));
    }

    #[test]
    fn test_small_drop_is_quiet() {
        let txs = vec![
            Transaction::expense("2024-05-03", 1000.0, "Food"),
            Transaction::expense("2024-06-03", 850.0, "Food"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 6, 25).unwrap();
        assert!(run(&txs, today).is_empty());
    }

    #[test]
    fn test_drop_of_exactly_twenty_percent_is_quiet() {
        let txs = vec![
            Transaction::expense("2024-05-03", 1000.0, "Food"),
            Transaction::expense("2024-06-03", 800.0, "Food"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 6, 25).unwrap();
        assert!(run(&txs, today).is_empty());

        let txs = vec![
            Transaction::expense("2024-05-03", 1000.0, "Food"),
            Transaction::expense("2024-06-03", 799.0, "Food"),
        ];
        assert_eq!(run(&txs, today).len(), 1);
    }

    #[test]
    fn test_no_previous_month_is_quiet() {
        let txs = vec![Transaction::expense("2024-06-03", 10.0, "Food")];
        let today = NaiveDate::from_ymd_opt(2024, 6, 25).unwrap();
        assert!(run(&txs, today).is_empty());
    }

    #[test]
    fn test_january_compares_with_previous_december() {
        let txs = vec![
            Transaction::expense("2023-12-03", 1000.0, "Food"),
            Transaction::expense("2024-12-03", 1000.0, "Food"),
            Transaction::expense("2024-01-03", 100.0, "Food"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let insights = run(&txs, today);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].message.contains("90% lower"));
    }
}
