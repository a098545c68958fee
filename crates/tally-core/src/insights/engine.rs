//! Insight Engine - runs every rule over one data snapshot and ranks the results

use chrono::NaiveDate;

use crate::config::InsightConfig;
use crate::models::{normalize_category_names, BudgetConfig, Transaction};

use super::period::{MonthBucket, MonthKey};
use super::types::{Insight, RuleType};
use super::{BurnRateRule, CategoryAnomalyRule, MonthOverMonthRule};

/// Read-only inputs shared by all rules
pub struct AnalysisContext<'a> {
    pub transactions: &'a [Transaction],
    pub budget: &'a BudgetConfig,
    /// Trimmed, de-duplicated category names the user has defined
    pub category_names: Vec<String>,
    /// Reference date ("today")
    pub today: NaiveDate,
    /// Expenses of the month containing `today`
    pub current: MonthBucket<'a>,
    /// Expenses of the month before
    pub previous: MonthBucket<'a>,
}

impl<'a> AnalysisContext<'a> {
    /// Build the context, bucketing the current and previous month once
    pub fn new<S: AsRef<str>>(
        transactions: &'a [Transaction],
        budget: &'a BudgetConfig,
        category_names: &[S],
        today: NaiveDate,
    ) -> Self {
        let month = MonthKey::from_date(today);
        Self {
            transactions,
            budget,
            category_names: normalize_category_names(category_names),
            today,
            current: MonthBucket::collect(transactions, month),
            previous: MonthBucket::collect(transactions, month.previous()),
        }
    }

    pub fn current_month(&self) -> MonthKey {
        self.current.month
    }
}

/// Trait for insight rules
pub trait InsightRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> RuleType;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce zero or more insights. Never fails: a rule that cannot be
    /// evaluated simply yields nothing.
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight>;
}

/// The main insight engine that orchestrates analysis
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules and default thresholds
    pub fn new() -> Self {
        Self::with_config(&InsightConfig::default())
    }

    /// Create an engine with the built-in rules and the given thresholds
    pub fn with_config(config: &InsightConfig) -> Self {
        let mut engine = Self::empty();

        // Registration order is the tie-break order after sorting
        engine.register(Box::new(BurnRateRule::from_config(config)));
        engine.register(Box::new(CategoryAnomalyRule::from_config(config)));
        engine.register(Box::new(MonthOverMonthRule::from_config(config)));

        engine
    }

    /// An engine with no rules registered
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Register an insight rule
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run all rules and return their insights, highest priority first.
    /// Equal priorities keep rule evaluation order.
    pub fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut all_insights = vec![];

        for rule in &self.rules {
            let insights = rule.analyze(ctx);
            tracing::debug!(
                rule = rule.id().as_str(),
                count = insights.len(),
                "Insight rule complete"
            );
            all_insights.extend(insights);
        }

        // sort_by is stable
        all_insights.sort_by(|a, b| b.priority.cmp(&a.priority));

        tracing::debug!(
            total = all_insights.len(),
            date = %ctx.today,
            "Insight analysis complete"
        );
        all_insights
    }

    /// The single most important insight, if any rule fired
    pub fn top(&self, ctx: &AnalysisContext<'_>) -> Option<Insight> {
        self.analyze(ctx).into_iter().next()
    }

    /// Get list of registered rule types
    pub fn rule_types(&self) -> Vec<RuleType> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

/// Analyze a snapshot with the default thresholds as of `now`
pub fn generate_insights<S: AsRef<str>>(
    transactions: &[Transaction],
    budget: &BudgetConfig,
    category_names: &[S],
    now: NaiveDate,
) -> Vec<Insight> {
    let ctx = AnalysisContext::new(transactions, budget, category_names, now);
    InsightEngine::new().analyze(&ctx)
}

/// [`generate_insights`] as of today's local date
pub fn generate_insights_today<S: AsRef<str>>(
    transactions: &[Transaction],
    budget: &BudgetConfig,
    category_names: &[S],
) -> Vec<Insight> {
    let today = chrono::Local::now().date_naive();
    generate_insights(transactions, budget, category_names, today)
}
