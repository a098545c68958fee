//! Domain models for Tally

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category label used when a transaction carries none
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Whether money left or entered the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent. Records without a kind are expenses.
    #[default]
    Expense,
    /// Money received
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// Lenient parse used at the data boundary: only an explicit
    /// `"income"` is income, everything else counts as an expense.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()) {
            Some(l) if l == "income" => Self::Income,
            _ => Self::Expense,
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized transaction, ready for aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date as stored, `YYYY-MM-DD`
    pub date: String,
    pub amount: f64,
    /// Trimmed category label, never empty
    pub category: String,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Build a transaction, trimming the category and defaulting an empty
    /// one to [`UNCATEGORIZED`].
    pub fn new(
        date: impl Into<String>,
        amount: f64,
        category: &str,
        kind: TransactionKind,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category: normalize_category(category),
            kind,
        }
    }

    /// Shorthand for an expense entry
    pub fn expense(date: impl Into<String>, amount: f64, category: &str) -> Self {
        Self::new(date, amount, category, TransactionKind::Expense)
    }

    /// Shorthand for an income entry
    pub fn income(date: impl Into<String>, amount: f64, category: &str) -> Self {
        Self::new(date, amount, category, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// True when the date string falls in the month named by `prefix`
    /// (`YYYY-MM`). Compared as text, never parsed.
    pub fn in_month(&self, prefix: &str) -> bool {
        self.date.starts_with(prefix)
    }
}

/// Trim a category label, falling back to [`UNCATEGORIZED`] when empty
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Trim category names, dropping empty ones and later duplicates
pub fn normalize_category_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let trimmed = name.as_ref().trim();
        if !trimmed.is_empty() && !out.iter().any(|n| n == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// The user's spending limits. A limit of 0 means "no limit".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub monthly_limit: f64,
    pub yearly_limit: f64,
    /// Per-category limits. Stored with the budget but not used for insights.
    #[serde(default)]
    pub category_limits: BTreeMap<String, f64>,
}

impl BudgetConfig {
    pub fn new(monthly_limit: f64, yearly_limit: f64) -> Self {
        Self {
            monthly_limit,
            yearly_limit,
            category_limits: BTreeMap::new(),
        }
    }

    /// A budget with no limits at all
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn has_monthly_limit(&self) -> bool {
        self.monthly_limit.is_finite() && self.monthly_limit > 0.0
    }
}
