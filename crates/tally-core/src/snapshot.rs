//! Data snapshot loading and boundary normalization
//!
//! A snapshot is the payload the web client fetches in one call:
//!
//! ```json
//! {
//!   "expenses":   [{ "date": "2024-03-01", "amount": 120, "category": "Food", "type": "expense" }],
//!   "categories": ["Food", "Transport"],
//!   "budget":     { "monthly": 10000, "yearly": 120000 }
//! }
//! ```
//!
//! Records are loosely shaped, so every field is read as raw JSON and
//! cleaned up in a single pass by [`RawSnapshot::normalize`]. Nothing past
//! this module has to handle missing or malformed fields.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::{normalize_category_names, BudgetConfig, Transaction, TransactionKind};

/// A transaction record as stored, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default, rename = "type")]
    pub type_label: Option<Value>,
    #[serde(default)]
    pub kind: Option<Value>,
}

impl RawTransaction {
    /// Validate one record. `None` when it has no usable date or amount.
    pub fn normalize(&self) -> Option<Transaction> {
        let date = match &self.date {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => return None,
        };
        let amount = self.amount.as_ref().and_then(number)?;
        let category = match &self.category {
            Some(Value::String(s)) => s.as_str(),
            _ => "",
        };
        let label = self
            .type_label
            .as_ref()
            .or(self.kind.as_ref())
            .and_then(Value::as_str);

        Some(Transaction::new(
            date,
            amount,
            category,
            TransactionKind::from_label(label),
        ))
    }
}

/// Budget record as stored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBudget {
    #[serde(default, alias = "monthlyLimit", alias = "monthly_limit")]
    pub monthly: Option<Value>,
    #[serde(default, alias = "yearlyLimit", alias = "yearly_limit")]
    pub yearly: Option<Value>,
    #[serde(default, alias = "categoryLimits")]
    pub category_limits: Option<BTreeMap<String, Value>>,
}

impl RawBudget {
    /// Missing, malformed or negative limits become 0 ("no limit")
    pub fn normalize(&self) -> BudgetConfig {
        let mut budget =
            BudgetConfig::new(limit(self.monthly.as_ref()), limit(self.yearly.as_ref()));
        if let Some(limits) = &self.category_limits {
            for (name, value) in limits {
                let amount = limit(Some(value));
                let name = name.trim();
                if amount > 0.0 && !name.is_empty() {
                    budget.category_limits.insert(name.to_string(), amount);
                }
            }
        }
        budget
    }
}

/// The whole data payload as stored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnapshot {
    /// Kept as raw values so one non-object entry cannot fail the document
    #[serde(default, alias = "transactions")]
    pub expenses: Option<Vec<Value>>,
    #[serde(default)]
    pub categories: Option<Vec<Value>>,
    #[serde(default)]
    pub budget: Option<RawBudget>,
}

impl RawSnapshot {
    /// The single normalization pass
    pub fn normalize(&self) -> Snapshot {
        let raw_transactions = self.expenses.as_deref().unwrap_or_default();
        let transactions: Vec<Transaction> = raw_transactions
            .iter()
            .filter_map(|value| {
                RawTransaction::deserialize(value)
                    .ok()
                    .and_then(|raw| raw.normalize())
            })
            .collect();
        let skipped = raw_transactions.len() - transactions.len();
        if skipped > 0 {
            tracing::debug!(skipped, "Skipped malformed transaction records");
        }

        let names: Vec<&str> = self
            .categories
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(category_name)
            .collect();

        Snapshot {
            transactions,
            budget: self
                .budget
                .as_ref()
                .map(RawBudget::normalize)
                .unwrap_or_default(),
            category_names: normalize_category_names(&names),
            skipped,
        }
    }
}

/// A cleaned-up snapshot, ready for the insight engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub budget: BudgetConfig,
    pub category_names: Vec<String>,
    /// Records dropped for not being an object or lacking a usable date
    /// or amount
    pub skipped: usize,
}

impl Snapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Ok(raw.normalize())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawSnapshot = serde_json::from_reader(reader)?;
        Ok(raw.normalize())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            transactions = snapshot.transactions.len(),
            categories = snapshot.category_names.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }
}

/// Read a JSON number or numeric string as a finite f64
fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn limit(value: Option<&Value>) -> f64 {
    value
        .and_then(number)
        .filter(|n| *n >= 0.0)
        .unwrap_or(0.0)
}

/// Category entries are plain strings or `{ "name": ... }` records
fn category_name(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map.get("name").and_then(Value::as_str),
        _ => None,
    }
}
