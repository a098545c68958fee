//! Calendar month buckets
//!
//! Transactions are assigned to months by comparing the `YYYY-MM` prefix of
//! their stored date string. Dates are never parsed for bucketing, so a
//! stored `2024-03-31` stays in March regardless of the host timezone.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::models::Transaction;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based month
    pub month: u32,
}

impl MonthKey {
    /// Month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before this one, wrapping January to December
    pub fn previous(self) -> Self {
        if self.month <= 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month `n` months before this one
    pub fn months_back(self, n: u32) -> Self {
        (0..n).fold(self, |key, _| key.previous())
    }

    /// Zero-padded `YYYY-MM` prefix used for bucket matching
    pub fn prefix(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Number of days in this month (28-31)
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month >= 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(30)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Expense transactions of one month
#[derive(Debug, Clone)]
pub struct MonthBucket<'a> {
    pub month: MonthKey,
    pub transactions: Vec<&'a Transaction>,
}

impl<'a> MonthBucket<'a> {
    /// Collect the expense-kind transactions whose date starts with the
    /// month's prefix
    pub fn collect(transactions: &'a [Transaction], month: MonthKey) -> Self {
        let prefix = month.prefix();
        let transactions = transactions
            .iter()
            .filter(|tx| tx.is_expense() && tx.in_month(&prefix))
            .collect();
        Self {
            month,
            transactions,
        }
    }

    /// Sum of all amounts in the bucket
    pub fn total(&self) -> f64 {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }

    /// Sum of amounts whose trimmed category equals `category`
    pub fn category_total(&self, category: &str) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.category.trim() == category)
            .map(|tx| tx.amount)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
