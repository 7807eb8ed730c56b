//! Quantity Edit Reconciler
//!
//! Tracks user-staged quantity overrides against a baseline snapshot and
//! computes the minimal diff to persist. The state is an explicit keyed
//! map owned by whatever controller assembles the table; row widgets only
//! read through it, so there is no hidden shared state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::ArticleRecord;

/// One staged quantity change, the exact payload shape of the bulk update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuantityChange {
    pub id: i64,
    pub new_quantity: u64,
}

/// Per-session quantity edit state, keyed by article id
///
/// `baseline` is snapshotted from the loaded article list and stays
/// immutable for the session; `overrides` holds user-entered values.
/// An absent override means "use the baseline".
#[derive(Debug, Clone, Default)]
pub struct QuantityEditState {
    baseline: HashMap<i64, f64>,
    overrides: HashMap<i64, u64>,
}

impl QuantityEditState {
    /// Snapshot the baseline from a freshly loaded article list
    pub fn from_articles(articles: &[ArticleRecord]) -> Self {
        Self {
            baseline: compute_baseline(articles),
            overrides: HashMap::new(),
        }
    }

    /// Commit one row's raw text input
    ///
    /// The input is masked to a whole number: any fractional tail is
    /// discarded and non-digit characters are stripped (the control
    /// accepts non-negative integers only). An input with no remaining
    /// digits removes the override,
    /// reverting the row to its baseline without the user having to know
    /// the original value. Idempotent; last write wins per id; the
    /// baseline is never touched.
    pub fn set_quantity(&mut self, id: i64, raw_text: &str) {
        match parse_quantity_input(raw_text) {
            Some(value) => {
                self.overrides.insert(id, value);
            }
            None => {
                self.overrides.remove(&id);
            }
        }
    }

    /// Currently staged override for a row, if any
    pub fn override_for(&self, id: i64) -> Option<u64> {
        self.overrides.get(&id).copied()
    }

    /// Baseline quantity for a row, if the id was in the snapshot
    pub fn baseline_for(&self, id: i64) -> Option<f64> {
        self.baseline.get(&id).copied()
    }

    /// Whether a row has unsaved changes
    ///
    /// True only when an override exists and differs from the baseline;
    /// typing the original value back leaves the override tracked but the
    /// row clean. Ids missing from the snapshot compare against 0, the
    /// same rule `modified` applies when building the diff.
    pub fn is_modified(&self, id: i64) -> bool {
        match self.overrides.get(&id) {
            Some(&next) => next as f64 != self.baseline.get(&id).copied().unwrap_or(0.0),
            None => false,
        }
    }

    /// Whether any row is modified
    pub fn has_changes(&self, articles: &[ArticleRecord]) -> bool {
        articles.iter().any(|article| self.is_modified(article.id))
    }

    /// The minimal diff to persist, ordered by the article list
    ///
    /// A row is included only when its override differs from its baseline.
    /// Result order follows `articles`, not override insertion order.
    pub fn modified(&self, articles: &[ArticleRecord]) -> Vec<QuantityChange> {
        articles
            .iter()
            .filter_map(|article| {
                let next = *self.overrides.get(&article.id)?;
                let base = self.baseline.get(&article.id).copied().unwrap_or(0.0);
                if next as f64 != base {
                    Some(QuantityChange {
                        id: article.id,
                        new_quantity: next,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Drop all overrides, after a successful save or an explicit cancel
    pub fn reset(&mut self) {
        self.overrides.clear();
    }

    /// Re-snapshot the baseline after the article list was refetched
    ///
    /// Overrides survive for ids still present in the new list; overrides
    /// for ids that disappeared are dropped.
    pub fn rebase(&mut self, articles: &[ArticleRecord]) {
        self.baseline = compute_baseline(articles);
        let baseline = &self.baseline;
        self.overrides.retain(|id, _| baseline.contains_key(id));
    }
}

/// Snapshot server-known quantities, keyed by article id
pub fn compute_baseline(articles: &[ArticleRecord]) -> HashMap<i64, f64> {
    articles
        .iter()
        .map(|article| (article.id, article.quantity))
        .collect()
}

/// Mask raw text input down to a non-negative integer
///
/// The input is cut at the first decimal point (the fractional tail is
/// discarded, so "2.5" stages 2, never 25), then every remaining
/// non-digit character is stripped before parsing. There is no
/// invalid-quantity error state; `None` means nothing was left, which
/// callers treat as "clear the override". Absurdly long digit runs
/// saturate instead of failing.
pub fn parse_quantity_input(raw_text: &str) -> Option<u64> {
    let whole = match raw_text.find('.') {
        Some(idx) => &raw_text[..idx],
        None => raw_text,
    };
    let digits: String = whole.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}
