//! Inventory list filtering
//!
//! Declarative filter applied to a flattened article list before grouping
//! or display. All criteria are conjunctive; an empty filter passes
//! everything. Input order is preserved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ArticleCategory, ArticleRecord, ArticleStatus};

/// Filter criteria for the inventory table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleFilter {
    /// Keep articles whose status is in the set; empty set keeps all
    #[serde(default)]
    pub statuses: Vec<ArticleStatus>,
    /// Keep articles whose category is in the set; empty set keeps all
    #[serde(default)]
    pub categories: Vec<ArticleCategory>,
    /// Exact storage zone match
    pub zone: Option<String>,
    /// Case-insensitive substring search over part number, alternative
    /// part numbers, serial, lot number and description
    pub search: Option<String>,
    /// Keep only hazardous consumables
    #[serde(default)]
    pub hazardous_only: bool,
    /// Keep only articles whose shelf life expires on or after this date
    pub expires_after: Option<NaiveDate>,
    /// Keep only articles whose shelf life expires on or before this date
    pub expires_before: Option<NaiveDate>,
}

impl ArticleFilter {
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
            && self.categories.is_empty()
            && self.zone.is_none()
            && self.search.is_none()
            && !self.hazardous_only
            && self.expires_after.is_none()
            && self.expires_before.is_none()
    }

    /// Whether a single article passes every criterion
    pub fn matches(&self, article: &ArticleRecord) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&article.status) {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&article.category()) {
            return false;
        }
        if let Some(zone) = &self.zone {
            if article.zone.as_deref() != Some(zone.as_str()) {
                return false;
            }
        }
        if self.hazardous_only && !article.is_hazardous() {
            return false;
        }
        if let Some(search) = &self.search {
            if !matches_search(article, search) {
                return false;
            }
        }
        if self.expires_after.is_some() || self.expires_before.is_some() {
            // A date-range filter only makes sense for shelf-life-tracked
            // articles; the rest are excluded while it is active
            let Some(shelf_life) = article.details.shelf_life() else {
                return false;
            };
            if let Some(after) = self.expires_after {
                if shelf_life.expiration_date < after {
                    return false;
                }
            }
            if let Some(before) = self.expires_before {
                if shelf_life.expiration_date > before {
                    return false;
                }
            }
        }
        true
    }

    /// Apply the filter over a list, preserving input order
    pub fn apply(&self, articles: &[ArticleRecord]) -> Vec<ArticleRecord> {
        articles
            .iter()
            .filter(|article| self.matches(article))
            .cloned()
            .collect()
    }
}

fn matches_search(article: &ArticleRecord, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let haystacks = [
        Some(article.part_number.as_str()),
        article.serial.as_deref(),
        article.lot_number.as_deref(),
        article.description.as_deref(),
    ];
    if haystacks
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    {
        return true;
    }
    article
        .alternative_part_numbers
        .iter()
        .any(|alt| alt.to_lowercase().contains(&needle))
}
