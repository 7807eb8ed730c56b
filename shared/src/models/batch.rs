//! Raw upstream shapes for the nested batches/articles stock response
//!
//! These structs mirror the ERP wire format; `crate::flatten` converts them
//! into display-ready [`ArticleRecord`](super::ArticleRecord)s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::article::ArticleCategory;
use crate::units::ConsumableUnit;

/// Top-level stock response from the ERP
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(default)]
    pub batches: Vec<RawBatch>,
}

/// A named grouping of articles sharing a storage category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBatch {
    pub category: ArticleCategory,
    pub name: Option<String>,
    #[serde(default)]
    pub is_hazardous: Option<bool>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// Physical condition reference as sent by the ERP
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCondition {
    pub name: Option<String>,
}

/// Shelf-life dates nested under an article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawShelfLife {
    pub expiration_date: Option<NaiveDate>,
    pub fabrication_date: Option<NaiveDate>,
}

/// Calibration fields nested under a tool article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCalibration {
    pub status: Option<String>,
    pub calibration_date: Option<NaiveDate>,
    pub next_calibration_date: Option<NaiveDate>,
    pub next_calibration_interval_days: Option<i64>,
}

/// A threshold the ERP sends either as a number or as text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    /// Numeric value, if the text form parses as one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// An article as it appears inside a batch on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawArticle {
    pub id: i64,
    #[serde(default)]
    pub part_number: String,
    #[serde(default)]
    pub alternative_part_numbers: Vec<String>,
    pub serial: Option<String>,
    pub lot_number: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub zone: Option<String>,
    pub status: Option<String>,
    pub condition: Option<RawCondition>,
    /// Expiration may arrive flat on the article...
    pub expiration_date: Option<NaiveDate>,
    pub fabrication_date: Option<NaiveDate>,
    /// ...or nested under a shelf-life record, depending on ERP version
    pub shelf_life: Option<RawShelfLife>,
    pub unit: Option<ConsumableUnit>,
    pub calibration: Option<RawCalibration>,
    pub min_quantity: Option<NumberOrText>,
    #[serde(default)]
    pub has_documentation: Option<bool>,
    #[serde(default)]
    pub certificates: Vec<String>,
}
