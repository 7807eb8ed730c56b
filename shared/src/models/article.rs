//! Article and grouping models for the warehouse inventory tables

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::units::ConsumableUnit;

/// Storage category of an article, assigned at the batch level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleCategory {
    Component,
    Part,
    Consumable,
    Tool,
}

impl std::fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleCategory::Component => write!(f, "Component"),
            ArticleCategory::Part => write!(f, "Part"),
            ArticleCategory::Consumable => write!(f, "Consumable"),
            ArticleCategory::Tool => write!(f, "Tool"),
        }
    }
}

/// Stock status of an article
///
/// The upstream ERP sends a fixed set of status codes, but older records
/// occasionally carry codes outside that set. Unknown codes are kept as-is
/// and displayed verbatim rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ArticleStatus {
    Stored,
    Checking,
    Dispatched,
    InUse,
    Transit,
    Maintenance,
    Other(String),
}

impl ArticleStatus {
    /// Wire code for the status
    pub fn code(&self) -> &str {
        match self {
            ArticleStatus::Stored => "stored",
            ArticleStatus::Checking => "checking",
            ArticleStatus::Dispatched => "dispatched",
            ArticleStatus::InUse => "inuse",
            ArticleStatus::Transit => "transit",
            ArticleStatus::Maintenance => "maintenance",
            ArticleStatus::Other(code) => code,
        }
    }

    /// Human-readable label; unknown codes fall back to the raw code,
    /// and an absent code displays as "Unknown"
    pub fn label(&self) -> &str {
        match self {
            ArticleStatus::Stored => "Stored",
            ArticleStatus::Checking => "Checking",
            ArticleStatus::Dispatched => "Dispatched",
            ArticleStatus::InUse => "In Use",
            ArticleStatus::Transit => "In Transit",
            ArticleStatus::Maintenance => "Maintenance",
            ArticleStatus::Other(code) if code.is_empty() => "Unknown",
            ArticleStatus::Other(code) => code,
        }
    }
}

impl From<String> for ArticleStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "stored" => ArticleStatus::Stored,
            "checking" => ArticleStatus::Checking,
            "dispatched" => ArticleStatus::Dispatched,
            "inuse" => ArticleStatus::InUse,
            "transit" => ArticleStatus::Transit,
            "maintenance" => ArticleStatus::Maintenance,
            _ => ArticleStatus::Other(code),
        }
    }
}

impl From<ArticleStatus> for String {
    fn from(status: ArticleStatus) -> Self {
        status.code().to_string()
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Expiration/fabrication tracking for components and consumables
///
/// Only attached to articles whose source data carries an expiration date;
/// presence of the record itself means "this article tracks shelf life".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfLife {
    pub expiration_date: NaiveDate,
    pub fabrication_date: Option<NaiveDate>,
}

/// Calibration tracking for tools
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub status: Option<String>,
    pub calibration_date: Option<NaiveDate>,
    pub next_calibration_date: Option<NaiveDate>,
    pub next_calibration_interval_days: Option<i64>,
}

/// Category-specific data for an article
///
/// Exactly one variant per record, selected by the originating batch's
/// category. Matching on this enum is exhaustive, so adding a category
/// forces every consumer to handle it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleDetails {
    Component {
        shelf_life: Option<ShelfLife>,
    },
    Part,
    Consumable {
        shelf_life: Option<ShelfLife>,
        unit: Option<ConsumableUnit>,
        hazardous: bool,
    },
    Tool(ToolInfo),
}

impl ArticleDetails {
    pub fn category(&self) -> ArticleCategory {
        match self {
            ArticleDetails::Component { .. } => ArticleCategory::Component,
            ArticleDetails::Part => ArticleCategory::Part,
            ArticleDetails::Consumable { .. } => ArticleCategory::Consumable,
            ArticleDetails::Tool(_) => ArticleCategory::Tool,
        }
    }

    /// Shelf life, for the categories that track one
    pub fn shelf_life(&self) -> Option<&ShelfLife> {
        match self {
            ArticleDetails::Component { shelf_life } => shelf_life.as_ref(),
            ArticleDetails::Consumable { shelf_life, .. } => shelf_life.as_ref(),
            ArticleDetails::Part | ArticleDetails::Tool(_) => None,
        }
    }
}

/// A single trackable inventory item, flattened for table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleRecord {
    pub id: i64,
    /// Manufacturer/catalog identifier; the grouping key, non-unique
    pub part_number: String,
    pub alternative_part_numbers: Vec<String>,
    pub serial: Option<String>,
    pub lot_number: Option<String>,
    pub description: Option<String>,
    pub batch_name: Option<String>,
    /// Stock level; zero is a real value ("no stock"), never a placeholder
    pub quantity: f64,
    /// Storage location
    pub zone: Option<String>,
    pub status: ArticleStatus,
    /// Physical condition name; `"N/A"` when the source carries none
    pub condition: String,
    pub details: ArticleDetails,
    pub min_quantity: Option<f64>,
    pub has_documentation: bool,
    pub certificates: Vec<String>,
}

impl ArticleRecord {
    pub fn category(&self) -> ArticleCategory {
        self.details.category()
    }

    /// Identifier shown in the table: serial when present, else lot number
    pub fn display_identifier(&self) -> Option<&str> {
        self.serial.as_deref().or(self.lot_number.as_deref())
    }

    pub fn is_hazardous(&self) -> bool {
        matches!(
            self.details,
            ArticleDetails::Consumable {
                hazardous: true,
                ..
            }
        )
    }
}

/// A bucket of articles sharing one part number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleGroup {
    /// Representative record shown on the collapsed row (first seen in
    /// input order)
    pub article: ArticleRecord,
    /// Number of underlying records, always >= 2
    pub group_count: usize,
    /// The underlying records in their original order
    pub members: Vec<ArticleRecord>,
}

/// One row of the grouped inventory table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InventoryRow {
    /// An article with a unique part number, passed through unchanged
    Single(ArticleRecord),
    /// Two or more articles collapsed under a shared part number
    Group(ArticleGroup),
}

impl InventoryRow {
    /// The record rendered on this row (the representative, for groups)
    pub fn article(&self) -> &ArticleRecord {
        match self {
            InventoryRow::Single(article) => article,
            InventoryRow::Group(group) => &group.article,
        }
    }

    /// Number of underlying article records on this row
    pub fn record_count(&self) -> usize {
        match self {
            InventoryRow::Single(_) => 1,
            InventoryRow::Group(group) => group.group_count,
        }
    }
}
