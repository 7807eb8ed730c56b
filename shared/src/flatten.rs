//! Article Flattener
//!
//! Converts the nested batches/articles stock response into the flat,
//! display-ready article list consumed by the inventory tables. Pure
//! function of its input; missing or partial data yields an empty result,
//! never an error.

use crate::models::{
    ArticleCategory, ArticleDetails, ArticleRecord, ArticleStatus, BatchResponse, RawArticle,
    RawBatch, ShelfLife, ToolInfo,
};

/// Flatten a stock response into one record per (batch, article)
///
/// `None` means "no data yet" (the response is still loading) and maps to
/// an empty list. Output order is batch-major then article-minor, matching
/// the input; no sorting is applied.
pub fn flatten_batches(response: Option<&BatchResponse>) -> Vec<ArticleRecord> {
    let Some(response) = response else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for batch in &response.batches {
        for article in &batch.articles {
            records.push(flatten_article(batch, article));
        }
    }
    records
}

fn flatten_article(batch: &RawBatch, article: &RawArticle) -> ArticleRecord {
    ArticleRecord {
        id: article.id,
        part_number: article.part_number.clone(),
        alternative_part_numbers: article.alternative_part_numbers.clone(),
        serial: article.serial.clone(),
        lot_number: article.lot_number.clone(),
        description: article.description.clone(),
        batch_name: batch.name.clone(),
        // A stock level of 0 is meaningful and must survive untouched;
        // only a missing value maps to 0.
        quantity: article.quantity.unwrap_or(0.0),
        zone: article.zone.clone(),
        // An absent status is kept distinguishable from any concrete
        // state; the empty pass-through code renders as "Unknown"
        status: article
            .status
            .clone()
            .map(ArticleStatus::from)
            .unwrap_or_else(|| ArticleStatus::Other(String::new())),
        condition: article
            .condition
            .as_ref()
            .and_then(|c| c.name.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        details: article_details(batch, article),
        min_quantity: article.min_quantity.as_ref().and_then(|m| m.as_f64()),
        has_documentation: article.has_documentation.unwrap_or(false),
        certificates: article.certificates.clone(),
    }
}

/// Build the category-specific variant from the batch's category
///
/// Shelf life is attached only when the article actually carries an
/// expiration date, so downstream code can treat its presence as "this
/// article tracks shelf life".
fn article_details(batch: &RawBatch, article: &RawArticle) -> ArticleDetails {
    match batch.category {
        ArticleCategory::Component => ArticleDetails::Component {
            shelf_life: shelf_life_of(article),
        },
        ArticleCategory::Part => ArticleDetails::Part,
        ArticleCategory::Consumable => ArticleDetails::Consumable {
            shelf_life: shelf_life_of(article),
            unit: article.unit,
            hazardous: batch.is_hazardous.unwrap_or(false),
        },
        ArticleCategory::Tool => ArticleDetails::Tool(
            article
                .calibration
                .as_ref()
                .map(|c| ToolInfo {
                    status: c.status.clone(),
                    calibration_date: c.calibration_date,
                    next_calibration_date: c.next_calibration_date,
                    next_calibration_interval_days: c.next_calibration_interval_days,
                })
                .unwrap_or_default(),
        ),
    }
}

/// Expiration may arrive flat on the article or nested under a shelf-life
/// record; either way, no expiration date means no shelf-life tracking
fn shelf_life_of(article: &RawArticle) -> Option<ShelfLife> {
    let nested = article.shelf_life.as_ref();
    let expiration = article
        .expiration_date
        .or_else(|| nested.and_then(|s| s.expiration_date));

    expiration.map(|expiration_date| ShelfLife {
        expiration_date,
        fabrication_date: article
            .fabrication_date
            .or_else(|| nested.and_then(|s| s.fabrication_date)),
    })
}
