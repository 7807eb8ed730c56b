//! Validation utilities for the AMMS inventory core

use crate::models::ArticleRecord;

// ============================================================================
// Stock Validations
// ============================================================================

/// Validate a part number is usable as a grouping/display key
pub fn validate_part_number(part_number: &str) -> Result<(), &'static str> {
    let trimmed = part_number.trim();
    if trimmed.is_empty() {
        return Err("Part number cannot be empty");
    }
    if trimmed.len() > 64 {
        return Err("Part number too long (max 64 characters)");
    }
    if trimmed.chars().any(char::is_control) {
        return Err("Part number contains control characters");
    }
    Ok(())
}

/// Validate a stock quantity value
pub fn validate_quantity(quantity: f64) -> Result<(), &'static str> {
    if !quantity.is_finite() {
        return Err("Quantity must be a finite number");
    }
    if quantity < 0.0 {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Whether an article's stock has fallen below its configured minimum
///
/// Articles without a minimum threshold never trigger the low-stock flag.
pub fn is_below_min_quantity(article: &ArticleRecord) -> bool {
    match article.min_quantity {
        Some(min) => article.quantity < min,
        None => false,
    }
}

/// Collect the articles that need restocking, in input order
pub fn low_stock_articles(articles: &[ArticleRecord]) -> Vec<ArticleRecord> {
    articles
        .iter()
        .filter(|article| is_below_min_quantity(article))
        .cloned()
        .collect()
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate a storage zone label (non-empty, printable)
pub fn validate_zone(zone: &str) -> Result<(), &'static str> {
    if zone.trim().is_empty() {
        return Err("Zone cannot be empty");
    }
    Ok(())
}
