//! HTTP handlers for the inventory endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{ArticleCategory, ArticleFilter, ArticleRecord, ArticleStatus, InventoryRow, QuantityChange};

use crate::error::{AppError, AppResult};
use crate::services::InventoryService;
use crate::AppState;

/// Query parameters for the article list endpoints
///
/// `status` and `category` accept comma-separated lists.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub zone: Option<String>,
    pub search: Option<String>,
    pub hazardous_only: Option<bool>,
    pub expires_after: Option<NaiveDate>,
    pub expires_before: Option<NaiveDate>,
}

impl ArticleQuery {
    /// Convert query parameters into the shared filter
    ///
    /// Status codes never fail (unknown codes match the pass-through
    /// variant); categories are a closed set and reject unknown values.
    pub fn into_filter(self) -> AppResult<ArticleFilter> {
        let statuses = match self.status {
            Some(raw) => csv_items(&raw)
                .map(|code| ArticleStatus::from(code.to_string()))
                .collect(),
            None => Vec::new(),
        };

        let categories = match self.category {
            Some(raw) => csv_items(&raw)
                .map(parse_category)
                .collect::<AppResult<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(ArticleFilter {
            statuses,
            categories,
            zone: self.zone,
            search: self.search,
            hazardous_only: self.hazardous_only.unwrap_or(false),
            expires_after: self.expires_after,
            expires_before: self.expires_before,
        })
    }
}

fn csv_items(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_category(raw: &str) -> AppResult<ArticleCategory> {
    match raw.to_uppercase().as_str() {
        "COMPONENT" => Ok(ArticleCategory::Component),
        "PART" => Ok(ArticleCategory::Part),
        "CONSUMABLE" => Ok(ArticleCategory::Consumable),
        "TOOL" => Ok(ArticleCategory::Tool),
        _ => Err(AppError::Validation(format!("unknown category: {raw}"))),
    }
}

/// Bulk quantity update request, the reconciler's diff as-is
#[derive(Debug, Deserialize)]
pub struct QuantityUpdateRequest {
    pub changes: Vec<QuantityChange>,
}

#[derive(Debug, Serialize)]
pub struct QuantityUpdateResponse {
    pub updated: usize,
}

/// List flattened articles, optionally filtered
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> AppResult<Json<Vec<ArticleRecord>>> {
    let filter = query.into_filter()?;
    let service = InventoryService::new(state.stock.clone());
    let articles = service.list_articles(&filter).await?;
    Ok(Json(articles))
}

/// List articles grouped by part number
pub async fn list_grouped_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> AppResult<Json<Vec<InventoryRow>>> {
    let filter = query.into_filter()?;
    let service = InventoryService::new(state.stock.clone());
    let rows = service.list_grouped(&filter).await?;
    Ok(Json(rows))
}

/// List articles below their configured minimum quantity
pub async fn list_low_stock(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ArticleRecord>>> {
    let service = InventoryService::new(state.stock.clone());
    let articles = service.low_stock().await?;
    Ok(Json(articles))
}

/// Relay a staged quantity diff to the upstream ERP
pub async fn update_quantities(
    State(state): State<AppState>,
    Json(request): Json<QuantityUpdateRequest>,
) -> AppResult<Json<QuantityUpdateResponse>> {
    let service = InventoryService::new(state.stock.clone());
    let updated = service.apply_quantity_changes(&request.changes).await?;
    Ok(Json(QuantityUpdateResponse { updated }))
}
