//! Inventory service: flattened and grouped article views, low-stock
//! reporting, and the bulk quantity update relay
//!
//! All shaping of the data (flattening, filtering, grouping) is done by
//! the pure functions in `shared`; this service only orchestrates the
//! upstream fetch around them.

use shared::{
    flatten_batches, group_by_part_number, low_stock_articles, ArticleFilter, ArticleRecord,
    InventoryRow, QuantityChange,
};

use crate::error::{AppError, AppResult};
use crate::external::ErpStockClient;

/// Inventory service over the upstream ERP stock API
#[derive(Clone)]
pub struct InventoryService {
    stock: ErpStockClient,
}

impl InventoryService {
    pub fn new(stock: ErpStockClient) -> Self {
        Self { stock }
    }

    /// Flat article list, optionally filtered, in upstream order
    pub async fn list_articles(&self, filter: &ArticleFilter) -> AppResult<Vec<ArticleRecord>> {
        let response = self.stock.fetch_batches().await?;
        let articles = flatten_batches(Some(&response));
        tracing::debug!(
            total = articles.len(),
            filtered = !filter.is_empty(),
            "flattened stock response"
        );

        if filter.is_empty() {
            Ok(articles)
        } else {
            Ok(filter.apply(&articles))
        }
    }

    /// Grouped table rows: one row per part number where duplicates exist
    pub async fn list_grouped(&self, filter: &ArticleFilter) -> AppResult<Vec<InventoryRow>> {
        let articles = self.list_articles(filter).await?;
        let rows = group_by_part_number(&articles);
        tracing::debug!(articles = articles.len(), rows = rows.len(), "grouped articles");
        Ok(rows)
    }

    /// Articles whose stock fell below their configured minimum
    pub async fn low_stock(&self) -> AppResult<Vec<ArticleRecord>> {
        let articles = self.list_articles(&ArticleFilter::default()).await?;
        Ok(low_stock_articles(&articles))
    }

    /// Relay a staged diff to the upstream bulk update endpoint
    ///
    /// The payload is expected to be exactly what the reconciler computed;
    /// an empty diff is rejected rather than forwarded as a no-op call.
    pub async fn apply_quantity_changes(&self, changes: &[QuantityChange]) -> AppResult<usize> {
        if changes.is_empty() {
            return Err(AppError::Validation(
                "no quantity changes to apply".to_string(),
            ));
        }

        self.stock.bulk_update_quantities(changes).await?;
        tracing::info!(count = changes.len(), "applied quantity changes");
        Ok(changes.len())
    }
}
