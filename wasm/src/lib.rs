//! WebAssembly module for the AMMS inventory tables
//!
//! Provides client-side computation for the warehouse screens:
//! - Flattening the nested stock response into table rows
//! - Grouping rows by part number
//! - Staging quantity edits and computing the save payload
//!
//! The boundary is JSON strings, matching the rest of the platform's
//! client-side computation modules.

use wasm_bindgen::prelude::*;

use shared::{
    flatten_batches, group_by_part_number, ArticleRecord, BatchResponse, QuantityEditState,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"AMMS inventory module loaded".into());
}

fn parse_articles(articles_json: &str) -> Result<Vec<ArticleRecord>, JsValue> {
    serde_json::from_str(articles_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid articles JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Flatten a nested stock response into display-ready article records
///
/// An empty or null input means "no data yet" and yields an empty list,
/// so the table can render while loading.
#[wasm_bindgen]
pub fn flatten_batches_json(response_json: &str) -> Result<String, JsValue> {
    let trimmed = response_json.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return to_json(&Vec::<ArticleRecord>::new());
    }

    let response: BatchResponse = serde_json::from_str(trimmed)
        .map_err(|e| JsValue::from_str(&format!("Invalid stock response JSON: {}", e)))?;
    to_json(&flatten_batches(Some(&response)))
}

/// Group flattened articles by part number for the compact table view
#[wasm_bindgen]
pub fn group_articles_json(articles_json: &str) -> Result<String, JsValue> {
    let articles = parse_articles(articles_json)?;
    to_json(&group_by_part_number(&articles))
}

/// Quantity edit staging for the inventory table
///
/// Wraps the shared reconciler; the table keeps one editor per session
/// and reads row dirtiness and the save payload through it.
#[wasm_bindgen]
pub struct QuantityEditor {
    articles: Vec<ArticleRecord>,
    state: QuantityEditState,
}

#[wasm_bindgen]
impl QuantityEditor {
    /// Create an editor over a freshly loaded article list
    #[wasm_bindgen(constructor)]
    pub fn new(articles_json: &str) -> Result<QuantityEditor, JsValue> {
        let articles = parse_articles(articles_json)?;
        let state = QuantityEditState::from_articles(&articles);
        Ok(QuantityEditor { articles, state })
    }

    /// Commit one row's raw text input (masked to a whole number: the
    /// fractional tail is discarded, then non-digits are stripped; empty
    /// input reverts the row to baseline)
    pub fn set_quantity(&mut self, id: i64, raw_text: &str) {
        self.state.set_quantity(id, raw_text);
    }

    /// Whether a row has unsaved changes
    pub fn is_modified(&self, id: i64) -> bool {
        self.state.is_modified(id)
    }

    /// Whether any row has unsaved changes
    pub fn has_changes(&self) -> bool {
        self.state.has_changes(&self.articles)
    }

    /// The save payload: the minimal diff, in table order, as JSON
    pub fn modified_json(&self) -> Result<String, JsValue> {
        to_json(&self.state.modified(&self.articles))
    }

    /// Drop all staged edits (after a successful save or on cancel)
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Swap in a refetched article list; staged edits survive for rows
    /// that still exist
    pub fn rebase(&mut self, articles_json: &str) -> Result<(), JsValue> {
        let articles = parse_articles(articles_json)?;
        self.state.rebase(&articles);
        self.articles = articles;
        Ok(())
    }
}
