//! HTTP handlers for the AMMS inventory backend

pub mod health;
pub mod inventory;

pub use health::health_check;
pub use inventory::{list_articles, list_grouped_articles, list_low_stock, update_quantities};
