//! External API integrations

pub mod erp_stock;

pub use erp_stock::ErpStockClient;
