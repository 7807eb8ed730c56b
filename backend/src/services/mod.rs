//! Business logic services for the AMMS inventory backend

pub mod inventory;

pub use inventory::InventoryService;
