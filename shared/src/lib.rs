//! Shared types and core inventory logic for the AMMS platform
//!
//! This crate contains the warehouse/inventory domain models and the pure
//! data transformations (flattening, grouping, quantity reconciliation)
//! shared between the backend and the browser table UI (via WASM).

pub mod filter;
pub mod flatten;
pub mod group;
pub mod models;
pub mod reconcile;
pub mod units;
pub mod validation;

pub use filter::*;
pub use flatten::*;
pub use group::*;
pub use models::*;
pub use reconcile::*;
pub use units::*;
pub use validation::*;
