//! Domain models for the AMMS warehouse/inventory core

mod article;
mod batch;

pub use article::*;
pub use batch::*;
