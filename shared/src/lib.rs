//! Shared types and models for the FarmAssist pest-risk dashboard
//!
//! This crate contains the domain models, the view surface abstraction and the pure
//! rendering logic shared between the native dashboard and the WASM bindings.

pub mod dataset;
pub mod input;
pub mod models;
pub mod render;
pub mod sequence;
pub mod types;
pub mod validation;
pub mod view;

pub use dataset::*;
pub use models::*;
pub use types::*;
pub use validation::*;
