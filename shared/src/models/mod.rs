//! Domain models for the FarmAssist dashboard

mod advisory;
mod prediction;
mod risk;
mod weather;

pub use advisory::*;
pub use prediction::*;
pub use risk::*;
pub use weather::*;
