//! FarmAssist pest-risk dashboard
//!
//! Drives the risk assessment flow (input collection, prediction, view
//! synchronization) together with navigation, scheduling and simulated sign-in.

pub mod app;
pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod services;

pub use app::{AssessmentOutcome, Dashboard, DashboardState};
pub use config::Config;
pub use error::{DashboardError, DashboardResult};
