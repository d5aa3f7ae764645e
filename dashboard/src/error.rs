//! Error handling for the FarmAssist dashboard
//!
//! Every prediction failure is shown to the user with the same message; the
//! variants only matter for logs.

use thiserror::Error;

pub use shared::models::PREDICTION_ERROR_MESSAGE;

/// Dashboard error types
#[derive(Error, Debug)]
pub enum DashboardError {
    // Prediction errors
    #[error("Prediction request failed: {0}")]
    Transport(String),

    #[error("Prediction service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode prediction response: {0}")]
    Decode(String),

    // Form errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DashboardError {
    /// Stable error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            DashboardError::Transport(_) => "TRANSPORT_ERROR",
            DashboardError::Status { .. } => "TRANSPORT_ERROR",
            DashboardError::Decode(_) => "DECODE_ERROR",
            DashboardError::Validation { .. } => "VALIDATION_ERROR",
            DashboardError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Whether this error came out of the prediction round-trip
    pub fn is_prediction_failure(&self) -> bool {
        matches!(
            self,
            DashboardError::Transport(_) | DashboardError::Status { .. } | DashboardError::Decode(_)
        )
    }

    /// Text for the toast notification
    pub fn user_message(&self) -> String {
        if self.is_prediction_failure() {
            return PREDICTION_ERROR_MESSAGE.to_string();
        }
        match self {
            DashboardError::Validation { field, message } => {
                format!("{}: {}", field, message)
            }
            DashboardError::Configuration(msg) => format!("Configuration error: {}", msg),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
