//! Dashboard services

pub mod auth;
pub mod notification;
pub mod risk;
pub mod schedule;

pub use auth::{AuthService, LoginForm, SignInMethod};
pub use notification::{Notification, NotificationKind, NotificationService};
pub use risk::{accept_prediction, AcceptedPrediction};
pub use shared::sequence::{Dispatch, RequestSequencer};
pub use schedule::ScheduleForm;
