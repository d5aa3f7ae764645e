//! UI events raised by the view layer and their dispatch onto the dashboard

use serde::Deserialize;
use shared::types::Modal;
use shared::view::ViewSurface;

use crate::app::{AssessmentOutcome, Dashboard};
use crate::external::PredictionService;

/// Events the view layer forwards to the dashboard
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A navigation link was clicked; `target` is the link fragment without `#`
    Navigate { target: String },
    SliderInput { slider_id: String, value: f64 },
    CalculateRisk,
    OpenAddSchedule,
    SubmitSchedule,
    SubmitLogin,
    GoogleSignIn,
    /// Click landed on the modal backdrop itself
    BackdropClick { modal: Modal },
    CloseModal { modal: Modal },
    Escape,
    Tick,
}

/// Result of handling one event
#[derive(Debug)]
pub enum EventOutcome {
    Handled,
    Ignored,
    Assessment(AssessmentOutcome),
}

pub async fn handle_event<P, V>(dashboard: &mut Dashboard<P, V>, event: UiEvent) -> EventOutcome
where
    P: PredictionService,
    V: ViewSurface,
{
    tracing::trace!(?event, "UI event");

    match event {
        UiEvent::Navigate { target } => {
            dashboard.navigate(&target);
            EventOutcome::Handled
        }
        UiEvent::SliderInput { slider_id, value } => {
            if dashboard.on_slider_input(&slider_id, value) {
                EventOutcome::Handled
            } else {
                EventOutcome::Ignored
            }
        }
        UiEvent::CalculateRisk => EventOutcome::Assessment(dashboard.calculate_risk().await),
        UiEvent::OpenAddSchedule => {
            dashboard.open_modal(Modal::AddSchedule);
            EventOutcome::Handled
        }
        UiEvent::SubmitSchedule => {
            let form = dashboard.read_schedule_form();
            match dashboard.add_schedule(form) {
                Ok(()) => EventOutcome::Handled,
                Err(_) => EventOutcome::Ignored,
            }
        }
        UiEvent::SubmitLogin => {
            let form = dashboard.read_login_form();
            if dashboard.sign_in(form).await {
                EventOutcome::Handled
            } else {
                EventOutcome::Ignored
            }
        }
        UiEvent::GoogleSignIn => {
            dashboard.sign_in_with_google().await;
            EventOutcome::Handled
        }
        UiEvent::BackdropClick { modal } => {
            dashboard.on_backdrop_click(modal);
            EventOutcome::Handled
        }
        UiEvent::CloseModal { modal } => {
            dashboard.close_modal(modal);
            EventOutcome::Handled
        }
        UiEvent::Escape => {
            dashboard.on_escape();
            EventOutcome::Handled
        }
        UiEvent::Tick => {
            dashboard.refresh_notifications();
            EventOutcome::Handled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_deserialize_from_view_payloads() {
        let event: UiEvent =
            serde_json::from_str(r#"{"type":"slider_input","slider_id":"humidity","value":55}"#)
                .unwrap();
        assert_eq!(
            event,
            UiEvent::SliderInput {
                slider_id: "humidity".to_string(),
                value: 55.0
            }
        );

        let event: UiEvent =
            serde_json::from_str(r#"{"type":"backdrop_click","modal":"add_schedule"}"#).unwrap();
        assert_eq!(
            event,
            UiEvent::BackdropClick {
                modal: Modal::AddSchedule
            }
        );

        let event: UiEvent = serde_json::from_str(r#"{"type":"calculate_risk"}"#).unwrap();
        assert_eq!(event, UiEvent::CalculateRisk);
    }
}
