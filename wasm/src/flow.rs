//! Prediction round-trip driven from the page
//!
//! The page script performs the fetch; these functions decide what each step is
//! allowed to write. Only the latest generation touches the view.

use shared::input::collect_request;
use shared::models::{
    EnvironmentalReading, PredictionResponse, RiskAssessment, PREDICTION_ERROR_MESSAGE,
};
use shared::render::{render_toast, TOAST_ERROR_CLASS};
use shared::sequence::{Dispatch, RequestSequencer};
use shared::types::LoadingState;
use shared::validation::{is_risk_score_in_range, normalize_risk_score};
use shared::view::{self, ids, ViewSurface};

/// A decoded prediction ready to be shown
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPrediction {
    pub assessment: RiskAssessment,
    pub weather: Option<EnvironmentalReading>,
    /// Raw score when it had to be clamped into [0, 1]
    pub clamped_from: Option<f64>,
}

/// What a completed fetch did to the page
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// A newer request was dispatched meanwhile; nothing was written
    Stale,
    Applied { clamped_from: Option<f64> },
    /// The error toast is shown and the previous assessment kept
    Failed { reason: String },
}

/// Decode a prediction response body
pub fn parse_prediction(response_json: &str) -> Result<ParsedPrediction, String> {
    let response: PredictionResponse = serde_json::from_str(response_json)
        .map_err(|e| format!("Invalid prediction JSON: {}", e))?;
    let score = normalize_risk_score(response.risk).map_err(str::to_string)?;

    Ok(ParsedPrediction {
        assessment: RiskAssessment::from_score(score),
        weather: response.weather,
        clamped_from: (!is_risk_score_in_range(response.risk)).then_some(response.risk),
    })
}

/// Collect the form, issue a generation and show the loading overlay
pub fn begin<V: ViewSurface + ?Sized>(sequencer: &mut RequestSequencer, view: &mut V) -> Dispatch {
    let dispatch = sequencer.issue(collect_request(view));
    view::sync_loading(view, LoadingState::Loading);
    dispatch
}

/// Write a response body for `generation`
pub fn complete<V: ViewSurface + ?Sized>(
    sequencer: &mut RequestSequencer,
    view: &mut V,
    generation: u64,
    response_json: &str,
) -> Completion {
    if !sequencer.settle(generation) {
        return Completion::Stale;
    }
    view::sync_loading(view, LoadingState::Idle);

    match parse_prediction(response_json) {
        Ok(parsed) => {
            if let Some(reading) = parsed.weather {
                view::sync_reading(view, &reading);
            }
            view::sync_assessment(view, &parsed.assessment);
            Completion::Applied {
                clamped_from: parsed.clamped_from,
            }
        }
        Err(reason) => {
            show_error(view);
            Completion::Failed { reason }
        }
    }
}

/// The fetch for `generation` failed before a body arrived
pub fn fail<V: ViewSurface + ?Sized>(
    sequencer: &mut RequestSequencer,
    view: &mut V,
    generation: u64,
) -> bool {
    if !sequencer.settle(generation) {
        return false;
    }
    view::sync_loading(view, LoadingState::Idle);
    show_error(view);
    true
}

fn show_error<V: ViewSurface + ?Sized>(view: &mut V) {
    view.mount(
        ids::NOTIFICATIONS,
        vec![render_toast(TOAST_ERROR_CLASS, PREDICTION_ERROR_MESSAGE)],
    );
}
