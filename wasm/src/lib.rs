//! WebAssembly module for the FarmAssist dashboard
//!
//! Provides client-side support for:
//! - Risk band classification
//! - Prediction request building from the form
//! - Sequencing prediction responses onto the page
//! - Rendering the dashboard lists into the DOM

mod dom;
mod flow;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use dom::DomSurface;
pub use flow::{Completion, ParsedPrediction};
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::dataset::DashboardData;
use shared::input::{collect_request, resolve_country};
use shared::render::{
    format_date, render_applications, render_news, render_recommendations, render_trend_chart,
};
use shared::sequence::RequestSequencer;
use shared::view::{self, ids, ViewSurface};

thread_local! {
    static SEQUENCER: RefCell<RequestSequencer> = RefCell::new(RequestSequencer::new());
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("FarmAssist module loaded"));
}

// ============================================================================
// Pure helpers
// ============================================================================

/// Risk level text for a score, e.g. "High Risk"
#[wasm_bindgen]
pub fn classify_risk_score(score: f64) -> String {
    classify_risk(score).to_string()
}

/// CSS class of the risk badge for a score
#[wasm_bindgen]
pub fn risk_class_for_score(score: f64) -> String {
    classify_risk(score).profile().class.to_string()
}

#[wasm_bindgen]
pub fn recommendation_for_score(score: f64) -> String {
    classify_risk(score).profile().recommendation.to_string()
}

/// Country sent to the prediction service: manual entry first, else the dropdown
#[wasm_bindgen]
pub fn resolve_prediction_country(manual: &str, selected: &str) -> String {
    resolve_country(Some(manual), Some(selected))
}

/// JSON body for `POST /api/predict`
#[wasm_bindgen]
pub fn build_prediction_request(manual: &str, selected: &str, crop: &str) -> Result<String, String> {
    let request = PredictionRequest::new(resolve_country(Some(manual), Some(selected)), crop);
    serde_json::to_string(&request).map_err(|e| format!("Invalid request: {}", e))
}

/// Long date form of an ISO date, e.g. "January 15, 2024"
#[wasm_bindgen]
pub fn format_alert_date(iso_date: &str) -> Result<String, String> {
    parse_date_input(iso_date)
        .map(format_date)
        .map_err(|e| e.to_string())
}

// ============================================================================
// DOM bindings
// ============================================================================

/// Render the default dataset into the page
#[wasm_bindgen]
pub fn mount_dashboard() -> Result<(), JsValue> {
    let mut surface = DomSurface::from_window()?;
    let data = DashboardData::default();

    view::sync_reading(&mut surface, &data.weather.reading);
    view::sync_assessment(&mut surface, &data.risk);
    view::sync_loading(&mut surface, LoadingState::Idle);

    surface.set_chart(ids::RISK_CHART, &render_trend_chart(&data.monthly_trend));
    surface.mount(ids::NEWS_GRID, render_news(&data.news_alerts));
    surface.mount(
        ids::RECOMMENDATIONS_LIST,
        render_recommendations(&data.ai_recommendations),
    );
    surface.mount(ids::SCHEDULE_TBODY, render_applications(&data.pesticide_schedule));
    surface.mount(ids::RECENT_TBODY, render_applications(&data.recent_applications));
    Ok(())
}

/// Read the form and return the JSON request body
#[wasm_bindgen]
pub fn collect_prediction_request() -> Result<String, JsValue> {
    let surface = DomSurface::from_window()?;
    serde_json::to_string(&collect_request(&surface))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Collect the form, show the loading overlay and return the generation the page
/// must hand back with the response
#[wasm_bindgen]
pub fn begin_prediction() -> Result<u64, JsValue> {
    let mut surface = DomSurface::from_window()?;
    let dispatch =
        SEQUENCER.with(|sequencer| flow::begin(&mut sequencer.borrow_mut(), &mut surface));
    Ok(dispatch.generation)
}

/// Write the response body for `generation` into the risk card and the sliders.
///
/// Returns false without touching the page when a newer prediction was started.
#[wasm_bindgen]
pub fn apply_prediction(generation: u64, response_json: &str) -> Result<bool, JsValue> {
    let mut surface = DomSurface::from_window()?;
    let completion = SEQUENCER.with(|sequencer| {
        flow::complete(&mut sequencer.borrow_mut(), &mut surface, generation, response_json)
    });

    match completion {
        Completion::Stale => Ok(false),
        Completion::Applied { clamped_from } => {
            if let Some(raw) = clamped_from {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "Risk score {} out of range, clamped",
                    raw
                )));
            }
            Ok(true)
        }
        Completion::Failed { reason } => Err(JsValue::from_str(&reason)),
    }
}

/// The fetch for `generation` failed: clear loading and show the error toast.
///
/// Returns false without touching the page when a newer prediction was started.
#[wasm_bindgen]
pub fn fail_prediction(generation: u64) -> Result<bool, JsValue> {
    let mut surface = DomSurface::from_window()?;
    Ok(SEQUENCER.with(|sequencer| {
        flow::fail(&mut sequencer.borrow_mut(), &mut surface, generation)
    }))
}

/// Update the label next to a slider. Returns false for unknown sliders.
#[wasm_bindgen]
pub fn sync_slider(slider_id: &str, value: f64) -> Result<bool, JsValue> {
    let parameter: WeatherParameter = match slider_id.parse() {
        Ok(parameter) => parameter,
        Err(_) => return Ok(false),
    };
    let mut surface = DomSurface::from_window()?;
    view::sync_parameter(&mut surface, parameter, value);
    Ok(true)
}
