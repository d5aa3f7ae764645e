//! Key-addressable view surface and the synchronizer that writes into it
//!
//! The dashboard never touches markup directly. Everything it displays goes through
//! [`ViewSurface`], keyed by element id. [`MemorySurface`] backs headless runs and
//! tests; the wasm crate provides a DOM implementation.

use std::collections::{BTreeSet, HashMap};

use crate::models::{EnvironmentalReading, RiskAssessment, WeatherParameter};
use crate::render::{ChartSeries, ViewNode};
use crate::types::LoadingState;

/// Element ids the dashboard reads from and writes to
pub mod ids {
    pub const RISK_LEVEL: &str = "risk-level";
    pub const RISK_SCORE: &str = "risk-score";
    pub const RISK_WARNING: &str = "risk-warning";
    pub const LOADING_OVERLAY: &str = "loading-overlay";
    pub const COUNTRY_MANUAL: &str = "country-manual";
    pub const COUNTRY_SELECT: &str = "country-select";
    pub const CROP_INPUT: &str = "crop-input";
    pub const RISK_CHART: &str = "riskChart";
    pub const NEWS_GRID: &str = "news-grid";
    pub const RECOMMENDATIONS_LIST: &str = "recommendations-list";
    pub const SCHEDULE_TBODY: &str = "schedule-tbody";
    pub const RECENT_TBODY: &str = "recent-tbody";
    pub const NOTIFICATIONS: &str = "notifications";
}

/// Class list applied to the risk level badge
const RISK_LEVEL_BASE_CLASS: &str = "risk-level";

/// Opaque, id-addressed view boundary
pub trait ViewSurface {
    /// Current value of an input or select control
    fn value(&self, id: &str) -> Option<String>;

    /// Set the value of an input control (slider, text field)
    fn set_value(&mut self, id: &str, value: &str);

    /// Replace the text content of an element
    fn set_text(&mut self, id: &str, text: &str);

    /// Replace the full class attribute of an element
    fn set_class(&mut self, id: &str, class: &str);

    /// Toggle the `hidden` class of an element
    fn set_hidden(&mut self, id: &str, hidden: bool);

    /// Toggle the `active` class of an element
    fn set_active(&mut self, id: &str, active: bool);

    /// Replace the children of a container with rendered nodes
    fn mount(&mut self, id: &str, nodes: Vec<ViewNode>);

    /// Hand a data series to the chart drawn in `id`
    fn set_chart(&mut self, id: &str, series: &ChartSeries);
}

/// Format a number the way a text node shows it (`30`, not `30.0`)
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

// ============================================================================
// Synchronizer
// ============================================================================

/// Write a risk assessment into the risk card.
///
/// Overwrites unconditionally, so repeating the call with the same assessment
/// leaves the surface unchanged.
pub fn sync_assessment<V: ViewSurface + ?Sized>(view: &mut V, assessment: &RiskAssessment) {
    view.set_text(ids::RISK_LEVEL, assessment.risk_level());
    view.set_class(
        ids::RISK_LEVEL,
        &format!("{} {}", RISK_LEVEL_BASE_CLASS, assessment.risk_class()),
    );
    view.set_text(ids::RISK_SCORE, &format_number(assessment.current_risk()));
    view.set_text(ids::RISK_WARNING, assessment.recommendation());
}

/// Push one reading into its slider and the label beside it
pub fn sync_parameter<V: ViewSurface + ?Sized>(
    view: &mut V,
    parameter: WeatherParameter,
    value: f64,
) {
    let text = format_number(value);
    view.set_value(parameter.slider_id(), &text);
    view.set_text(parameter.label_id(), &text);
}

/// Push all four readings into their sliders and labels
pub fn sync_reading<V: ViewSurface + ?Sized>(view: &mut V, reading: &EnvironmentalReading) {
    for parameter in WeatherParameter::ALL {
        sync_parameter(view, parameter, reading.get(parameter));
    }
}

/// Show or hide the loading overlay
pub fn sync_loading<V: ViewSurface + ?Sized>(view: &mut V, state: LoadingState) {
    view.set_hidden(ids::LOADING_OVERLAY, !state.is_loading());
}

// ============================================================================
// In-memory surface
// ============================================================================

/// State of one addressed element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub value: Option<String>,
    pub text: Option<String>,
    pub classes: BTreeSet<String>,
    pub children: Vec<ViewNode>,
    pub chart: Option<ChartSeries>,
}

impl ElementState {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn class_attr(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }
}

/// Headless [`ViewSurface`] keeping element state in a map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    elements: HashMap<String, ElementState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.text.as_deref())
    }

    pub fn children(&self, id: &str) -> &[ViewNode] {
        self.elements
            .get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn chart(&self, id: &str) -> Option<&ChartSeries> {
        self.elements.get(id).and_then(|e| e.chart.as_ref())
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .map(|e| e.has_class(class))
            .unwrap_or(false)
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.has_class(id, "hidden")
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.has_class(id, "active")
    }

    fn entry(&mut self, id: &str) -> &mut ElementState {
        self.elements.entry(id.to_string()).or_default()
    }

    fn toggle_class(&mut self, id: &str, class: &str, on: bool) {
        let element = self.entry(id);
        if on {
            element.classes.insert(class.to_string());
        } else {
            element.classes.remove(class);
        }
    }
}

impl ViewSurface for MemorySurface {
    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).and_then(|e| e.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        self.entry(id).value = Some(value.to_string());
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.entry(id).text = Some(text.to_string());
    }

    fn set_class(&mut self, id: &str, class: &str) {
        self.entry(id).classes = class.split_whitespace().map(str::to_string).collect();
    }

    fn set_hidden(&mut self, id: &str, hidden: bool) {
        self.toggle_class(id, "hidden", hidden);
    }

    fn set_active(&mut self, id: &str, active: bool) {
        self.toggle_class(id, "active", active);
    }

    fn mount(&mut self, id: &str, nodes: Vec<ViewNode>) {
        self.entry(id).children = nodes;
    }

    fn set_chart(&mut self, id: &str, series: &ChartSeries) {
        self.entry(id).chart = Some(series.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_high_assessment() {
        let mut view = MemorySurface::new();
        sync_assessment(&mut view, &RiskAssessment::from_score(0.85));

        assert_eq!(view.text(ids::RISK_LEVEL), Some("High Risk"));
        assert_eq!(view.text(ids::RISK_SCORE), Some("0.85"));
        assert!(view.has_class(ids::RISK_LEVEL, "risk-level"));
        assert!(view.has_class(ids::RISK_LEVEL, "high-risk"));
        assert!(view
            .text(ids::RISK_WARNING)
            .unwrap()
            .starts_with("Warning: High aphid risk"));
    }

    #[test]
    fn test_sync_replaces_previous_class() {
        let mut view = MemorySurface::new();
        sync_assessment(&mut view, &RiskAssessment::from_score(0.85));
        sync_assessment(&mut view, &RiskAssessment::from_score(0.1));

        assert!(view.has_class(ids::RISK_LEVEL, "low-risk"));
        assert!(!view.has_class(ids::RISK_LEVEL, "high-risk"));
    }

    #[test]
    fn test_sync_assessment_is_idempotent() {
        let assessment = RiskAssessment::from_score(0.55);
        let mut once = MemorySurface::new();
        sync_assessment(&mut once, &assessment);

        let mut twice = MemorySurface::new();
        sync_assessment(&mut twice, &assessment);
        sync_assessment(&mut twice, &assessment);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sync_reading_keeps_slider_and_label_together() {
        let mut view = MemorySurface::new();
        sync_reading(&mut view, &EnvironmentalReading::new(30.0, 60.0, 2.0, 10.5));

        for (parameter, expected) in [
            (WeatherParameter::Temperature, "30"),
            (WeatherParameter::Humidity, "60"),
            (WeatherParameter::Rainfall, "2"),
            (WeatherParameter::WindSpeed, "10.5"),
        ] {
            assert_eq!(view.value(parameter.slider_id()).as_deref(), Some(expected));
            assert_eq!(view.text(parameter.label_id()), Some(expected));
        }
    }

    #[test]
    fn test_loading_overlay_toggles() {
        let mut view = MemorySurface::new();
        sync_loading(&mut view, LoadingState::Loading);
        assert!(!view.is_hidden(ids::LOADING_OVERLAY));
        sync_loading(&mut view, LoadingState::Idle);
        assert!(view.is_hidden(ids::LOADING_OVERLAY));
    }
}
