//! Pure list renderers
//!
//! Each renderer maps a slice of records onto a tree of [`ViewNode`]s which the
//! view layer mounts into its container. No markup strings are built here.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{NewsAlert, PesticideApplication, TrendPoint};

/// Element tree handed to the view layer
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    Element {
        tag: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        children: Vec<ViewNode>,
    },
    Text {
        text: String,
    },
}

impl ViewNode {
    pub fn element(tag: &str) -> Self {
        ViewNode::Element {
            tag: tag.to_string(),
            class: None,
            href: None,
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text { text: text.into() }
    }

    pub fn with_class(mut self, value: &str) -> Self {
        if let ViewNode::Element { class, .. } = &mut self {
            *class = Some(value.to_string());
        }
        self
    }

    pub fn with_href(mut self, value: &str) -> Self {
        if let ViewNode::Element { href, .. } = &mut self {
            *href = Some(value.to_string());
        }
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        if let ViewNode::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(ViewNode::text(text))
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        match self {
            ViewNode::Text { text } => text.clone(),
            ViewNode::Element { children, .. } => {
                children.iter().map(ViewNode::text_content).collect()
            }
        }
    }

    /// Depth-first search for the first element carrying `class`
    pub fn find_by_class(&self, wanted: &str) -> Option<&ViewNode> {
        match self {
            ViewNode::Text { .. } => None,
            ViewNode::Element {
                class, children, ..
            } => {
                if class.as_deref() == Some(wanted) {
                    return Some(self);
                }
                children.iter().find_map(|c| c.find_by_class(wanted))
            }
        }
    }

    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Element { children, .. } => children,
            ViewNode::Text { .. } => &[],
        }
    }
}

/// Long date form, e.g. "January 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

// ============================================================================
// Renderers
// ============================================================================

/// News alert cards
pub fn render_news(alerts: &[NewsAlert]) -> Vec<ViewNode> {
    alerts
        .iter()
        .map(|news| {
            let heading = ViewNode::element("div")
                .with_child(
                    ViewNode::element("h3")
                        .with_class("news-title")
                        .with_text(&news.title),
                )
                .with_child(
                    ViewNode::element("div")
                        .with_class("news-date")
                        .with_text(format_date(news.date)),
                );

            ViewNode::element("div")
                .with_class("news-card")
                .with_child(
                    ViewNode::element("div")
                        .with_class("news-header")
                        .with_child(heading)
                        .with_child(
                            ViewNode::element("span")
                                .with_class("priority-badge")
                                .with_text(&news.priority),
                        ),
                )
                .with_child(
                    ViewNode::element("div")
                        .with_class("news-content")
                        .with_text(&news.content),
                )
                .with_child(
                    ViewNode::element("a")
                        .with_class("read-more")
                        .with_href("#")
                        .with_text("Read More"),
                )
        })
        .collect()
}

/// Table rows for the schedule and the recent-applications tables
pub fn render_applications(applications: &[PesticideApplication]) -> Vec<ViewNode> {
    applications
        .iter()
        .map(|item| {
            let cell = |text: String| ViewNode::element("td").with_text(text);
            ViewNode::element("tr")
                .with_child(cell(format_date(item.date)))
                .with_child(cell(item.target_pest.clone()))
                .with_child(cell(item.treatment.clone()))
                .with_child(cell(item.quantity.clone()))
                .with_child(cell(item.area.clone()))
                .with_child(
                    ViewNode::element("td").with_child(
                        ViewNode::element("span")
                            .with_class(&item.status.badge_class())
                            .with_text(item.status.to_string()),
                    ),
                )
        })
        .collect()
}

/// List items of the AI recommendations panel
pub fn render_recommendations(recommendations: &[String]) -> Vec<ViewNode> {
    recommendations
        .iter()
        .map(|text| ViewNode::element("li").with_text(text))
        .collect()
}

// ============================================================================
// Chart
// ============================================================================

/// Line chart data for the monthly risk trend
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub y_max: f64,
    /// Y axis tick labels from 0 to `y_max`
    pub y_ticks: Vec<String>,
}

/// Spacing between y axis ticks
const Y_TICK_STEP: f64 = 0.2;

impl ChartSeries {
    /// Y axis tick label, rendered as a percentage
    pub fn tick_label(value: f64) -> String {
        format!("{}%", (value * 100.0).round())
    }
}

pub fn render_trend_chart(trend: &[TrendPoint]) -> ChartSeries {
    let y_max = 1.0;
    let tick_count = (y_max / Y_TICK_STEP).round() as usize;
    ChartSeries {
        label: "Aphid Risk Level".to_string(),
        labels: trend.iter().map(|p| p.month.clone()).collect(),
        values: trend.iter().map(|p| p.risk).collect(),
        y_max,
        y_ticks: (0..=tick_count)
            .map(|i| ChartSeries::tick_label(i as f64 * Y_TICK_STEP))
            .collect(),
    }
}

// ============================================================================
// Toasts
// ============================================================================

pub const TOAST_SUCCESS_CLASS: &str = "toast toast-success";
pub const TOAST_ERROR_CLASS: &str = "toast toast-error";

/// A single toast for the notifications container
pub fn render_toast(class: &str, message: &str) -> ViewNode {
    ViewNode::element("div").with_class(class).with_text(message)
}
