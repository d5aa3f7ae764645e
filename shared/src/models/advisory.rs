//! News alerts and pesticide application models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Regional news or advisory alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsAlert {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub priority: String,
    pub content: String,
    pub category: NewsCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NewsCategory {
    Weather,
    Pest,
}

/// Planned or completed pesticide / biocontrol application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PesticideApplication {
    pub date: NaiveDate,
    pub target_pest: String,
    pub treatment: String,
    pub quantity: String,
    pub area: String,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApplicationStatus {
    Planned,
    Completed,
}

impl ApplicationStatus {
    /// CSS class of the status badge
    pub fn badge_class(&self) -> String {
        format!("status-{}", self.to_string().to_lowercase())
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Planned => write!(f, "Planned"),
            ApplicationStatus::Completed => write!(f, "Completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(ApplicationStatus::Planned.badge_class(), "status-planned");
        assert_eq!(ApplicationStatus::Completed.badge_class(), "status-completed");
    }
}
