//! Common types used across the dashboard

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Top-level page sections reachable from the navigation bar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Home,
    PestRisk,
    News,
    Pesticide,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::PestRisk,
        Section::News,
        Section::Pesticide,
    ];

    /// Element id of the section container (also the nav link fragment)
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::PestRisk => "pest-risk",
            Section::News => "news",
            Section::Pesticide => "pesticide",
        }
    }

    /// Element id of the matching navigation link
    pub fn nav_link_id(&self) -> String {
        format!("nav-{}", self.id())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Overlay dialogs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    Login,
    AddSchedule,
}

impl Modal {
    pub fn id(&self) -> &'static str {
        match self {
            Modal::Login => "login-modal",
            Modal::AddSchedule => "add-schedule-modal",
        }
    }
}

/// Loading overlay state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_round_trips_through_id() {
        for section in Section::ALL {
            assert_eq!(section.id().parse(), Ok(section));
        }
        assert!("login".parse::<Section>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Section::default(), Section::Home);
        assert!(!LoadingState::default().is_loading());
    }
}
