//! Aphid risk assessment models

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the High band
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Lower bound (inclusive) of the Medium band
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.4;

/// Risk band on the [0, 1] score scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low = 0,
    Medium = 1,
    High = 2,
}

/// Fixed display texts for a band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandProfile {
    pub level: &'static str,
    pub class: &'static str,
    pub recommendation: &'static str,
}

/// Display texts per band, indexed by `RiskBand as usize`
pub static BAND_TABLE: [(RiskBand, BandProfile); 3] = [
    (
        RiskBand::Low,
        BandProfile {
            level: "Low Risk",
            class: "low-risk",
            recommendation: "Low aphid risk. Continue regular monitoring and maintain preventive measures",
        },
    ),
    (
        RiskBand::Medium,
        BandProfile {
            level: "Medium Risk",
            class: "medium-risk",
            recommendation: "Moderate aphid risk detected. Monitor crops closely and prepare treatment options",
        },
    ),
    (
        RiskBand::High,
        BandProfile {
            level: "High Risk",
            class: "high-risk",
            recommendation: "Warning: High aphid risk predicted. Consider deploying biocontrol agents within 48 hours",
        },
    ),
];

impl RiskBand {
    pub fn profile(&self) -> &'static BandProfile {
        &BAND_TABLE[*self as usize].1
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.profile().level)
    }
}

/// Classify a risk score into its band
pub fn classify_risk(score: f64) -> RiskBand {
    if score >= HIGH_RISK_THRESHOLD {
        RiskBand::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

/// The risk currently shown on the dashboard
///
/// Only constructed through [`RiskAssessment::from_score`] so the level, class and
/// recommendation can never disagree with the score.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    current_risk: f64,
    band: RiskBand,
}

impl RiskAssessment {
    pub fn from_score(score: f64) -> Self {
        Self {
            current_risk: score,
            band: classify_risk(score),
        }
    }

    pub fn current_risk(&self) -> f64 {
        self.current_risk
    }

    pub fn band(&self) -> RiskBand {
        self.band
    }

    pub fn risk_level(&self) -> &'static str {
        self.band.profile().level
    }

    pub fn risk_class(&self) -> &'static str {
        self.band.profile().class
    }

    pub fn recommendation(&self) -> &'static str {
        self.band.profile().recommendation
    }
}

/// One point of the monthly risk trend chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub risk: f64,
}

impl TrendPoint {
    pub fn new(month: &str, risk: f64) -> Self {
        Self {
            month: month.to_string(),
            risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_risk(0.7), RiskBand::High);
        assert_eq!(classify_risk(0.6999), RiskBand::Medium);
        assert_eq!(classify_risk(0.4), RiskBand::Medium);
        assert_eq!(classify_risk(0.3999), RiskBand::Low);
        assert_eq!(classify_risk(0.0), RiskBand::Low);
        assert_eq!(classify_risk(1.0), RiskBand::High);
    }

    #[test]
    fn test_assessment_texts_follow_band() {
        let assessment = RiskAssessment::from_score(0.85);
        assert_eq!(assessment.risk_level(), "High Risk");
        assert_eq!(assessment.risk_class(), "high-risk");
        assert!(assessment.recommendation().starts_with("Warning: High aphid risk"));

        let assessment = RiskAssessment::from_score(0.5);
        assert_eq!(assessment.risk_level(), "Medium Risk");
        assert_eq!(assessment.risk_class(), "medium-risk");
    }

    #[test]
    fn test_every_band_has_distinct_profile() {
        let classes: Vec<_> = [RiskBand::Low, RiskBand::Medium, RiskBand::High]
            .iter()
            .map(|b| b.profile().class)
            .collect();
        assert_eq!(classes, vec!["low-risk", "medium-risk", "high-risk"]);
    }

    #[test]
    fn test_table_is_indexed_by_band() {
        for (index, (band, _)) in BAND_TABLE.iter().enumerate() {
            assert_eq!(*band as usize, index);
        }
    }

    #[test]
    fn test_display_uses_level_text() {
        assert_eq!(RiskBand::Low.to_string(), "Low Risk");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_band_follows_thresholds(score in 0.0f64..=1.0) {
            let expected = if score >= HIGH_RISK_THRESHOLD {
                RiskBand::High
            } else if score >= MEDIUM_RISK_THRESHOLD {
                RiskBand::Medium
            } else {
                RiskBand::Low
            };
            prop_assert_eq!(classify_risk(score), expected);
        }

        #[test]
        fn prop_assessment_keeps_score(score in 0.0f64..=1.0) {
            let assessment = RiskAssessment::from_score(score);
            prop_assert_eq!(assessment.current_risk(), score);
            prop_assert_eq!(assessment.risk_class(), assessment.band().profile().class);
        }
    }
}
