//! Risk assessment response acceptance

use shared::models::{EnvironmentalReading, PredictionResponse, RiskAssessment};
use shared::validation::{is_risk_score_in_range, normalize_risk_score};

use crate::error::{DashboardError, DashboardResult};

/// A prediction ready to be written to the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedPrediction {
    pub assessment: RiskAssessment,
    pub weather: Option<EnvironmentalReading>,
}

/// Turn a raw backend response into an assessment.
///
/// Out-of-range scores are clamped to [0, 1]; non-finite scores are treated as a
/// decode failure so nothing is written.
pub fn accept_prediction(response: PredictionResponse) -> DashboardResult<AcceptedPrediction> {
    let score = normalize_risk_score(response.risk)
        .map_err(|msg| DashboardError::Decode(format!("{}: {}", msg, response.risk)))?;

    if !is_risk_score_in_range(response.risk) {
        tracing::warn!(raw = response.risk, clamped = score, "Risk score out of range, clamped");
    }

    Ok(AcceptedPrediction {
        assessment: RiskAssessment::from_score(score),
        weather: response.weather,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared::models::RiskBand;

    #[test]
    fn test_accept_classifies_score() {
        let accepted = accept_prediction(PredictionResponse::new(0.85, None)).unwrap();
        assert_eq!(accepted.assessment.band(), RiskBand::High);
        assert!(accepted.weather.is_none());
    }

    #[test]
    fn test_accept_clamps_out_of_range() {
        let accepted = accept_prediction(PredictionResponse::new(1.4, None)).unwrap();
        assert_eq!(accepted.assessment.current_risk(), 1.0);

        let accepted = accept_prediction(PredictionResponse::new(-0.2, None)).unwrap();
        assert_eq!(accepted.assessment.current_risk(), 0.0);
        assert_eq!(accepted.assessment.band(), RiskBand::Low);
    }

    #[test]
    fn test_accept_rejects_nan() {
        let result = accept_prediction(PredictionResponse::new(f64::NAN, None));
        assert!(matches!(result, Err(DashboardError::Decode(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_accepted_score_is_in_range(raw in -10.0f64..10.0) {
            let accepted = accept_prediction(PredictionResponse::new(raw, None)).unwrap();
            prop_assert!(is_risk_score_in_range(accepted.assessment.current_risk()));
        }
    }
}
