//! Prediction endpoint wire models

use serde::{Deserialize, Serialize};

use super::weather::EnvironmentalReading;

/// Message shown for any failed prediction
pub const PREDICTION_ERROR_MESSAGE: &str = "Error fetching risk prediction";

/// Body of `POST /api/predict`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionRequest {
    pub country: String,
    pub crop: String,
}

impl PredictionRequest {
    pub fn new(country: impl Into<String>, crop: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            crop: crop.into(),
        }
    }
}

/// Response of `POST /api/predict`
///
/// The backend echoes `country` and `crop` and may attach a weather description;
/// none of those are needed by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub risk: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<EnvironmentalReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
}

impl PredictionResponse {
    pub fn new(risk: f64, weather: Option<EnvironmentalReading>) -> Self {
        Self {
            risk,
            weather,
            country: None,
            crop: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_without_weather() {
        let response: PredictionResponse = serde_json::from_str(r#"{"risk":0.85}"#).unwrap();
        assert_eq!(response.risk, 0.85);
        assert!(response.weather.is_none());
    }

    #[test]
    fn test_response_from_backend_with_extras() {
        let body = r#"{
            "risk": 0.5,
            "country": "Kenya",
            "crop": "Maize",
            "weather": {
                "temperature": 30,
                "humidity": 60,
                "rainfall": 2,
                "wind_speed": 10,
                "description": "default"
            }
        }"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        let weather = response.weather.unwrap();
        assert_eq!(weather.temperature, 30.0);
        assert_eq!(weather.wind_speed, 10.0);
        assert_eq!(response.country.as_deref(), Some("Kenya"));
    }

    #[test]
    fn test_response_missing_risk_is_rejected() {
        let result = serde_json::from_str::<PredictionResponse>(r#"{"weather":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let json = serde_json::to_value(PredictionRequest::new("Kenya", "Maize")).unwrap();
        assert_eq!(json, serde_json::json!({"country": "Kenya", "crop": "Maize"}));
    }
}
