//! Environmental reading models

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Current field conditions driving the aphid risk model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentalReading {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Rainfall in mm
    pub rainfall: f64,
    /// Wind speed in km/h
    #[serde(alias = "windSpeed")]
    pub wind_speed: f64,
}

impl EnvironmentalReading {
    pub fn new(temperature: f64, humidity: f64, rainfall: f64, wind_speed: f64) -> Self {
        Self {
            temperature,
            humidity,
            rainfall,
            wind_speed,
        }
    }

    pub fn get(&self, parameter: WeatherParameter) -> f64 {
        match parameter {
            WeatherParameter::Temperature => self.temperature,
            WeatherParameter::Humidity => self.humidity,
            WeatherParameter::Rainfall => self.rainfall,
            WeatherParameter::WindSpeed => self.wind_speed,
        }
    }

    pub fn set(&mut self, parameter: WeatherParameter, value: f64) {
        match parameter {
            WeatherParameter::Temperature => self.temperature = value,
            WeatherParameter::Humidity => self.humidity = value,
            WeatherParameter::Rainfall => self.rainfall = value,
            WeatherParameter::WindSpeed => self.wind_speed = value,
        }
    }
}

/// Weather conditions shown on the dashboard home card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherConditions {
    #[serde(flatten)]
    pub reading: EnvironmentalReading,
    pub location: String,
}

/// One of the four adjustable environmental inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherParameter {
    Temperature,
    Humidity,
    Rainfall,
    WindSpeed,
}

impl WeatherParameter {
    pub const ALL: [WeatherParameter; 4] = [
        WeatherParameter::Temperature,
        WeatherParameter::Humidity,
        WeatherParameter::Rainfall,
        WeatherParameter::WindSpeed,
    ];

    /// Element id of the slider control
    pub fn slider_id(&self) -> &'static str {
        match self {
            WeatherParameter::Temperature => "temperature",
            WeatherParameter::Humidity => "humidity",
            WeatherParameter::Rainfall => "rainfall",
            WeatherParameter::WindSpeed => "windspeed",
        }
    }

    /// Element id of the numeric label next to the slider
    pub fn label_id(&self) -> &'static str {
        match self {
            WeatherParameter::Temperature => "temp-value",
            WeatherParameter::Humidity => "humidity-value",
            WeatherParameter::Rainfall => "rainfall-value",
            WeatherParameter::WindSpeed => "wind-value",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            WeatherParameter::Temperature => "°C",
            WeatherParameter::Humidity => "%",
            WeatherParameter::Rainfall => "mm",
            WeatherParameter::WindSpeed => "km/h",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown slider: {0}")]
pub struct UnknownSlider(pub String);

impl FromStr for WeatherParameter {
    type Err = UnknownSlider;

    /// Parse from a slider element id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherParameter::ALL
            .into_iter()
            .find(|p| p.slider_id() == s)
            .ok_or_else(|| UnknownSlider(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_for_wind_speed() {
        let reading: EnvironmentalReading = serde_json::from_str(
            r#"{"temperature":30,"humidity":60,"rainfall":2,"wind_speed":10}"#,
        )
        .unwrap();
        assert_eq!(reading, EnvironmentalReading::new(30.0, 60.0, 2.0, 10.0));

        let json = serde_json::to_value(reading).unwrap();
        assert_eq!(json["wind_speed"], 10.0);
    }

    #[test]
    fn test_slider_id_parsing() {
        assert_eq!("windspeed".parse(), Ok(WeatherParameter::WindSpeed));
        assert_eq!("temperature".parse(), Ok(WeatherParameter::Temperature));
        assert!("wind_speed".parse::<WeatherParameter>().is_err());
    }

    #[test]
    fn test_set_then_get() {
        let mut reading = EnvironmentalReading::new(22.0, 70.0, 5.0, 5.0);
        reading.set(WeatherParameter::Rainfall, 12.5);
        assert_eq!(reading.get(WeatherParameter::Rainfall), 12.5);
        assert_eq!(reading.get(WeatherParameter::Humidity), 70.0);
    }
}
