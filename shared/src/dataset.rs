//! Static dataset the dashboard starts from

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{
    ApplicationStatus, EnvironmentalReading, NewsAlert, NewsCategory, PesticideApplication,
    RiskAssessment, TrendPoint, WeatherConditions,
};

/// Everything the dashboard displays before any user interaction
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub weather: WeatherConditions,
    pub risk: RiskAssessment,
    pub monthly_trend: Vec<TrendPoint>,
    pub news_alerts: Vec<NewsAlert>,
    pub pesticide_schedule: Vec<PesticideApplication>,
    pub recent_applications: Vec<PesticideApplication>,
    pub ai_recommendations: Vec<String>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn application(
    date: NaiveDate,
    target_pest: &str,
    treatment: &str,
    quantity: &str,
    area: &str,
    status: ApplicationStatus,
) -> PesticideApplication {
    PesticideApplication {
        date,
        target_pest: target_pest.to_string(),
        treatment: treatment.to_string(),
        quantity: quantity.to_string(),
        area: area.to_string(),
        status,
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        let monthly_trend = [
            ("Jan", 0.2),
            ("Feb", 0.25),
            ("Mar", 0.4),
            ("Apr", 0.6),
            ("May", 0.8),
            ("Jun", 0.9),
            ("Jul", 0.7),
            ("Aug", 0.6),
            ("Sep", 0.5),
            ("Oct", 0.3),
            ("Nov", 0.2),
            ("Dec", 0.15),
        ]
        .into_iter()
        .map(|(month, risk)| TrendPoint::new(month, risk))
        .collect();

        Self {
            weather: WeatherConditions {
                reading: EnvironmentalReading::new(22.0, 70.0, 5.0, 5.0),
                location: "Agricultural Region".to_string(),
            },
            risk: RiskAssessment::from_score(0.73),
            monthly_trend,
            news_alerts: vec![
                NewsAlert {
                    id: 1,
                    title: "Unseasonal Rains Forecast for Next Week".to_string(),
                    date: date(2024, 1, 15),
                    priority: "High Priority".to_string(),
                    content: "Weather services predict unexpected rainfall patterns that may affect crop protection schedules. Farmers are advised to adjust their pesticide applications accordingly.".to_string(),
                    category: NewsCategory::Weather,
                },
                NewsAlert {
                    id: 2,
                    title: "Aphid Outbreak Spotted in Nearby County".to_string(),
                    date: date(2024, 1, 12),
                    priority: "High Priority".to_string(),
                    content: "Local agricultural extension office reports significant aphid activity in neighboring regions.".to_string(),
                    category: NewsCategory::Pest,
                },
            ],
            pesticide_schedule: vec![
                application(
                    date(2024, 1, 16),
                    "Aphids",
                    "Neem Oil",
                    "5ml/L",
                    "Field A (2.5 ha)",
                    ApplicationStatus::Planned,
                ),
                application(
                    date(2024, 1, 22),
                    "Thrips",
                    "Insecticidal Soap",
                    "15ml/L",
                    "Greenhouse 1",
                    ApplicationStatus::Planned,
                ),
                application(
                    date(2024, 1, 25),
                    "Spider Mites",
                    "Predatory Mites",
                    "2000 units",
                    "Field B (1.8 ha)",
                    ApplicationStatus::Planned,
                ),
            ],
            recent_applications: vec![application(
                date(2024, 1, 10),
                "Whiteflies",
                "Yellow Sticky Traps",
                "20 traps",
                "Greenhouse 2",
                ApplicationStatus::Completed,
            )],
            ai_recommendations: vec![
                "For upcoming aphid risk (85% probability), consider applying Neem Oil at 5ml/L concentration within the next 48 hours.".to_string(),
                "Weather conditions favor thrips development. Deploy blue sticky traps as monitoring tools in addition to scheduled treatments.".to_string(),
                "Beneficial insect populations are increasing. Consider reducing chemical applications and focusing on biological control methods.".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskBand;

    #[test]
    fn test_default_risk_is_consistent() {
        let data = DashboardData::default();
        assert_eq!(data.risk.current_risk(), 0.73);
        assert_eq!(data.risk.band(), RiskBand::High);
    }

    #[test]
    fn test_trend_covers_a_year() {
        let data = DashboardData::default();
        assert_eq!(data.monthly_trend.len(), 12);
        assert_eq!(data.monthly_trend[0].month, "Jan");
        assert_eq!(data.monthly_trend[11].risk, 0.15);
    }

    #[test]
    fn test_schedule_and_history() {
        let data = DashboardData::default();
        assert_eq!(data.pesticide_schedule.len(), 3);
        assert!(data
            .pesticide_schedule
            .iter()
            .all(|a| a.status == ApplicationStatus::Planned));
        assert_eq!(data.recent_applications[0].status, ApplicationStatus::Completed);
    }
}
