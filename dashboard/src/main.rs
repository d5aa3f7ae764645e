//! FarmAssist - headless dashboard runner
//!
//! Loads the dashboard with its default dataset, fills the prediction form from
//! configuration and runs one risk assessment against the prediction service.

use farmassist_dashboard::external::PredictionClient;
use farmassist_dashboard::handlers::{handle_event, EventOutcome, UiEvent};
use farmassist_dashboard::{AssessmentOutcome, Config, Dashboard};
use shared::view::{ids, MemorySurface, ViewSurface};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farmassist=debug,farmassist_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting FarmAssist dashboard");
    tracing::info!("Environment: {}", config.environment);

    let client = PredictionClient::new(&config.prediction)?;
    tracing::info!("Prediction endpoint: {}", client.endpoint());

    let mut dashboard = Dashboard::new(&config, client, MemorySurface::new());
    dashboard.initialize();

    let view = dashboard.view_mut();
    view.set_value(ids::COUNTRY_MANUAL, &config.dashboard.default_country);
    view.set_value(ids::CROP_INPUT, &config.dashboard.default_crop);

    handle_event(
        &mut dashboard,
        UiEvent::Navigate {
            target: "pest-risk".to_string(),
        },
    )
    .await;

    match handle_event(&mut dashboard, UiEvent::CalculateRisk).await {
        EventOutcome::Assessment(AssessmentOutcome::Applied(assessment)) => {
            let reading = dashboard.state().data.weather.reading;
            tracing::info!(
                risk = assessment.current_risk(),
                level = assessment.risk_level(),
                temperature = reading.temperature,
                humidity = reading.humidity,
                rainfall = reading.rainfall,
                wind_speed = reading.wind_speed,
                "{}",
                assessment.recommendation()
            );
        }
        EventOutcome::Assessment(AssessmentOutcome::Failed(e)) => {
            tracing::error!("{}", e.user_message());
        }
        other => tracing::debug!(?other, "Assessment did not complete"),
    }

    Ok(())
}
