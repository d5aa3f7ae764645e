//! Top-level dashboard controller
//!
//! [`Dashboard`] owns the application state and the view surface. Every UI action
//! goes through it, so no component touches state it does not own.

use std::sync::Arc;

use chrono::Utc;
use shared::dataset::DashboardData;
use shared::input::collect_request;
use shared::models::{PredictionResponse, RiskAssessment, WeatherParameter};
use shared::render::{render_applications, render_news, render_recommendations, render_trend_chart};
use shared::types::{LoadingState, Modal, Section};
use shared::view::{self, ids, ViewSurface};

use crate::config::Config;
use crate::error::{DashboardError, DashboardResult};
use crate::external::PredictionService;
use crate::services::{
    accept_prediction, auth, schedule, AuthService, Dispatch, LoginForm, NotificationService,
    RequestSequencer, ScheduleForm, SignInMethod,
};

/// Application state owned by the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub data: DashboardData,
    pub loading: LoadingState,
    pub active_section: Option<Section>,
}

/// What happened to a completed prediction
#[derive(Debug)]
pub enum AssessmentOutcome {
    /// The prediction was written to the dashboard
    Applied(RiskAssessment),
    /// The prediction failed; the previous assessment is still shown
    Failed(DashboardError),
    /// A newer request was dispatched meanwhile; the result was dropped
    Stale { generation: u64 },
}

impl AssessmentOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, AssessmentOutcome::Applied(_))
    }
}

pub struct Dashboard<P, V> {
    predictor: Arc<P>,
    view: V,
    state: DashboardState,
    sequencer: RequestSequencer,
    notifications: NotificationService,
    auth: AuthService,
}

impl<P, V> Dashboard<P, V>
where
    P: PredictionService,
    V: ViewSurface,
{
    pub fn new(config: &Config, predictor: P, view: V) -> Self {
        Self {
            predictor: Arc::new(predictor),
            view,
            state: DashboardState::default(),
            sequencer: RequestSequencer::new(),
            notifications: NotificationService::new(config.notifications.display_ms),
            auth: AuthService::new(config.auth.simulated_delay_ms),
        }
    }

    /// Push the initial dataset into the view and show the home section
    pub fn initialize(&mut self) {
        view::sync_reading(&mut self.view, &self.state.data.weather.reading);
        view::sync_assessment(&mut self.view, &self.state.data.risk);
        view::sync_loading(&mut self.view, self.state.loading);

        self.view.set_chart(
            ids::RISK_CHART,
            &render_trend_chart(&self.state.data.monthly_trend),
        );
        self.view
            .mount(ids::NEWS_GRID, render_news(&self.state.data.news_alerts));
        self.view.mount(
            ids::RECOMMENDATIONS_LIST,
            render_recommendations(&self.state.data.ai_recommendations),
        );
        self.render_schedule();
        self.view.mount(
            ids::RECENT_TBODY,
            render_applications(&self.state.data.recent_applications),
        );

        self.view.set_hidden(Modal::Login.id(), true);
        self.view.set_hidden(Modal::AddSchedule.id(), true);
        self.show_section(Section::Home.id());

        tracing::info!("Dashboard initialized");
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Shared handle to the prediction service, for callers running requests themselves
    pub fn predictor(&self) -> Arc<P> {
        Arc::clone(&self.predictor)
    }

    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    // ========================================================================
    // Risk assessment
    // ========================================================================

    /// Collect the form inputs, issue a new generation and show the loading overlay
    pub fn begin_assessment(&mut self) -> Dispatch {
        let request = collect_request(&self.view);
        if self.sequencer.in_flight() {
            tracing::debug!(
                superseded = self.sequencer.latest(),
                "Prediction dispatched while another is in flight"
            );
        }
        let dispatch = self.sequencer.issue(request);
        self.set_loading(LoadingState::Loading);

        tracing::debug!(
            generation = dispatch.generation,
            country = %dispatch.request.country,
            crop = %dispatch.request.crop,
            "Risk assessment dispatched"
        );
        dispatch
    }

    /// Apply the result of a dispatched prediction.
    ///
    /// Results from any generation other than the latest, or a second result for
    /// the latest, are dropped untouched.
    pub fn complete_assessment(
        &mut self,
        generation: u64,
        result: DashboardResult<PredictionResponse>,
    ) -> AssessmentOutcome {
        if !self.sequencer.settle(generation) {
            tracing::warn!(
                generation,
                latest = self.sequencer.latest(),
                "Dropping stale prediction"
            );
            return AssessmentOutcome::Stale { generation };
        }

        self.set_loading(LoadingState::Idle);

        match result.and_then(accept_prediction) {
            Ok(accepted) => {
                if let Some(weather) = accepted.weather {
                    self.state.data.weather.reading = weather;
                    view::sync_reading(&mut self.view, &weather);
                }
                view::sync_assessment(&mut self.view, &accepted.assessment);
                self.state.data.risk = accepted.assessment.clone();

                tracing::info!(
                    generation,
                    risk = accepted.assessment.current_risk(),
                    level = accepted.assessment.risk_level(),
                    "Risk assessment updated"
                );
                AssessmentOutcome::Applied(accepted.assessment)
            }
            Err(e) => {
                tracing::error!(generation, code = e.code(), "Risk assessment failed: {}", e);
                self.notify_error(&e.user_message());
                AssessmentOutcome::Failed(e)
            }
        }
    }

    /// Run one full assessment cycle: collect, predict, synchronize
    pub async fn calculate_risk(&mut self) -> AssessmentOutcome {
        let dispatch = self.begin_assessment();
        let result = self.predictor.predict(&dispatch.request).await;
        self.complete_assessment(dispatch.generation, result)
    }

    // ========================================================================
    // Sliders
    // ========================================================================

    /// Slider moved: update the reading and its label. Unknown sliders are ignored.
    pub fn on_slider_input(&mut self, slider_id: &str, value: f64) -> bool {
        let parameter: WeatherParameter = match slider_id.parse() {
            Ok(parameter) => parameter,
            Err(e) => {
                tracing::debug!("Ignoring input: {}", e);
                return false;
            }
        };

        tracing::debug!(slider = slider_id, "Slider set to {}{}", value, parameter.unit());
        self.state.data.weather.reading.set(parameter, value);
        view::sync_parameter(&mut self.view, parameter, value);
        true
    }

    // ========================================================================
    // Navigation & modals
    // ========================================================================

    /// Follow a navigation link. `login` opens the sign-in dialog instead.
    pub fn navigate(&mut self, target: &str) {
        if target == "login" {
            self.open_modal(Modal::Login);
            return;
        }

        for section in Section::ALL {
            self.view
                .set_active(&section.nav_link_id(), section.id() == target);
        }
        self.show_section(target);
    }

    fn show_section(&mut self, target: &str) {
        for section in Section::ALL {
            self.view.set_active(section.id(), false);
        }

        self.state.active_section = target.parse::<Section>().ok();
        match self.state.active_section {
            Some(section) => {
                self.view.set_active(section.id(), true);
                tracing::debug!(section = section.id(), "Section shown");
            }
            None => tracing::debug!(section = target, "No such section"),
        }
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.view.set_hidden(modal.id(), false);
    }

    pub fn close_modal(&mut self, modal: Modal) {
        self.view.set_hidden(modal.id(), true);
    }

    /// A click on the modal backdrop (not its content) closes it
    pub fn on_backdrop_click(&mut self, modal: Modal) {
        self.close_modal(modal);
    }

    pub fn on_escape(&mut self) {
        self.close_modal(Modal::Login);
        self.close_modal(Modal::AddSchedule);
    }

    // ========================================================================
    // Pesticide schedule
    // ========================================================================

    pub fn read_schedule_form(&self) -> ScheduleForm {
        let field = |id: &str| self.view.value(id).unwrap_or_default();
        ScheduleForm {
            date: field(schedule::fields::DATE),
            target_pest: field(schedule::fields::PEST),
            treatment: field(schedule::fields::TREATMENT),
            quantity: field(schedule::fields::QUANTITY),
            area: field(schedule::fields::AREA),
        }
    }

    /// Append a planned application, refresh the table and close the dialog
    pub fn add_schedule(&mut self, form: ScheduleForm) -> DashboardResult<()> {
        let application = match form.into_application() {
            Ok(application) => application,
            Err(e) => {
                tracing::warn!("Schedule rejected: {}", e);
                self.notify_error(&e.user_message());
                return Err(e);
            }
        };

        tracing::info!(
            date = %application.date,
            pest = %application.target_pest,
            "Schedule added"
        );
        self.state.data.pesticide_schedule.push(application);
        self.render_schedule();

        self.close_modal(Modal::AddSchedule);
        for id in schedule::fields::ALL {
            self.view.set_value(id, "");
        }
        self.notify_success("Schedule added successfully!");
        Ok(())
    }

    fn render_schedule(&mut self) {
        self.view.mount(
            ids::SCHEDULE_TBODY,
            render_applications(&self.state.data.pesticide_schedule),
        );
    }

    // ========================================================================
    // Sign-in
    // ========================================================================

    pub fn read_login_form(&self) -> LoginForm {
        LoginForm {
            email: self.view.value(auth::fields::EMAIL).unwrap_or_default(),
            password: self.view.value(auth::fields::PASSWORD).unwrap_or_default(),
        }
    }

    /// Simulated password sign-in. Incomplete forms are ignored.
    pub async fn sign_in(&mut self, form: LoginForm) -> bool {
        if !form.is_complete() {
            return false;
        }
        self.simulated_sign_in(SignInMethod::Password).await;
        true
    }

    pub async fn sign_in_with_google(&mut self) {
        self.simulated_sign_in(SignInMethod::Google).await;
    }

    async fn simulated_sign_in(&mut self, method: SignInMethod) {
        self.set_loading(LoadingState::Loading);
        let message = self.auth.sign_in(method).await;
        // A prediction dispatched meanwhile still owns the overlay
        let after = if self.sequencer.in_flight() {
            LoadingState::Loading
        } else {
            LoadingState::Idle
        };
        self.set_loading(after);
        self.close_modal(Modal::Login);
        self.notify_success(message);
    }

    // ========================================================================
    // Loading & notifications
    // ========================================================================

    fn set_loading(&mut self, state: LoadingState) {
        self.state.loading = state;
        view::sync_loading(&mut self.view, state);
    }

    fn notify_success(&mut self, message: &str) {
        self.notifications.success(message);
        self.render_notifications();
    }

    fn notify_error(&mut self, message: &str) {
        self.notifications.error(message);
        self.render_notifications();
    }

    /// Drop expired toasts and redraw the rest
    pub fn refresh_notifications(&mut self) {
        let removed = self.notifications.prune_expired(Utc::now());
        if removed > 0 {
            self.render_notifications();
        }
    }

    fn render_notifications(&mut self) {
        let nodes = self.notifications.render(Utc::now());
        self.view.mount(ids::NOTIFICATIONS, nodes);
    }
}
