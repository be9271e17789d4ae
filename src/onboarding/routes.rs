//! REST endpoints for the onboarding wizard.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::profile::BirthProfile;

use super::flow::{Advance, OnboardingFlow};
use super::state::OnboardingStep;

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub flow: Arc<OnboardingFlow>,
}

/// Onboarding status returned by the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingStatus {
    pub complete: bool,
    pub step: OnboardingStep,
    pub profile: BirthProfile,
}

/// Response to an advance request. `redirect` carries the dashboard
/// navigation signal on hand-off.
#[derive(Debug, Clone, Serialize)]
struct AdvanceResponse {
    step: OnboardingStep,
    advanced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<&'static str>,
}

/// GET /api/onboarding/status
async fn get_status(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    let profile = state.flow.profile().await;
    Json(OnboardingStatus {
        complete: profile.is_complete(),
        step: state.flow.current_step().await,
        profile,
    })
}

/// POST /api/onboarding/field
///
/// A single field edit: the patch is merged and persisted immediately, so
/// partially-filled data survives a reload at any point mid-flow.
async fn edit_field(
    State(state): State<OnboardingRouteState>,
    Json(patch): Json<BirthProfile>,
) -> impl IntoResponse {
    state.flow.edit(patch).await;
    let profile = state.flow.profile().await;
    Json(OnboardingStatus {
        complete: profile.is_complete(),
        step: state.flow.current_step().await,
        profile,
    })
}

/// POST /api/onboarding/advance
async fn advance(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    match state.flow.advance().await {
        Advance::Stayed(step) => Json(AdvanceResponse {
            step,
            advanced: false,
            redirect: None,
        }),
        Advance::Moved(step) => Json(AdvanceResponse {
            step,
            advanced: true,
            redirect: None,
        }),
        Advance::Dashboard => Json(AdvanceResponse {
            step: OnboardingStep::Complete,
            advanced: true,
            redirect: Some("/dashboard"),
        }),
    }
}

/// Build the onboarding REST routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/api/onboarding/status", get(get_status))
        .route("/api/onboarding/field", post(edit_field))
        .route("/api/onboarding/advance", post(advance))
        .with_state(state)
}
