//! Dashboard REST surface — profile view, horoscope requests, and logout.
//!
//! The dashboard is a protected view: it reads the profile independently and
//! answers with a redirect signal back to onboarding whenever the profile is
//! incomplete. That is a routing rule, not an error.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::horoscope::HoroscopeService;
use crate::profile::ProfileStore;

/// Shared state for dashboard routes.
#[derive(Clone)]
pub struct DashboardRouteState {
    pub store: Arc<ProfileStore>,
    pub horoscope: Arc<HoroscopeService>,
}

#[derive(Debug, Deserialize)]
struct AskRequest {
    question: String,
}

#[derive(Debug, Serialize)]
struct ReadingResponse {
    reading: String,
}

fn redirect_to_onboarding() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"redirect": "/"})),
    )
}

/// GET /api/profile
///
/// The complete profile, or a redirect signal when onboarding isn't done.
async fn get_profile(State(state): State<DashboardRouteState>) -> impl IntoResponse {
    let profile = state.store.read().await;
    if !profile.is_complete() {
        return redirect_to_onboarding().into_response();
    }
    Json(profile).into_response()
}

/// POST /api/logout
///
/// Erases all persisted state and signals navigation back to the entry point.
async fn logout(State(state): State<DashboardRouteState>) -> impl IntoResponse {
    state.store.clear().await;
    Json(serde_json::json!({"redirect": "/"}))
}

/// POST /api/horoscope/daily
async fn daily_reading(State(state): State<DashboardRouteState>) -> impl IntoResponse {
    let profile = state.store.read().await;
    if !profile.is_complete() {
        return redirect_to_onboarding().into_response();
    }
    let reading = state.horoscope.daily_reading(&profile).await;
    Json(ReadingResponse { reading }).into_response()
}

/// POST /api/horoscope/ask
async fn ask(
    State(state): State<DashboardRouteState>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse {
    let profile = state.store.read().await;
    if !profile.is_complete() {
        return redirect_to_onboarding().into_response();
    }
    if request.question.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "question must not be empty"})),
        )
            .into_response();
    }
    let reading = state.horoscope.ask(&profile, request.question.trim()).await;
    Json(ReadingResponse { reading }).into_response()
}

/// Build the dashboard REST routes.
pub fn dashboard_routes(state: DashboardRouteState) -> Router {
    Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/logout", post(logout))
        .route("/api/horoscope/daily", post(daily_reading))
        .route("/api/horoscope/ask", post(ask))
        .with_state(state)
}
