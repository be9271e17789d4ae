//! Onboarding — a strictly linear five-step wizard over the birth profile.
//!
//! The wizard collects the profile fields in a fixed order, persisting every
//! edit through the `ProfileStore`, and hands off to the dashboard once all
//! required fields are in. Re-initializing with a complete profile bypasses
//! the wizard entirely.

pub mod flow;
pub mod routes;
pub mod state;

pub use flow::{Advance, Handoff, OnboardingFlow};
pub use routes::{OnboardingRouteState, OnboardingStatus, onboarding_routes};
pub use state::OnboardingStep;
