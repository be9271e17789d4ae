//! Onboarding state machine — tracks which step of the wizard the user is in.

use serde::{Deserialize, Serialize};

use crate::profile::BirthProfile;

/// The steps of the onboarding wizard.
///
/// Progresses linearly: Name → BirthDate → BirthPlace → Gender → Complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    Name,
    BirthDate,
    BirthPlace,
    Gender,
    Complete,
}

impl OnboardingStep {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: OnboardingStep) -> bool {
        use OnboardingStep::*;
        matches!(
            (self, target),
            (Name, BirthDate) | (BirthDate, BirthPlace) | (BirthPlace, Gender) | (Gender, Complete)
        )
    }

    /// Whether this step is terminal (the wizard is done).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Get the next step in the linear progression, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        use OnboardingStep::*;
        match self {
            Name => Some(BirthDate),
            BirthDate => Some(BirthPlace),
            BirthPlace => Some(Gender),
            Gender => Some(Complete),
            Complete => None,
        }
    }

    /// Whether the field(s) owned by this step are non-empty in `profile` —
    /// the gate for `advance()`.
    pub fn fields_satisfied(&self, profile: &BirthProfile) -> bool {
        fn filled(field: &Option<String>) -> bool {
            field.as_deref().is_some_and(|s| !s.is_empty())
        }
        match self {
            Self::Name => filled(&profile.name),
            Self::BirthDate => filled(&profile.date_of_birth) && filled(&profile.time_of_birth),
            Self::BirthPlace => filled(&profile.place_of_birth),
            Self::Gender => profile.gender.is_some(),
            // Terminal — there is nothing left to gate.
            Self::Complete => true,
        }
    }
}

impl Default for OnboardingStep {
    fn default() -> Self {
        Self::Name
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::BirthDate => "birth-date",
            Self::BirthPlace => "birth-place",
            Self::Gender => "gender",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}
