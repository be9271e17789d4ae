//! OnboardingFlow — coordinates the wizard steps and incremental persistence.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::profile::{BirthProfile, ProfileStore};

use super::state::OnboardingStep;

/// Where the flow sends the user on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// Profile already complete — go straight to the dashboard.
    Dashboard,
    /// Start (or resume) the wizard at this step.
    Wizard(OnboardingStep),
}

/// Result of an `advance()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current step's fields are not filled in (or the wizard is already
    /// terminal) — advancing is disabled.
    Stayed(OnboardingStep),
    /// Moved to the next step.
    Moved(OnboardingStep),
    /// The wizard finished — hand off to the dashboard.
    Dashboard,
}

/// The onboarding wizard: a strictly linear flow over the five steps,
/// persisting every field edit through the `ProfileStore`.
///
/// All state changes happen in response to discrete user actions, one at a
/// time; the locks only exist so the flow can be shared with the route layer.
pub struct OnboardingFlow {
    store: Arc<ProfileStore>,
    step: RwLock<OnboardingStep>,
    profile: RwLock<BirthProfile>,
}

impl OnboardingFlow {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self {
            store,
            step: RwLock::new(OnboardingStep::Name),
            profile: RwLock::new(BirthProfile::default()),
        }
    }

    /// Entry behavior: load the stored profile; if it is already complete,
    /// hand off to the dashboard without entering any step. Otherwise start
    /// at `Name` with any partially-filled fields pre-loaded, so data entered
    /// before a reload survives.
    pub async fn init(&self) -> Handoff {
        let stored = self.store.read().await;
        if stored.is_complete() {
            *self.profile.write().await = stored;
            return Handoff::Dashboard;
        }

        *self.profile.write().await = stored;
        let mut step = self.step.write().await;
        *step = OnboardingStep::Name;
        Handoff::Wizard(*step)
    }

    /// Apply a field edit: overlay the in-memory copy and immediately persist
    /// through the store (no batching — every edit is durable on its own).
    pub async fn edit(&self, patch: BirthProfile) {
        self.profile.write().await.merge(patch.clone());
        self.store.merge(patch).await;
    }

    /// Try to move to the next step.
    ///
    /// A no-op unless the field(s) owned by the current step are non-empty.
    /// The transition out of `Gender` performs a final merge of the
    /// accumulated profile and signals the dashboard hand-off — the flow's
    /// sole hand-off point.
    pub async fn advance(&self) -> Advance {
        let mut step = self.step.write().await;
        let profile = self.profile.read().await;

        if !step.fields_satisfied(&profile) {
            return Advance::Stayed(*step);
        }
        let Some(next) = step.next() else {
            return Advance::Stayed(*step);
        };

        *step = next;
        if next.is_terminal() {
            self.store.merge(profile.clone()).await;
            return Advance::Dashboard;
        }
        Advance::Moved(next)
    }

    /// The step the wizard is currently on.
    pub async fn current_step(&self) -> OnboardingStep {
        *self.step.read().await
    }

    /// A snapshot of the in-memory working copy.
    pub async fn profile(&self) -> BirthProfile {
        self.profile.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Gender, MemoryStorage};

    fn flow_with_memory_store() -> (Arc<ProfileStore>, OnboardingFlow) {
        let store = Arc::new(ProfileStore::new(Arc::new(MemoryStorage::new())));
        let flow = OnboardingFlow::new(Arc::clone(&store));
        (store, flow)
    }

    fn named(name: &str) -> BirthProfile {
        BirthProfile {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn empty_storage_starts_at_name() {
        let (_, flow) = flow_with_memory_store();
        assert_eq!(flow.init().await, Handoff::Wizard(OnboardingStep::Name));
        assert_eq!(flow.current_step().await, OnboardingStep::Name);
    }

    #[tokio::test]
    async fn complete_profile_hands_off_without_entering_wizard() {
        let (store, flow) = flow_with_memory_store();
        store
            .merge(BirthProfile {
                name: Some("Asha".to_string()),
                date_of_birth: Some("1990-05-01".to_string()),
                time_of_birth: Some("14:30".to_string()),
                place_of_birth: Some("Pune, India".to_string()),
                gender: Some(Gender::Female),
                ..Default::default()
            })
            .await;

        assert_eq!(flow.init().await, Handoff::Dashboard);
    }

    #[tokio::test]
    async fn advance_is_noop_without_required_fields() {
        let (_, flow) = flow_with_memory_store();
        flow.init().await;

        assert_eq!(flow.advance().await, Advance::Stayed(OnboardingStep::Name));
        assert_eq!(flow.current_step().await, OnboardingStep::Name);
    }

    #[tokio::test]
    async fn advance_moves_once_fields_are_filled() {
        let (_, flow) = flow_with_memory_store();
        flow.init().await;

        flow.edit(named("Asha")).await;
        assert_eq!(flow.advance().await, Advance::Moved(OnboardingStep::BirthDate));
    }

    #[tokio::test]
    async fn birth_date_step_needs_date_and_time() {
        let (_, flow) = flow_with_memory_store();
        flow.init().await;
        flow.edit(named("Asha")).await;
        flow.advance().await;

        flow.edit(BirthProfile {
            date_of_birth: Some("1990-05-01".to_string()),
            ..Default::default()
        })
        .await;
        assert_eq!(
            flow.advance().await,
            Advance::Stayed(OnboardingStep::BirthDate)
        );

        flow.edit(BirthProfile {
            time_of_birth: Some("14:30".to_string()),
            ..Default::default()
        })
        .await;
        assert_eq!(
            flow.advance().await,
            Advance::Moved(OnboardingStep::BirthPlace)
        );
    }

    #[tokio::test]
    async fn full_walkthrough_ends_in_dashboard_handoff() {
        let (store, flow) = flow_with_memory_store();
        flow.init().await;

        flow.edit(named("Asha")).await;
        assert_eq!(flow.advance().await, Advance::Moved(OnboardingStep::BirthDate));

        flow.edit(BirthProfile {
            date_of_birth: Some("1990-05-01".to_string()),
            time_of_birth: Some("14:30".to_string()),
            ..Default::default()
        })
        .await;
        assert_eq!(flow.advance().await, Advance::Moved(OnboardingStep::BirthPlace));

        flow.edit(BirthProfile {
            place_of_birth: Some("Pune, India".to_string()),
            ..Default::default()
        })
        .await;
        assert_eq!(flow.advance().await, Advance::Moved(OnboardingStep::Gender));

        flow.edit(BirthProfile {
            gender: Some(Gender::Female),
            ..Default::default()
        })
        .await;
        assert_eq!(flow.advance().await, Advance::Dashboard);
        assert_eq!(flow.current_step().await, OnboardingStep::Complete);

        // The final merge left a complete persisted profile behind.
        assert!(store.read().await.is_complete());
    }

    #[tokio::test]
    async fn advance_from_terminal_stays_put() {
        let (_, flow) = flow_with_memory_store();
        flow.init().await;
        flow.edit(BirthProfile {
            name: Some("Asha".to_string()),
            date_of_birth: Some("1990-05-01".to_string()),
            time_of_birth: Some("14:30".to_string()),
            place_of_birth: Some("Pune, India".to_string()),
            gender: Some(Gender::Female),
            ..Default::default()
        })
        .await;
        for _ in 0..4 {
            flow.advance().await;
        }
        assert_eq!(flow.current_step().await, OnboardingStep::Complete);
        assert_eq!(
            flow.advance().await,
            Advance::Stayed(OnboardingStep::Complete)
        );
    }

    #[tokio::test]
    async fn each_edit_is_persisted_immediately() {
        let (store, flow) = flow_with_memory_store();
        flow.init().await;

        flow.edit(named("Asha")).await;
        assert_eq!(store.read().await.name.as_deref(), Some("Asha"));

        flow.edit(BirthProfile {
            place_of_birth: Some("Pune, India".to_string()),
            ..Default::default()
        })
        .await;
        let persisted = store.read().await;
        assert_eq!(persisted.name.as_deref(), Some("Asha"));
        assert_eq!(persisted.place_of_birth.as_deref(), Some("Pune, India"));
    }

    #[tokio::test]
    async fn partial_profile_resumes_at_name_with_fields_preloaded() {
        let (store, flow) = flow_with_memory_store();
        store.merge(named("Asha")).await;

        assert_eq!(flow.init().await, Handoff::Wizard(OnboardingStep::Name));
        assert_eq!(flow.profile().await.name.as_deref(), Some("Asha"));
        // The pre-loaded name lets the first advance pass straight away.
        assert_eq!(flow.advance().await, Advance::Moved(OnboardingStep::BirthDate));
    }
}
