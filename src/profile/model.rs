//! Birth profile data model.

use serde::{Deserialize, Serialize};

/// Gender, as collected by the onboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// The user's birth details — the single persisted entity.
///
/// Every field is optional so the same type serves as the stored record and
/// as a merge patch. Date and time are kept as raw strings: field values are
/// never validated for semantic correctness, by design. `latitude` and
/// `longitude` are present in the schema but never populated by the wizard —
/// a reserved extension point for geocoding.
///
/// Serialized with camelCase keys under the `user-birth-info` storage key,
/// absent fields omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BirthProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO-8601 calendar date, e.g. "1990-05-01".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// 24-hour time, e.g. "14:30". Stored as the input widget produced it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_birth: Option<String>,
    /// Free-text location, e.g. "Pune, India".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

fn non_empty(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

impl BirthProfile {
    /// True iff all five required fields are present and non-empty.
    ///
    /// A profile is either fully absent, partially filled (mid-onboarding),
    /// or complete; this is the only predicate that distinguishes them.
    pub fn is_complete(&self) -> bool {
        non_empty(&self.name)
            && non_empty(&self.date_of_birth)
            && non_empty(&self.time_of_birth)
            && non_empty(&self.place_of_birth)
            && self.gender.is_some()
    }

    /// Shallow-merge `patch` over this profile: `Some` patch fields
    /// overwrite, `None` fields leave the current value untouched.
    pub fn merge(&mut self, patch: BirthProfile) {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.date_of_birth.is_some() {
            self.date_of_birth = patch.date_of_birth;
        }
        if patch.time_of_birth.is_some() {
            self.time_of_birth = patch.time_of_birth;
        }
        if patch.place_of_birth.is_some() {
            self.place_of_birth = patch.place_of_birth;
        }
        if patch.gender.is_some() {
            self.gender = patch.gender;
        }
        if patch.latitude.is_some() {
            self.latitude = patch.latitude;
        }
        if patch.longitude.is_some() {
            self.longitude = patch.longitude;
        }
    }

    /// Birth time in canonical `HH:MM` display form, if present.
    pub fn display_time(&self) -> Option<String> {
        self.time_of_birth.as_deref().map(normalize_time)
    }
}

/// Normalize a raw time input to canonical `HH:MM` for display.
///
/// Zero-pads the hour and appends `:00` minutes when absent: `"9"` becomes
/// `"09:00"`, `"9:3"` becomes `"09:03"`, `"14:30"` is unchanged. This is
/// string padding only — non-numeric input passes through untouched, and the
/// stored value stays whatever the field widget last produced.
pub fn normalize_time(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let (hours, minutes) = match raw.split_once(':') {
        Some((h, m)) => (h, m),
        None => (raw, "00"),
    };
    format!("{hours:0>2}:{minutes:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> BirthProfile {
        BirthProfile {
            name: Some("Asha".to_string()),
            date_of_birth: Some("1990-05-01".to_string()),
            time_of_birth: Some("14:30".to_string()),
            place_of_birth: Some("Pune, India".to_string()),
            gender: Some(Gender::Female),
            ..Default::default()
        }
    }

    #[test]
    fn empty_profile_is_not_complete() {
        assert!(!BirthProfile::default().is_complete());
    }

    #[test]
    fn complete_profile_is_complete() {
        assert!(complete_profile().is_complete());
    }

    #[test]
    fn any_single_missing_field_is_incomplete() {
        let mut p = complete_profile();
        p.name = None;
        assert!(!p.is_complete());

        let mut p = complete_profile();
        p.date_of_birth = None;
        assert!(!p.is_complete());

        let mut p = complete_profile();
        p.time_of_birth = None;
        assert!(!p.is_complete());

        let mut p = complete_profile();
        p.place_of_birth = None;
        assert!(!p.is_complete());

        let mut p = complete_profile();
        p.gender = None;
        assert!(!p.is_complete());
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut p = complete_profile();
        p.name = Some(String::new());
        assert!(!p.is_complete());
    }

    #[test]
    fn latitude_longitude_not_required_for_completeness() {
        let mut p = complete_profile();
        p.latitude = None;
        p.longitude = None;
        assert!(p.is_complete());
    }

    #[test]
    fn merge_overwrites_only_present_fields() {
        let mut base = BirthProfile {
            name: Some("Asha".to_string()),
            date_of_birth: Some("1990-05-01".to_string()),
            ..Default::default()
        };
        base.merge(BirthProfile {
            name: Some("Asha K".to_string()),
            place_of_birth: Some("Pune, India".to_string()),
            ..Default::default()
        });

        assert_eq!(base.name.as_deref(), Some("Asha K"));
        assert_eq!(base.date_of_birth.as_deref(), Some("1990-05-01"));
        assert_eq!(base.place_of_birth.as_deref(), Some("Pune, India"));
        assert!(base.time_of_birth.is_none());
    }

    #[test]
    fn disjoint_merges_compose() {
        let mut step_by_step = BirthProfile::default();
        step_by_step.merge(BirthProfile {
            name: Some("A".to_string()),
            ..Default::default()
        });
        step_by_step.merge(BirthProfile {
            date_of_birth: Some("2000-01-01".to_string()),
            ..Default::default()
        });

        let mut one_call = BirthProfile::default();
        one_call.merge(BirthProfile {
            name: Some("A".to_string()),
            date_of_birth: Some("2000-01-01".to_string()),
            ..Default::default()
        });

        assert_eq!(step_by_step, one_call);
    }

    #[test]
    fn malformed_date_is_accepted_as_is() {
        let mut p = complete_profile();
        p.date_of_birth = Some("not-a-date".to_string());
        assert!(p.is_complete());
        assert_eq!(p.date_of_birth.as_deref(), Some("not-a-date"));
    }

    #[test]
    fn serde_uses_camel_case_and_omits_absent_fields() {
        let p = BirthProfile {
            name: Some("Asha".to_string()),
            date_of_birth: Some("1990-05-01".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["dateOfBirth"], "1990-05-01");
        assert!(json.get("timeOfBirth").is_none());
        assert!(json.get("latitude").is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let p = complete_profile();
        let json = serde_json::to_string(&p).unwrap();
        let parsed: BirthProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn gender_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        let g: Gender = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(g, Gender::Other);
    }

    #[test]
    fn normalize_time_pads_bare_hour() {
        assert_eq!(normalize_time("9"), "09:00");
    }

    #[test]
    fn normalize_time_pads_partial_minutes() {
        assert_eq!(normalize_time("9:3"), "09:03");
    }

    #[test]
    fn normalize_time_keeps_full_time() {
        assert_eq!(normalize_time("14:30"), "14:30");
        assert_eq!(normalize_time("09:00"), "09:00");
    }

    #[test]
    fn normalize_time_empty_stays_empty() {
        assert_eq!(normalize_time(""), "");
    }

    #[test]
    fn normalize_time_does_not_validate() {
        // No semantic validation — padding only.
        assert_eq!(normalize_time("ab"), "ab:00");
    }

    #[test]
    fn display_time_normalizes() {
        let mut p = BirthProfile::default();
        p.time_of_birth = Some("9".to_string());
        assert_eq!(p.display_time().as_deref(), Some("09:00"));
        p.time_of_birth = None;
        assert!(p.display_time().is_none());
    }
}
