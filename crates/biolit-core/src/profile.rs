//! User profile domain model.

use serde::{Deserialize, Serialize};

/// Researcher profile captured at onboarding.
///
/// Created once, fully replaceable via the profile command, persisted
/// until cleared. Serialized in camelCase like the other persisted blobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub field_of_study: String,
    pub institution: String,
    /// Career stage, e.g. "MSc student" or "Postdoc".
    pub level: String,
    pub research_interests: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let profile = UserProfile {
            email: "a@b.edu".into(),
            field_of_study: "Biomaterials".into(),
            institution: "WUT".into(),
            level: "PhD candidate".into(),
            research_interests: "injectable hydrogels".into(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("fieldOfStudy"));
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
