use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::astro::{Nakshatra, Raasi};

/// A member profile: candidate or viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub age: u8,
    pub height_cm: u16,
    pub gender: String,
    pub marital_status: String,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub caste: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub monthly_income: Option<u32>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub star: Option<Nakshatra>,
    #[serde(default)]
    pub raasi: Option<Raasi>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_true() -> bool {
    true
}

/// A viewer's desired ranges and sets for partner attributes
///
/// Empty vectors mean "any". Ranges are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    pub user_id: String,
    #[validate(range(min = 18, max = 100))]
    pub min_age: u8,
    #[validate(range(min = 18, max = 100))]
    pub max_age: u8,
    #[validate(range(min = 100, max = 250))]
    pub min_height_cm: u16,
    #[validate(range(min = 100, max = 250))]
    pub max_height_cm: u16,
    #[serde(default)]
    pub religions: Vec<String>,
    #[serde(default)]
    pub castes: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub smoking: Vec<String>,
    #[serde(default)]
    pub drinking: Vec<String>,
    #[serde(default)]
    pub stars: Vec<Nakshatra>,
    #[serde(default)]
    pub min_monthly_income: Option<u32>,
}

/// One scored candidate in a match result list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub user_id: String,
    pub name: String,
    pub age: u8,
    pub height_cm: u16,
    pub religion: Option<String>,
    pub caste: Option<String>,
    pub location: Option<String>,
    pub score: f64,
    pub accepted: bool,
    pub matched_attributes: Vec<String>,
}

/// Weights for the attribute terms of the match score
///
/// Each attribute predicate either matches (contributes its full weight) or
/// does not (contributes zero); the weighted sum is normalized to 0-100.
/// Defaults are in descending importance.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub age: f64,
    pub height: f64,
    pub religion: f64,
    pub caste: f64,
    pub education: f64,
    pub location: f64,
    pub habits: f64,
    pub income: f64,
    pub star: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.age
            + self.height
            + self.religion
            + self.caste
            + self.education
            + self.location
            + self.habits
            + self.income
            + self.star
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            age: 0.20,
            height: 0.14,
            religion: 0.14,
            caste: 0.12,
            education: 0.11,
            location: 0.10,
            habits: 0.08,
            income: 0.06,
            star: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_camel_case_serialization() {
        let profile = Profile {
            user_id: "u1".to_string(),
            name: "Test".to_string(),
            age: 28,
            height_cm: 165,
            gender: "female".to_string(),
            marital_status: "never_married".to_string(),
            religion: Some("Hindu".to_string()),
            caste: None,
            education: None,
            occupation: None,
            monthly_income: None,
            diet: None,
            smoking: None,
            drinking: None,
            location: None,
            star: Some(Nakshatra::Rohini),
            raasi: None,
            is_active: true,
            created_at: None,
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["heightCm"], 165);
        assert_eq!(json["maritalStatus"], "never_married");
    }

    #[test]
    fn test_preference_validation_rejects_child_age() {
        let prefs = PreferenceSet {
            user_id: "u1".to_string(),
            min_age: 10,
            max_age: 30,
            min_height_cm: 150,
            max_height_cm: 180,
            religions: vec![],
            castes: vec![],
            education: vec![],
            locations: vec![],
            diets: vec![],
            smoking: vec![],
            drinking: vec![],
            stars: vec![],
            min_monthly_income: None,
        };

        assert!(Validate::validate(&prefs).is_err());
    }
}
