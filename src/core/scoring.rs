use crate::core::filters;
use crate::models::{PreferenceSet, Profile, ScoringWeights};

/// Calculate a match score (0-100) for a candidate against a viewer's
/// preferences
///
/// The score is a weighted sum over independent boolean attribute terms,
/// normalized to 100:
///
/// ```text
/// score = 100 * sum(weight_i for each matching attribute) / sum(all weights)
/// ```
///
/// A non-matching or missing attribute contributes zero; the remaining
/// terms still count, so partial data degrades the score rather than
/// aborting the pass. Pure and deterministic: no randomness, no I/O.
///
/// Returns the score and the names of the attributes that matched.
pub fn calculate_match_score(
    profile: &Profile,
    prefs: &PreferenceSet,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let terms: [(&str, f64, bool); 9] = [
        ("age", weights.age, filters::age_in_range(profile, prefs)),
        (
            "height",
            weights.height,
            filters::height_in_range(profile, prefs),
        ),
        (
            "religion",
            weights.religion,
            filters::religion_matches(profile, prefs),
        ),
        (
            "caste",
            weights.caste,
            filters::caste_matches(profile, prefs),
        ),
        (
            "education",
            weights.education,
            filters::education_matches(profile, prefs),
        ),
        (
            "location",
            weights.location,
            filters::location_matches(profile, prefs),
        ),
        (
            "habits",
            weights.habits,
            filters::habits_match(profile, prefs),
        ),
        (
            "income",
            weights.income,
            filters::income_meets_floor(profile, prefs),
        ),
        ("star", weights.star, filters::star_matches(profile, prefs)),
    ];

    let total_weight = weights.total();
    if total_weight <= 0.0 {
        return (0.0, vec![]);
    }

    let mut matched_weight = 0.0;
    let mut matched = Vec::new();
    for (name, weight, passed) in terms {
        if passed {
            matched_weight += weight;
            matched.push(name.to_string());
        }
    }

    let score = (matched_weight / total_weight * 100.0).clamp(0.0, 100.0);
    (score, matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(age: u8) -> Profile {
        Profile {
            user_id: "c1".to_string(),
            name: "Candidate".to_string(),
            age,
            height_cm: 165,
            gender: "female".to_string(),
            marital_status: "never_married".to_string(),
            religion: Some("Hindu".to_string()),
            caste: Some("Nair".to_string()),
            education: Some("Masters".to_string()),
            occupation: None,
            monthly_income: Some(60_000),
            diet: Some("vegetarian".to_string()),
            smoking: Some("never".to_string()),
            drinking: Some("never".to_string()),
            location: Some("Chennai".to_string()),
            star: None,
            raasi: None,
            is_active: true,
            created_at: None,
        }
    }

    fn prefs() -> PreferenceSet {
        PreferenceSet {
            user_id: "v1".to_string(),
            min_age: 25,
            max_age: 30,
            min_height_cm: 155,
            max_height_cm: 175,
            religions: vec!["Hindu".to_string()],
            castes: vec!["Nair".to_string()],
            education: vec!["Masters".to_string()],
            locations: vec!["Chennai".to_string()],
            diets: vec!["vegetarian".to_string()],
            smoking: vec!["never".to_string()],
            drinking: vec!["never".to_string()],
            stars: vec![],
            min_monthly_income: Some(50_000),
        }
    }

    #[test]
    fn test_full_match_scores_100() {
        let (score, matched) = calculate_match_score(&candidate(27), &prefs(), &Default::default());
        assert!((score - 100.0).abs() < 1e-9);
        assert_eq!(matched.len(), 9);
    }

    #[test]
    fn test_age_outside_range_drops_only_age_term() {
        let weights = ScoringWeights::default();
        let (score, matched) = calculate_match_score(&candidate(42), &prefs(), &weights);

        // Age term contributes zero; everything else still counts
        let expected = (1.0 - weights.age / weights.total()) * 100.0;
        assert!((score - expected).abs() < 1e-9);
        assert!(!matched.contains(&"age".to_string()));
        assert!(matched.contains(&"religion".to_string()));
    }

    #[test]
    fn test_monotonic_per_attribute() {
        let weights = ScoringWeights::default();
        let inside = candidate(27);
        let mut outside = candidate(27);
        outside.location = Some("Mumbai".to_string());

        let (score_in, _) = calculate_match_score(&inside, &prefs(), &weights);
        let (score_out, _) = calculate_match_score(&outside, &prefs(), &weights);
        assert!(score_out < score_in);
    }

    #[test]
    fn test_deterministic() {
        let weights = ScoringWeights::default();
        let (first, _) = calculate_match_score(&candidate(27), &prefs(), &weights);
        let (second, _) = calculate_match_score(&candidate(27), &prefs(), &weights);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_attribute_contributes_zero() {
        let weights = ScoringWeights::default();
        let mut missing = candidate(27);
        missing.education = None;

        let (score, matched) = calculate_match_score(&missing, &prefs(), &weights);
        let (full_score, _) = calculate_match_score(&candidate(27), &prefs(), &weights);
        assert!(score < full_score);
        assert!(!matched.contains(&"education".to_string()));
    }
}
