use crate::models::{PreferenceSet, Profile};

/// Attribute predicates for the match score
///
/// Every predicate is a strict boolean: a candidate either satisfies the
/// preference or contributes zero to that attribute's weighted term. An
/// empty preference set means "any" and always matches; a candidate
/// missing an attribute the viewer constrains never matches (graceful
/// degradation, not an error).

#[inline]
pub fn age_in_range(profile: &Profile, prefs: &PreferenceSet) -> bool {
    profile.age >= prefs.min_age && profile.age <= prefs.max_age
}

#[inline]
pub fn height_in_range(profile: &Profile, prefs: &PreferenceSet) -> bool {
    profile.height_cm >= prefs.min_height_cm && profile.height_cm <= prefs.max_height_cm
}

#[inline]
fn in_set(value: &Option<String>, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match value {
        Some(v) => allowed.iter().any(|a| a.eq_ignore_ascii_case(v)),
        None => false,
    }
}

#[inline]
pub fn religion_matches(profile: &Profile, prefs: &PreferenceSet) -> bool {
    in_set(&profile.religion, &prefs.religions)
}

#[inline]
pub fn caste_matches(profile: &Profile, prefs: &PreferenceSet) -> bool {
    in_set(&profile.caste, &prefs.castes)
}

#[inline]
pub fn education_matches(profile: &Profile, prefs: &PreferenceSet) -> bool {
    in_set(&profile.education, &prefs.education)
}

#[inline]
pub fn location_matches(profile: &Profile, prefs: &PreferenceSet) -> bool {
    in_set(&profile.location, &prefs.locations)
}

/// Diet, smoking and drinking must all fall inside the allowed sets.
#[inline]
pub fn habits_match(profile: &Profile, prefs: &PreferenceSet) -> bool {
    in_set(&profile.diet, &prefs.diets)
        && in_set(&profile.smoking, &prefs.smoking)
        && in_set(&profile.drinking, &prefs.drinking)
}

#[inline]
pub fn income_meets_floor(profile: &Profile, prefs: &PreferenceSet) -> bool {
    match prefs.min_monthly_income {
        None => true,
        Some(floor) => profile.monthly_income.map(|i| i >= floor).unwrap_or(false),
    }
}

#[inline]
pub fn star_matches(profile: &Profile, prefs: &PreferenceSet) -> bool {
    if prefs.stars.is_empty() {
        return true;
    }
    match profile.star {
        Some(star) => prefs.stars.contains(&star),
        None => false,
    }
}

/// Hard gate ahead of scoring: inactive profiles are never candidates.
#[inline]
pub fn is_scoreable(profile: &Profile) -> bool {
    profile.is_active
}
