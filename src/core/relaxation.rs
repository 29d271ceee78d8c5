use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::matcher::score_pool;
use crate::models::{PreferenceSet, Profile, ScoredCandidate, ScoringWeights};

/// How far the constraints had to be widened to produce a result
///
/// Stages are cumulative: each one keeps every earlier relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelaxationStage {
    /// Religion, caste and education filters dropped
    DropCommunityFilters,
    /// Age band widened by 5 years, height band by 10 cm
    WidenBands,
    /// Diet, smoking, drinking and income filters dropped
    DropLifestyleFilters,
    /// Whole pool ranked by strict partial score; location and star
    /// preferences were never droppable, they only stop mattering here
    BestEffort,
}

impl RelaxationStage {
    /// Disclosure text for consuming surfaces.
    pub fn describe(&self) -> &'static str {
        match self {
            RelaxationStage::DropCommunityFilters => {
                "community preferences relaxed to find these profiles"
            }
            RelaxationStage::WidenBands => "age and height ranges widened to find these profiles",
            RelaxationStage::DropLifestyleFilters => {
                "most preferences relaxed to find these profiles"
            }
            RelaxationStage::BestEffort => "closest available profiles outside your preferences",
        }
    }
}

/// Produce a best-effort ranked list when the strict pass accepts nobody.
///
/// Constraints widen stage by stage until somebody clears the threshold;
/// the last resort ranks the whole pool by its strict partial score.
/// Always non-empty for a non-empty pool, and the caller must carry the
/// fallback flag through to the user.
pub fn fallback(
    prefs: &PreferenceSet,
    pool: &[Profile],
    weights: &ScoringWeights,
    threshold: f64,
    cap: usize,
) -> (Vec<ScoredCandidate>, RelaxationStage) {
    let stages = [
        RelaxationStage::DropCommunityFilters,
        RelaxationStage::WidenBands,
        RelaxationStage::DropLifestyleFilters,
    ];

    let mut relaxed = prefs.clone();
    for stage in stages {
        apply_stage(&mut relaxed, stage);
        let accepted: Vec<ScoredCandidate> = score_pool(pool, &relaxed, weights, threshold)
            .into_iter()
            .filter(|c| c.accepted)
            .take(cap)
            .collect();

        if !accepted.is_empty() {
            info!(
                viewer = %prefs.user_id,
                stage = ?stage,
                results = accepted.len(),
                "relaxation produced matches"
            );
            return (accepted, stage);
        }
    }

    // Nobody clears the threshold even fully relaxed on sets; rank by the
    // strict partial score so the ordering still reflects the viewer's
    // stated preferences.
    let mut scored = score_pool(pool, prefs, weights, threshold);
    scored.truncate(cap);

    info!(
        viewer = %prefs.user_id,
        results = scored.len(),
        "returning best-effort fallback list"
    );

    (scored, RelaxationStage::BestEffort)
}

fn apply_stage(prefs: &mut PreferenceSet, stage: RelaxationStage) {
    match stage {
        RelaxationStage::DropCommunityFilters => {
            prefs.religions.clear();
            prefs.castes.clear();
            prefs.education.clear();
        }
        RelaxationStage::WidenBands => {
            prefs.min_age = prefs.min_age.saturating_sub(5).max(18);
            prefs.max_age = prefs.max_age.saturating_add(5);
            prefs.min_height_cm = prefs.min_height_cm.saturating_sub(10);
            prefs.max_height_cm = prefs.max_height_cm.saturating_add(10);
        }
        RelaxationStage::DropLifestyleFilters => {
            prefs.diets.clear();
            prefs.smoking.clear();
            prefs.drinking.clear();
            prefs.min_monthly_income = None;
        }
        RelaxationStage::BestEffort => {}
    }
}
