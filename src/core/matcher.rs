use tracing::{debug, info};

use crate::core::filters::is_scoreable;
use crate::core::relaxation::{self, RelaxationStage};
use crate::core::scoring::calculate_match_score;
use crate::models::{PreferenceSet, Profile, ScoredCandidate, ScoringWeights};

/// Result of a matching run
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
    /// True when the list came from the relaxation fallback rather than
    /// the viewer's exact preferences. Consuming surfaces must disclose
    /// this; it changes the guarantee given to the user.
    pub is_fallback: bool,
    pub relaxation_stage: Option<RelaxationStage>,
}

/// Main matching orchestrator
///
/// Scores a pre-excluded candidate pool against the viewer's preferences,
/// ranks it, and falls back to progressively relaxed constraints when the
/// strict pass accepts nobody. Blocked-pair exclusion happens before the
/// pool reaches this type (see the facade).
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    acceptance_threshold: f64,
    fallback_limit: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, acceptance_threshold: f64, fallback_limit: usize) -> Self {
        Self {
            weights,
            acceptance_threshold,
            fallback_limit,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), 60.0, 6)
    }

    /// Score and rank a candidate pool for one viewer.
    ///
    /// Candidates with identical scores keep their input order (stable
    /// sort, no tie-breaking). A candidate is accepted when its score
    /// exceeds the acceptance threshold; if nobody clears it and the pool
    /// is non-empty, the relaxation fallback produces a best-effort list
    /// flagged as such.
    pub fn find_matches(
        &self,
        prefs: &PreferenceSet,
        candidates: Vec<Profile>,
        limit: usize,
    ) -> MatchOutcome {
        let total_candidates = candidates.len();
        let pool: Vec<Profile> = candidates.into_iter().filter(is_scoreable).collect();

        debug!(
            viewer = %prefs.user_id,
            total_candidates,
            scoreable = pool.len(),
            "scoring candidate pool"
        );

        let scored = score_pool(&pool, prefs, &self.weights, self.acceptance_threshold);
        let mut accepted: Vec<ScoredCandidate> =
            scored.into_iter().filter(|c| c.accepted).collect();

        if !accepted.is_empty() {
            accepted.truncate(limit);
            return MatchOutcome {
                matches: accepted,
                total_candidates,
                is_fallback: false,
                relaxation_stage: None,
            };
        }

        if pool.is_empty() {
            return MatchOutcome {
                matches: vec![],
                total_candidates,
                is_fallback: false,
                relaxation_stage: None,
            };
        }

        info!(
            viewer = %prefs.user_id,
            "no candidate cleared the strict threshold, relaxing constraints"
        );

        // The relaxed list honors the caller's limit too; the fallback cap
        // only tightens it further
        let (matches, stage) = relaxation::fallback(
            prefs,
            &pool,
            &self.weights,
            self.acceptance_threshold,
            limit.min(self.fallback_limit),
        );

        MatchOutcome {
            matches,
            total_candidates,
            is_fallback: true,
            relaxation_stage: Some(stage),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Score every profile in the pool and rank descending.
///
/// `Vec::sort_by` is stable, so equal scores preserve input order.
pub(crate) fn score_pool(
    pool: &[Profile],
    prefs: &PreferenceSet,
    weights: &ScoringWeights,
    threshold: f64,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = pool
        .iter()
        .map(|profile| {
            let (score, matched_attributes) = calculate_match_score(profile, prefs, weights);
            ScoredCandidate {
                user_id: profile.user_id.clone(),
                name: profile.name.clone(),
                age: profile.age,
                height_cm: profile.height_cm,
                religion: profile.religion.clone(),
                caste: profile.caste.clone(),
                location: profile.location.clone(),
                score,
                accepted: score > threshold,
                matched_attributes,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}
