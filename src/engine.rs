use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::astro::{HoroscopeComparator, Nakshatra};
use crate::config::Settings;
use crate::core::{MatchOutcome, Matcher};
use crate::error::EngineError;
use crate::models::{
    Actor, FinalizedReport, HoroscopeReport, PreferenceSet, Profile, Role, Verdict,
};
use crate::relationship::RelationshipEngine;
use crate::store::{CandidateDirectory, RelationshipStore};

/// Facade wiring the scorer, comparator and state machine to the
/// pluggable store and profile directory
///
/// Blocked pairs are removed from the candidate pool before scoring, not
/// after, so a blocked counterpart never influences ranking.
pub struct MatchmakingEngine<S: RelationshipStore, D: CandidateDirectory> {
    directory: Arc<D>,
    store: Arc<S>,
    relationships: RelationshipEngine<S>,
    matcher: Matcher,
    comparator: HoroscopeComparator,
}

impl<S: RelationshipStore, D: CandidateDirectory> MatchmakingEngine<S, D> {
    pub fn new(store: Arc<S>, directory: Arc<D>, settings: &Settings) -> Self {
        let matcher = Matcher::new(
            settings.scoring.weights.clone().into(),
            settings.matching.acceptance_threshold,
            settings.matching.fallback_limit,
        );
        let comparator = HoroscopeComparator::new(
            Default::default(),
            settings.astrology.good_min,
            settings.astrology.average_min,
        );

        Self {
            directory,
            relationships: RelationshipEngine::new(Arc::clone(&store)),
            store,
            matcher,
            comparator,
        }
    }

    pub fn with_defaults(store: Arc<S>, directory: Arc<D>) -> Self {
        Self::new(store, directory, &Settings::default())
    }

    /// Relationship state machine (interests, moderation, blocking).
    pub fn relationships(&self) -> &RelationshipEngine<S> {
        &self.relationships
    }

    /// Score the directory's candidates for one viewer.
    ///
    /// Malformed preference fields are logged and degrade per attribute
    /// rather than aborting the run; blocked counterparts (either
    /// direction) and the viewer themselves never enter the pool.
    pub async fn find_matches(
        &self,
        viewer: &Profile,
        prefs: &PreferenceSet,
        limit: usize,
    ) -> Result<MatchOutcome, EngineError> {
        if let Err(errors) = prefs.validate() {
            warn!(
                viewer = %viewer.user_id,
                %errors,
                "preference set failed validation, scoring degrades per attribute"
            );
        }

        let mut excluding = self.relationships.blocked_ids(&viewer.user_id).await?;
        excluding.insert(viewer.user_id.clone());

        let candidates = self.directory.list_candidates(&excluding).await?;
        let outcome = self.matcher.find_matches(prefs, candidates, limit);

        info!(
            viewer = %viewer.user_id,
            results = outcome.matches.len(),
            total = outcome.total_candidates,
            fallback = outcome.is_fallback,
            "match run complete"
        );

        Ok(outcome)
    }

    /// Compare two star placements directly.
    pub fn compare_stars(&self, a: Nakshatra, b: Nakshatra) -> HoroscopeReport {
        self.comparator.compare(a, b)
    }

    /// Compare two member profiles; both must carry a birth star.
    pub fn compare_profiles(
        &self,
        a: &Profile,
        b: &Profile,
    ) -> Result<HoroscopeReport, EngineError> {
        let star_a = a.star.ok_or_else(|| {
            EngineError::Validation(format!("profile {} has no birth star", a.user_id))
        })?;
        let star_b = b.star.ok_or_else(|| {
            EngineError::Validation(format!("profile {} has no birth star", b.user_id))
        })?;
        Ok(self.comparator.compare(star_a, star_b))
    }

    /// Privileged finalization of a computed report.
    ///
    /// Writes an immutable record under both participants, idempotent per
    /// request id: re-finalizing the same request overwrites the earlier
    /// record instead of duplicating it. The two writes are not atomic; a
    /// store failure between them leaves one participant without the
    /// report, and the caller recovers by re-finalizing the same request.
    pub async fn finalize_report(
        &self,
        reviewer: &Actor,
        request_id: Uuid,
        user_a: &str,
        user_b: &str,
        report: HoroscopeReport,
        remarks: String,
        verdict: Verdict,
    ) -> Result<FinalizedReport, EngineError> {
        if !matches!(reviewer.role, Role::Astrologer | Role::Moderator) {
            return Err(EngineError::Validation(
                "finalizing a horoscope report requires a reviewer role".to_string(),
            ));
        }

        let finalized = FinalizedReport {
            request_id,
            user_a: user_a.to_string(),
            user_b: user_b.to_string(),
            report,
            remarks,
            verdict,
            reviewed_by: reviewer.user_id.clone(),
            reviewed_at: chrono::Utc::now(),
        };

        self.store.put_report(user_a, finalized.clone()).await?;
        self.store.put_report(user_b, finalized.clone()).await?;

        info!(
            request_id = %request_id,
            user_a,
            user_b,
            reviewed_by = %reviewer.user_id,
            "horoscope report finalized"
        );

        Ok(finalized)
    }

    /// Fetch the finalized report attached to a member.
    pub async fn report_for(&self, user_id: &str) -> Result<FinalizedReport, EngineError> {
        self.store
            .get_report(user_id)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("no finalized report for {}", user_id)))
    }
}
