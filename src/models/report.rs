use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one Porutham factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorResult {
    pub name: String,
    pub description: String,
    pub passed: bool,
    pub points: u8,
    /// Flagged factors (Rajju) carry distinct severity for reviewers even
    /// though the numeric score treats all ten uniformly.
    pub critical: bool,
}

/// Verdict bands over the 10-point total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Good,
    Average,
    Poor,
}

/// Ten-factor star compatibility report, total 0-10
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeReport {
    pub factors: Vec<FactorResult>,
    pub total: u8,
    pub verdict: Verdict,
}

impl HoroscopeReport {
    /// True when any critical factor failed, regardless of the total.
    pub fn has_critical_failure(&self) -> bool {
        self.factors.iter().any(|f| f.critical && !f.passed)
    }
}

/// Reviewer-finalized report, attached to both participants
///
/// Immutable once written; re-finalizing the same request id overwrites
/// rather than duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedReport {
    pub request_id: Uuid,
    pub user_a: String,
    pub user_b: String,
    pub report: HoroscopeReport,
    pub remarks: String,
    pub verdict: Verdict,
    pub reviewed_by: String,
    pub reviewed_at: chrono::DateTime<chrono::Utc>,
}
