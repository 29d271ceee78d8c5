use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::EngineError;
use crate::models::{FinalizedReport, Profile, Relationship};
use crate::store::{CandidateDirectory, Direction, RelationshipStore};

/// In-memory store with real optimistic-concurrency semantics
///
/// Reference adapter for tests and a template for database-backed
/// implementations. Relationship records are keyed by the ordered
/// (from, to) pair; the reverse pair is a distinct record.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    relationships: RwLock<HashMap<(String, String), Relationship>>,
    reports: RwLock<HashMap<String, FinalizedReport>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RelationshipStore for InMemoryStore {
    async fn get(
        &self,
        from_id: &str,
        to_id: &str,
    ) -> Result<Option<Relationship>, EngineError> {
        let map = self.relationships.read().await;
        Ok(map
            .get(&(from_id.to_string(), to_id.to_string()))
            .cloned())
    }

    async fn put(&self, relationship: Relationship) -> Result<Relationship, EngineError> {
        let key = (
            relationship.from_user_id.clone(),
            relationship.to_user_id.clone(),
        );
        let mut map = self.relationships.write().await;

        let expected = map.get(&key).map(|r| r.version).unwrap_or(0);
        if relationship.version != expected {
            return Err(EngineError::Conflict(format!(
                "relationship {} -> {} changed since it was read (expected version {}, got {})",
                key.0, key.1, expected, relationship.version
            )));
        }

        let mut stored = relationship;
        stored.version += 1;
        debug!(
            from = %stored.from_user_id,
            to = %stored.to_user_id,
            status = ?stored.status,
            version = stored.version,
            "stored relationship"
        );
        map.insert(key, stored.clone());
        Ok(stored)
    }

    async fn list_for(
        &self,
        user_id: &str,
        direction: Direction,
    ) -> Result<Vec<Relationship>, EngineError> {
        let map = self.relationships.read().await;
        let mut out: Vec<Relationship> = map
            .values()
            .filter(|r| match direction {
                Direction::From => r.from_user_id == user_id,
                Direction::To => r.to_user_id == user_id,
                Direction::Either => r.from_user_id == user_id || r.to_user_id == user_id,
            })
            .cloned()
            .collect();
        out.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(out)
    }

    async fn get_report(&self, user_id: &str) -> Result<Option<FinalizedReport>, EngineError> {
        let map = self.reports.read().await;
        Ok(map.get(user_id).cloned())
    }

    async fn put_report(
        &self,
        user_id: &str,
        report: FinalizedReport,
    ) -> Result<(), EngineError> {
        let mut map = self.reports.write().await;
        map.insert(user_id.to_string(), report);
        Ok(())
    }
}

/// In-memory profile directory
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    profiles: RwLock<Vec<Profile>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn upsert(&self, profile: Profile) {
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| p.user_id == profile.user_id) {
            Some(existing) => *existing = profile,
            None => profiles.push(profile),
        }
    }
}

impl CandidateDirectory for InMemoryDirectory {
    async fn list_candidates(
        &self,
        excluding: &HashSet<String>,
    ) -> Result<Vec<Profile>, EngineError> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .iter()
            .filter(|p| !excluding.contains(&p.user_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RelationshipStatus;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryStore::new();
        let rel = Relationship::new("a", "b", RelationshipStatus::Pending, false);

        let stored = store.put(rel).await.unwrap();
        assert_eq!(stored.version, 1);

        let fetched = store.get("a", "b").await.unwrap().unwrap();
        assert_eq!(fetched.status, RelationshipStatus::Pending);
        assert!(store.get("b", "a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stale_write_conflicts() {
        let store = InMemoryStore::new();
        let rel = Relationship::new("a", "b", RelationshipStatus::Pending, false);
        let stored = store.put(rel).await.unwrap();

        // First writer wins
        let mut fresh = stored.clone();
        fresh.status = RelationshipStatus::Connected;
        store.put(fresh).await.unwrap();

        // Second writer still holds version 1 and must fail
        let mut stale = stored;
        stale.status = RelationshipStatus::Rejected;
        let err = store.put(stale).await.unwrap_err();
        assert!(err.is_conflict());

        let current = store.get("a", "b").await.unwrap().unwrap();
        assert_eq!(current.status, RelationshipStatus::Connected);
    }

    #[tokio::test]
    async fn test_create_with_nonzero_version_conflicts() {
        let store = InMemoryStore::new();
        let mut rel = Relationship::new("a", "b", RelationshipStatus::Pending, false);
        rel.version = 3;
        assert!(store.put(rel).await.unwrap_err().is_conflict());
    }

    #[tokio::test]
    async fn test_list_for_directions() {
        let store = InMemoryStore::new();
        store
            .put(Relationship::new("a", "b", RelationshipStatus::Pending, false))
            .await
            .unwrap();
        store
            .put(Relationship::new("c", "a", RelationshipStatus::Blocked, false))
            .await
            .unwrap();

        assert_eq!(store.list_for("a", Direction::From).await.unwrap().len(), 1);
        assert_eq!(store.list_for("a", Direction::To).await.unwrap().len(), 1);
        assert_eq!(store.list_for("a", Direction::Either).await.unwrap().len(), 2);
        assert!(store.list_for("z", Direction::Either).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_directory_excludes_ids() {
        let directory = InMemoryDirectory::new();
        directory
            .upsert(Profile {
                user_id: "a".to_string(),
                name: "A".to_string(),
                age: 28,
                height_cm: 170,
                gender: "male".to_string(),
                marital_status: "never_married".to_string(),
                religion: None,
                caste: None,
                education: None,
                occupation: None,
                monthly_income: None,
                diet: None,
                smoking: None,
                drinking: None,
                location: None,
                star: None,
                raasi: None,
                is_active: true,
                created_at: None,
            })
            .await;

        let mut excluding = HashSet::new();
        excluding.insert("a".to_string());
        assert!(directory.list_candidates(&excluding).await.unwrap().is_empty());
        assert_eq!(
            directory.list_candidates(&HashSet::new()).await.unwrap().len(),
            1
        );
    }
}
