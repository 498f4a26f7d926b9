use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::analysis::fit_scoring::RoleMatch;
use crate::analysis::profile::ResumeProfile;

/// One completed upload: the skills found and the ranked role matches.
/// The resume text itself is dropped once the profile is built.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub file_name: String,
    pub skills: BTreeSet<String>,
    pub matches: Vec<RoleMatch>,
}

impl Analysis {
    pub fn new(file_name: String, profile: ResumeProfile, matches: Vec<RoleMatch>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            file_name,
            skills: profile.skills,
            matches,
        }
    }

    pub fn role_match(&self, role_name: &str) -> Option<&RoleMatch> {
        self.matches.iter().find(|m| m.role_name == role_name)
    }
}

#[derive(Default)]
struct StoreInner {
    analyses: HashMap<Uuid, Arc<Analysis>>,
    order: VecDeque<Uuid>, // oldest first
}

/// In-memory analyses keyed by id, bounded by `capacity` (oldest evicted first).
/// Lives only as long as the process.
#[derive(Clone)]
pub struct AnalysisStore {
    inner: Arc<RwLock<StoreInner>>,
    capacity: usize,
}

impl AnalysisStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
            capacity: capacity.max(1),
        }
    }

    /// Stores a finished analysis and returns the shared handle.
    pub async fn insert(&self, analysis: Analysis) -> Arc<Analysis> {
        let analysis = Arc::new(analysis);
        let mut inner = self.inner.write().await;

        inner.order.push_back(analysis.id);
        inner.analyses.insert(analysis.id, Arc::clone(&analysis));

        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.analyses.remove(&oldest);
                tracing::debug!("Evicted analysis {oldest}");
            }
        }

        analysis
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Analysis>> {
        self.inner.read().await.analyses.get(&id).cloned()
    }

    /// Returns true if the analysis existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let removed = inner.analyses.remove(&id).is_some();
        if removed {
            inner.order.retain(|existing| *existing != id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.analyses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::skill_extractor::SkillExtractor;

    fn make_analysis(name: &str) -> Analysis {
        let extractor = SkillExtractor::new(&["SQL"]).unwrap();
        let profile = ResumeProfile::from_text("SQL".to_string(), &extractor);
        Analysis::new(name.to_string(), profile, vec![])
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = AnalysisStore::new(4);
        let stored = store.insert(make_analysis("a.txt")).await;
        let fetched = store.get(stored.id).await.unwrap();
        assert_eq!(fetched.file_name, "a.txt");
    }

    #[test]
    fn test_analysis_keeps_skills_not_text() {
        let extractor = SkillExtractor::new(&["SQL", "Python"]).unwrap();
        let text = format!("SQL and Python. {}", "filler ".repeat(1000));
        let profile = ResumeProfile::from_text(text, &extractor);
        let analysis = Analysis::new("cv.txt".to_string(), profile, vec![]);

        assert_eq!(analysis.skills.len(), 2);
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(!json.contains("filler"));
    }

    #[tokio::test]
    async fn test_analyses_are_independent() {
        let store = AnalysisStore::new(4);
        let first = store.insert(make_analysis("first.txt")).await;
        let second = store.insert(make_analysis("second.txt")).await;
        assert_ne!(first.id, second.id);
        assert_eq!(store.get(first.id).await.unwrap().file_name, "first.txt");
        assert_eq!(store.get(second.id).await.unwrap().file_name, "second.txt");
    }

    #[tokio::test]
    async fn test_oldest_evicted_over_capacity() {
        let store = AnalysisStore::new(2);
        let a = store.insert(make_analysis("a.txt")).await;
        let b = store.insert(make_analysis("b.txt")).await;
        let c = store.insert(make_analysis("c.txt")).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(a.id).await.is_none());
        assert!(store.get(b.id).await.is_some());
        assert!(store.get(c.id).await.is_some());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = AnalysisStore::new(2);
        let a = store.insert(make_analysis("a.txt")).await;
        assert!(store.remove(a.id).await);
        assert!(!store.remove(a.id).await);
        assert!(store.get(a.id).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = AnalysisStore::new(2);
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }
}
