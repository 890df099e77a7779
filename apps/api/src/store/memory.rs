use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidatePatch, NewCandidate, Review, SwipeCounter};
use crate::models::hr::{HrAccount, NewHrAccount};
use crate::store::{candidate_not_found, CandidateStore, HrStore};

/// Vec-backed store; every operation holds the lock for its whole duration.
#[derive(Default)]
pub struct MemoryCandidateStore {
    candidates: Mutex<Vec<Candidate>>,
}

impl MemoryCandidateStore {
    pub async fn seed(&self, candidates: Vec<Candidate>) {
        self.candidates.lock().await.extend(candidates);
    }
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn create(&self, candidate: NewCandidate) -> Result<Candidate, AppError> {
        let record = Candidate {
            id: Uuid::new_v4(),
            name: candidate.name,
            email: candidate.email,
            phone: candidate.phone,
            field: candidate.field,
            skills: candidate.skills,
            experience: candidate.experience,
            right_swipes: 0,
            left_swipes: 0,
            reviews: Vec::new(),
            level: candidate.level,
            education: candidate.education,
            previous_experience: candidate.previous_experience,
            created_at: Utc::now(),
        };
        self.candidates.lock().await.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Candidate>, AppError> {
        Ok(self.candidates.lock().await.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Candidate>, AppError> {
        let email = email.to_lowercase();
        Ok(self
            .candidates
            .lock()
            .await
            .iter()
            .filter(|c| c.email.to_lowercase() == email)
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Candidate, AppError> {
        self.candidates
            .lock()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| candidate_not_found(id))
    }

    async fn update(&self, id: Uuid, patch: CandidatePatch) -> Result<Candidate, AppError> {
        let mut candidates = self.candidates.lock().await;
        let candidate = candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| candidate_not_found(id))?;
        patch.apply_to(candidate);
        Ok(candidate.clone())
    }

    async fn increment_swipe(
        &self,
        id: Uuid,
        counter: SwipeCounter,
    ) -> Result<Candidate, AppError> {
        let mut candidates = self.candidates.lock().await;
        let candidate = candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| candidate_not_found(id))?;
        match counter {
            SwipeCounter::Right => candidate.right_swipes += 1,
            SwipeCounter::Left => candidate.left_swipes += 1,
        }
        Ok(candidate.clone())
    }

    async fn append_review(&self, id: Uuid, review: Review) -> Result<Candidate, AppError> {
        let mut candidates = self.candidates.lock().await;
        let candidate = candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| candidate_not_found(id))?;
        candidate.reviews.push(review);
        Ok(candidate.clone())
    }
}

#[derive(Default)]
pub struct MemoryHrStore {
    accounts: Mutex<Vec<HrAccount>>,
}

#[async_trait]
impl HrStore for MemoryHrStore {
    async fn create(&self, account: NewHrAccount) -> Result<HrAccount, AppError> {
        let mut accounts = self.accounts.lock().await;
        let email = account.email.to_lowercase();
        if accounts.iter().any(|a| a.email.to_lowercase() == email) {
            return Err(AppError::Conflict(format!(
                "An HR account for {} already exists",
                account.email
            )));
        }
        let record = HrAccount {
            id: Uuid::new_v4(),
            name: account.name,
            email: account.email,
            company_name: account.company_name,
            points: 0,
            access_level: 1,
            subscribed: false,
            created_at: Utc::now(),
        };
        accounts.push(record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<HrAccount>, AppError> {
        let email = email.to_lowercase();
        Ok(self
            .accounts
            .lock()
            .await
            .iter()
            .find(|a| a.email.to_lowercase() == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_candidate(name: &str) -> NewCandidate {
        NewCandidate {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            field: "Backend".to_string(),
            skills: vec!["Rust".to_string()],
            experience: 3.0,
            level: 1,
            education: vec![],
            previous_experience: vec![],
        }
    }

    #[tokio::test]
    async fn test_concurrent_right_swipes_are_not_lost() {
        let store = Arc::new(MemoryCandidateStore::default());
        let created = store.create(new_candidate("Ravi")).await.unwrap();

        let a = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .increment_swipe(created.id, SwipeCounter::Right)
                    .await
            })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .increment_swipe(created.id, SwipeCounter::Right)
                    .await
            })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let stored = store.get(created.id).await.unwrap();
        assert_eq!(stored.right_swipes, 2);
        assert_eq!(stored.left_swipes, 0);
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let store = MemoryCandidateStore::default();
        for name in ["A", "B", "C"] {
            store.create(new_candidate(name)).await.unwrap();
        }
        let names: Vec<_> = store.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = MemoryCandidateStore::default();
        let err = store
            .increment_swipe(Uuid::new_v4(), SwipeCounter::Left)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_hr_email_conflicts_ignoring_case() {
        let store = MemoryHrStore::default();
        let account = NewHrAccount {
            name: "Meera".to_string(),
            email: "meera@acme.io".to_string(),
            company_name: "Acme".to_string(),
        };
        store.create(account.clone()).await.unwrap();
        let err = store
            .create(NewHrAccount {
                email: "MEERA@acme.io".to_string(),
                ..account
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
