//! Persistence seam for candidate and HR records.
//!
//! Handlers only see `Arc<dyn CandidateStore>` / `Arc<dyn HrStore>` from `AppState`.
//! The PostgreSQL implementation is used in production; tests run against the
//! in-memory one.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidatePatch, NewCandidate, Review, SwipeCounter};
use crate::models::hr::{HrAccount, NewHrAccount};

#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn create(&self, candidate: NewCandidate) -> Result<Candidate, AppError>;

    /// All candidates in creation order.
    async fn list(&self) -> Result<Vec<Candidate>, AppError>;

    /// Candidates whose email matches, ignoring case.
    async fn find_by_email(&self, email: &str) -> Result<Vec<Candidate>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Candidate, AppError>;

    async fn update(&self, id: Uuid, patch: CandidatePatch) -> Result<Candidate, AppError>;

    /// Adds one to the chosen counter in a single atomic step and returns the updated record.
    async fn increment_swipe(&self, id: Uuid, counter: SwipeCounter)
        -> Result<Candidate, AppError>;

    /// Appends to the end of `reviews`, keeping earlier entries.
    async fn append_review(&self, id: Uuid, review: Review) -> Result<Candidate, AppError>;
}

#[async_trait]
pub trait HrStore: Send + Sync {
    /// Fails with `AppError::Conflict` when the email is already registered.
    async fn create(&self, account: NewHrAccount) -> Result<HrAccount, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<HrAccount>, AppError>;
}

pub(crate) fn candidate_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Candidate {id} not found"))
}
