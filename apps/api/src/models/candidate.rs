use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome attached to a review. Only two values are accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swipe {
    Approve,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub comment: String,
    pub swipe: Swipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub college: String,
    pub degree: String,
    pub branch_of_study: String,
    pub year_of_graduation: i32,
    pub gpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousExperience {
    pub company: String,
    pub role: String,
    pub duration: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// A candidate record as stored and served by `/api/candidates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub field: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Years of experience.
    pub experience: f64,
    #[serde(default)]
    pub right_swipes: u64,
    #[serde(default)]
    pub left_swipes: u64,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub previous_experience: Vec<PreviousExperience>,
    pub created_at: DateTime<Utc>,
}

fn default_level() -> u32 {
    1
}

/// Which swipe counter an increment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeCounter {
    Right,
    Left,
}

// ────────────────────────────────────────────────────────────────────────────
// Request payloads
// ────────────────────────────────────────────────────────────────────────────

/// Raw body of `POST /api/candidates` and `PUT /api/candidates/:id`.
/// Every required field is optional here so that a missing field surfaces as a
/// validation error naming it.
/// Counters and reviews sent by the client are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub field: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<f64>,
    pub level: Option<i64>,
    pub education: Option<Vec<Education>>,
    pub previous_experience: Option<Vec<PreviousExperience>>,
}

/// A validated candidate ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub field: String,
    pub skills: Vec<String>,
    pub experience: f64,
    pub level: u32,
    pub education: Vec<Education>,
    pub previous_experience: Vec<PreviousExperience>,
}

/// A validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub field: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<f64>,
    pub level: Option<u32>,
    pub education: Option<Vec<Education>>,
    pub previous_experience: Option<Vec<PreviousExperience>>,
}

impl CandidatePatch {
    /// Applies the patch to an existing record.
    pub fn apply_to(&self, candidate: &mut Candidate) {
        if let Some(name) = &self.name {
            candidate.name = name.clone();
        }
        if let Some(email) = &self.email {
            candidate.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            candidate.phone = phone.clone();
        }
        if let Some(field) = &self.field {
            candidate.field = field.clone();
        }
        if let Some(skills) = &self.skills {
            candidate.skills = skills.clone();
        }
        if let Some(experience) = self.experience {
            candidate.experience = experience;
        }
        if let Some(level) = self.level {
            candidate.level = level;
        }
        if let Some(education) = &self.education {
            candidate.education = education.clone();
        }
        if let Some(previous) = &self.previous_experience {
            candidate.previous_experience = previous.clone();
        }
    }
}

/// Raw body of `POST /api/candidates/:id/reviews`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewInput {
    pub comment: Option<String>,
    pub swipe: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateListQuery {
    pub email: Option<String>,
}
