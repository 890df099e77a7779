// Candidate records: onboarding, dashboard lookups, swipes and reviews.

pub mod handlers;
pub mod validation;
