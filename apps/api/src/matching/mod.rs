// Candidate filtering: render each profile, ask the upstream model for a
// true/false fit judgment against the HR message, keep the fits.

pub mod evaluator;
pub mod formatter;
pub mod handlers;
pub mod prompts;
