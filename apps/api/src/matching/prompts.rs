// Fit-judgment prompt. The reply is reduced to a single boolean by `is_fit_reply`.

use crate::llm_client::prompts::RECRUITER_ROLE;

pub const FIT_SYSTEM: &str = RECRUITER_ROLE;

const FIT_TASK: &str = "Your task is to analyze a candidate for a job position \
based on the provided information.";

const FIT_ANSWER_FORMAT: &str = "Based on the candidate profile and the HR message, \
return true if the candidate is a good fit for the job position, otherwise return false.\n\
Only return \"true\" or \"false\".";

/// Builds the per-candidate prompt. Both inputs are inserted verbatim in one pass,
/// so placeholder-like text inside either is never substituted.
pub fn build_fit_prompt(profile: &str, requirement: &str) -> String {
    format!(
        "{FIT_TASK}\n\nCandidate Profile:\n{profile}\n\nMessage from the HR Manager:\n{requirement}\n\n{FIT_ANSWER_FORMAT}"
    )
}
