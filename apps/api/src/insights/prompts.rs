// Insight Generator LLM prompt templates.

pub const INSIGHT_SYSTEM: &str = "\
You are an AI career assistant reviewing a candidate's profile on a recruiting platform. \
Base every statement only on the profile provided. \
You MUST respond with a single JSON object only: no markdown fences, no commentary.";

const SUMMARY_INSTRUCTIONS: &str = r#"Summarize the candidate profile below for a recruiter skimming it in a few seconds.

RULES:
1. Write 3 to 6 short bullet points, each under 20 words.
2. Cover field of expertise, years of experience, strongest skills, education, and notable roles when present.
3. Mention reviewer feedback only if the profile contains reviews.

OUTPUT SCHEMA (return exactly this structure, nothing else):
{"summary": ["string", "string"]}"#;

const SUGGESTIONS_INSTRUCTIONS: &str = r#"Suggest concrete improvements the candidate could make to their profile to attract more approvals from recruiters.

RULES:
1. Write 3 to 6 suggestions, each a single actionable sentence.
2. Tailor each suggestion to gaps visible in this profile (missing sections, thin responsibilities, skills without evidence, reviewer concerns).
3. Do not suggest anything the profile already covers.

OUTPUT SCHEMA (return exactly this structure, nothing else):
{"suggestions": ["string", "string"]}"#;

pub fn build_summary_prompt(profile_json: &str) -> String {
    format!("{SUMMARY_INSTRUCTIONS}\n\nCANDIDATE PROFILE (JSON):\n{profile_json}")
}

pub fn build_suggestions_prompt(profile_json: &str) -> String {
    format!("{SUGGESTIONS_INSTRUCTIONS}\n\nCANDIDATE PROFILE (JSON):\n{profile_json}")
}
