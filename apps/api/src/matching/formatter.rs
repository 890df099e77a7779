//! Renders a candidate as the text block embedded in fit prompts.
//!
//! Pure and total: identical input yields identical output, and empty lists
//! render as empty sections. The text is write-only; nothing parses it back.

use crate::models::candidate::{Candidate, Education, PreviousExperience, Review};

pub fn format_profile(candidate: &Candidate) -> String {
    let mut text = String::from("**Candidate Profile Summary**\n\n");

    text.push_str(&format!("- **Field of Expertise**: {}\n", candidate.field));
    text.push_str(&format!(
        "- **Years of Experience**: {} years\n",
        candidate.experience
    ));
    text.push_str(&format!(
        "**Technical & Soft Skills**:\n{}\n\n",
        candidate.skills.join(", ")
    ));

    text.push_str("**Swipe Metrics**:\n");
    text.push_str(&format!(
        "- Positive Matches (Right Swipes): {}\n",
        candidate.right_swipes
    ));
    text.push_str(&format!(
        "- Rejections (Left Swipes): {}\n\n",
        candidate.left_swipes
    ));

    text.push_str(&format!("**Reviews**:\n{}\n\n", format_reviews(&candidate.reviews)));
    text.push_str(&format!(
        "**Education Background**:\n{}\n\n",
        format_education(&candidate.education)
    ));
    text.push_str(&format!(
        "**Professional Experience**:\n{}",
        format_experience(&candidate.previous_experience)
    ));

    text
}

fn format_reviews(reviews: &[Review]) -> String {
    reviews
        .iter()
        .map(|r| format!("- \"{}\"", r.comment))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_education(education: &[Education]) -> String {
    education
        .iter()
        .map(|e| {
            format!(
                "- Completed a {} in {} from {}\n  Graduated in {} with a GPA of {}",
                e.degree, e.branch_of_study, e.college, e.year_of_graduation, e.gpa
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_experience(experience: &[PreviousExperience]) -> String {
    experience
        .iter()
        .enumerate()
        .map(|(index, exp)| {
            let mut entry = format!(
                "{}. Company: {}\n   Role: {}\n   Duration: {}\n   Key Responsibilities:",
                index + 1,
                exp.company,
                exp.role,
                exp.duration
            );
            for responsibility in &exp.responsibilities {
                entry.push_str(&format!("\n   - {responsibility}"));
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n")
}
