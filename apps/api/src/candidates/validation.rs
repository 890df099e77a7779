//! Field rules for candidate create/update and review payloads.

use serde_json::Value;

use crate::errors::AppError;
use crate::models::candidate::{
    CandidateInput, CandidatePatch, Education, NewCandidate, PreviousExperience, Review,
    ReviewInput, Swipe,
};

/// Fields that must be present on create and may never be cleared by an update.
pub const REQUIRED_FIELDS: [&str; 6] = ["name", "email", "phone", "field", "skills", "experience"];

pub fn validate_new_candidate(input: CandidateInput) -> Result<NewCandidate, AppError> {
    Ok(NewCandidate {
        name: required_text("name", input.name)?,
        email: required_text("email", input.email)?,
        phone: required_text("phone", input.phone)?,
        field: required_text("field", input.field)?,
        skills: validate_skills(input.skills.ok_or_else(|| missing("skills"))?)?,
        experience: validate_experience(input.experience.ok_or_else(|| missing("experience"))?)?,
        level: input.level.map(validate_level).transpose()?.unwrap_or(1),
        education: validate_education(input.education.unwrap_or_default())?,
        previous_experience: validate_previous_experience(
            input.previous_experience.unwrap_or_default(),
        )?,
    })
}

/// Validates a partial update. `raw` is the undecoded body, used to tell an
/// explicit `null` (rejected for required fields) from an absent key.
pub fn validate_patch(raw: &Value, input: CandidateInput) -> Result<CandidatePatch, AppError> {
    let Some(object) = raw.as_object() else {
        return Err(AppError::Validation(
            "Request body must be a JSON object".to_string(),
        ));
    };
    if let Some(field) = REQUIRED_FIELDS
        .iter()
        .find(|field| matches!(object.get(**field), Some(Value::Null)))
    {
        return Err(missing(field));
    }

    Ok(CandidatePatch {
        name: input.name.map(|v| required_text("name", Some(v))).transpose()?,
        email: input.email.map(|v| required_text("email", Some(v))).transpose()?,
        phone: input.phone.map(|v| required_text("phone", Some(v))).transpose()?,
        field: input.field.map(|v| required_text("field", Some(v))).transpose()?,
        skills: input.skills.map(validate_skills).transpose()?,
        experience: input.experience.map(validate_experience).transpose()?,
        level: input.level.map(validate_level).transpose()?,
        education: input.education.map(validate_education).transpose()?,
        previous_experience: input
            .previous_experience
            .map(validate_previous_experience)
            .transpose()?,
    })
}

pub fn validate_review(input: ReviewInput) -> Result<Review, AppError> {
    let comment = input
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Validation("Review comment is required".to_string()))?;

    let swipe = match input.swipe.as_deref().map(str::trim) {
        Some("approve") => Swipe::Approve,
        Some("reject") => Swipe::Reject,
        Some(other) => {
            return Err(AppError::Validation(format!(
                "swipe must be 'approve' or 'reject', got '{other}'"
            )))
        }
        None => return Err(missing("swipe")),
    };

    Ok(Review { comment, swipe })
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("{field} is required"))
}

fn required_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing(field))
}

fn validate_skills(skills: Vec<String>) -> Result<Vec<String>, AppError> {
    if skills.is_empty() {
        return Err(AppError::Validation(
            "skills must list at least one skill".to_string(),
        ));
    }
    skills
        .into_iter()
        .map(|s| required_text("skills entry", Some(s)))
        .collect()
}

fn validate_experience(years: f64) -> Result<f64, AppError> {
    if !years.is_finite() || years < 0.0 {
        return Err(AppError::Validation(
            "experience must be a non-negative number of years".to_string(),
        ));
    }
    Ok(years)
}

fn validate_level(level: i64) -> Result<u32, AppError> {
    i32::try_from(level)
        .ok()
        .filter(|l| *l >= 1)
        .map(|l| l as u32)
        .ok_or_else(|| AppError::Validation("level must be a positive integer".to_string()))
}

fn validate_education(entries: Vec<Education>) -> Result<Vec<Education>, AppError> {
    entries
        .into_iter()
        .map(|entry| {
            if !entry.gpa.is_finite() || entry.gpa < 0.0 {
                return Err(AppError::Validation(
                    "education gpa must be a non-negative number".to_string(),
                ));
            }
            if entry.year_of_graduation <= 0 {
                return Err(AppError::Validation(
                    "education yearOfGraduation must be a positive year".to_string(),
                ));
            }
            Ok(Education {
                college: required_text("education college", Some(entry.college))?,
                degree: required_text("education degree", Some(entry.degree))?,
                branch_of_study: required_text(
                    "education branchOfStudy",
                    Some(entry.branch_of_study),
                )?,
                ..entry
            })
        })
        .collect()
}

fn validate_previous_experience(
    entries: Vec<PreviousExperience>,
) -> Result<Vec<PreviousExperience>, AppError> {
    entries
        .into_iter()
        .map(|entry| {
            Ok(PreviousExperience {
                company: required_text("previousExperience company", Some(entry.company))?,
                role: required_text("previousExperience role", Some(entry.role))?,
                duration: required_text("previousExperience duration", Some(entry.duration))?,
                // Onboarding forms submit blank rows for unused responsibility inputs.
                responsibilities: entry
                    .responsibilities
                    .into_iter()
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty())
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_input() -> CandidateInput {
        CandidateInput {
            name: Some("Asha Rao".to_string()),
            email: Some("asha@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            field: Some("Backend".to_string()),
            skills: Some(vec!["Rust".to_string(), " SQL ".to_string()]),
            experience: Some(4.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_candidate_defaults_level_and_lists() {
        let candidate = validate_new_candidate(valid_input()).unwrap();
        assert_eq!(candidate.level, 1);
        assert_eq!(candidate.skills, vec!["Rust", "SQL"]);
        assert!(candidate.education.is_empty());
        assert!(candidate.previous_experience.is_empty());
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        let cases: Vec<(&str, fn(&mut CandidateInput))> = vec![
            ("name", |i: &mut CandidateInput| i.name = None),
            ("email", |i: &mut CandidateInput| i.email = Some("   ".to_string())),
            ("phone", |i: &mut CandidateInput| i.phone = None),
            ("field", |i: &mut CandidateInput| i.field = None),
            ("skills", |i: &mut CandidateInput| i.skills = None),
            ("experience", |i: &mut CandidateInput| i.experience = None),
        ];
        for (field, clear) in cases {
            let mut input = valid_input();
            clear(&mut input);
            match validate_new_candidate(input) {
                Err(AppError::Validation(msg)) => assert!(msg.contains(field), "{msg}"),
                other => panic!("expected validation error for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_experience_rejected() {
        let input = CandidateInput {
            experience: Some(-1.0),
            ..valid_input()
        };
        assert!(matches!(
            validate_new_candidate(input),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_level_rejected() {
        let input = CandidateInput {
            level: Some(0),
            ..valid_input()
        };
        assert!(matches!(
            validate_new_candidate(input),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_responsibilities_are_dropped() {
        let input = CandidateInput {
            previous_experience: Some(vec![PreviousExperience {
                company: "Globex".to_string(),
                role: "Engineer".to_string(),
                duration: "2 years".to_string(),
                responsibilities: vec!["Built APIs".to_string(), "  ".to_string()],
            }]),
            ..valid_input()
        };
        let candidate = validate_new_candidate(input).unwrap();
        assert_eq!(
            candidate.previous_experience[0].responsibilities,
            vec!["Built APIs"]
        );
    }

    #[test]
    fn test_patch_rejects_explicit_null_for_required_field() {
        let raw = json!({ "name": null });
        let err = validate_patch(&raw, CandidateInput::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("name")));
    }

    #[test]
    fn test_patch_keeps_absent_fields_untouched() {
        let raw = json!({ "field": "Platform" });
        let input = CandidateInput {
            field: Some("Platform".to_string()),
            ..Default::default()
        };
        let patch = validate_patch(&raw, input).unwrap();
        assert_eq!(patch.field.as_deref(), Some("Platform"));
        assert!(patch.name.is_none());
        assert!(patch.skills.is_none());
    }

    #[test]
    fn test_patch_validates_provided_fields() {
        let raw = json!({ "skills": [] });
        let input = CandidateInput {
            skills: Some(vec![]),
            ..Default::default()
        };
        assert!(matches!(
            validate_patch(&raw, input),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_review_requires_comment() {
        let err = validate_review(ReviewInput {
            comment: Some("  ".to_string()),
            swipe: Some("approve".to_string()),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_review_rejects_unknown_swipe() {
        let err = validate_review(ReviewInput {
            comment: Some("Solid".to_string()),
            swipe: Some("maybe".to_string()),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("maybe")));
    }

    #[test]
    fn test_review_accepts_reject() {
        let review = validate_review(ReviewInput {
            comment: Some("Not enough depth".to_string()),
            swipe: Some("reject".to_string()),
        })
        .unwrap();
        assert_eq!(review.swipe, Swipe::Reject);
        assert_eq!(review.comment, "Not enough depth");
    }
}
