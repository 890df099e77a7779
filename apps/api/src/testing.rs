//! Shared fixtures for unit and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::config::Config;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::candidate::{Candidate, Education, PreviousExperience, Review, Swipe};
use crate::state::AppState;
use crate::store::memory::{MemoryCandidateStore, MemoryHrStore};

type ReplyFn = dyn Fn(&str) -> Result<String, LlmError> + Send + Sync;

/// `TextGenerator` that answers from a closure over the prompt and records every prompt it saw.
pub struct ScriptedGenerator {
    reply: Box<ReplyFn>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(reply: impl Fn(&str) -> Result<String, LlmError> + Send + Sync + 'static) -> Self {
        Self {
            reply: Box::new(reply),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_| Ok(text.clone()))
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.reply)(prompt)
    }
}

/// `TextGenerator` that never answers.
pub struct SilentGenerator;

#[async_trait]
impl TextGenerator for SilentGenerator {
    async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
        std::future::pending().await
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        gemini_api_key: "test-key".to_string(),
        llm_model: "gemini-test".to_string(),
        llm_base_url: "http://127.0.0.1:9".to_string(),
        llm_timeout_secs: 5,
        evaluate_concurrency: 2,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(llm: Arc<dyn TextGenerator>) -> (AppState, Arc<MemoryCandidateStore>) {
    let candidates = Arc::new(MemoryCandidateStore::default());
    let state = AppState {
        candidates: candidates.clone(),
        hr: Arc::new(MemoryHrStore::default()),
        llm,
        config: test_config(),
    };
    (state, candidates)
}

/// A fully populated candidate whose profile section is keyed by `field`.
pub fn sample_candidate(field: &str) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        name: format!("{field} Candidate"),
        email: format!("{}@example.com", field.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
        field: field.to_string(),
        skills: vec!["Python".to_string(), "SQL".to_string()],
        experience: 2.0,
        right_swipes: 3,
        left_swipes: 1,
        reviews: vec![Review {
            comment: "Clear communicator".to_string(),
            swipe: Swipe::Approve,
        }],
        level: 1,
        education: vec![Education {
            college: "State University".to_string(),
            degree: "B.Sc".to_string(),
            branch_of_study: "Computer Science".to_string(),
            year_of_graduation: 2021,
            gpa: 3.6,
        }],
        previous_experience: vec![PreviousExperience {
            company: "Initech".to_string(),
            role: "Junior Developer".to_string(),
            duration: "2 years".to_string(),
            responsibilities: vec![
                "Maintained reporting scripts".to_string(),
                "Wrote SQL migrations".to_string(),
            ],
        }],
        created_at: Utc::now(),
    }
}
