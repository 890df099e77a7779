//! Profile insights: summary bullets and improvement suggestions for one candidate.
//!
//! The full record is embedded as JSON and the model must reply with a single
//! object holding exactly one key. Anything else is a parse error surfaced to
//! the caller; a failed parse never becomes an empty list.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::insights::prompts::{build_suggestions_prompt, build_summary_prompt, INSIGHT_SYSTEM};
use crate::llm_client::{generate_within, parse_json_reply, LlmError, TextGenerator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSummary {
    pub summary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSuggestions {
    pub suggestions: Vec<String>,
}

pub struct InsightGenerator<'a> {
    generator: &'a dyn TextGenerator,
    call_timeout: Duration,
}

impl<'a> InsightGenerator<'a> {
    pub fn new(generator: &'a dyn TextGenerator, call_timeout: Duration) -> Self {
        Self {
            generator,
            call_timeout,
        }
    }

    pub async fn summarize(&self, profile: &Value) -> Result<ProfileSummary, LlmError> {
        let prompt = build_summary_prompt(&serde_json::to_string_pretty(profile)?);
        let reply =
            generate_within(self.generator, &prompt, INSIGHT_SYSTEM, self.call_timeout).await?;
        let summary: ProfileSummary = parse_json_reply(&reply)?;
        info!("Generated {} summary points", summary.summary.len());
        Ok(summary)
    }

    pub async fn suggest(&self, profile: &Value) -> Result<ProfileSuggestions, LlmError> {
        let prompt = build_suggestions_prompt(&serde_json::to_string_pretty(profile)?);
        let reply =
            generate_within(self.generator, &prompt, INSIGHT_SYSTEM, self.call_timeout).await?;
        let suggestions: ProfileSuggestions = parse_json_reply(&reply)?;
        info!("Generated {} profile suggestions", suggestions.suggestions.len());
        Ok(suggestions)
    }
}
