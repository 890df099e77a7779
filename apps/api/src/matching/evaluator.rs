//! Filters candidates by asking the upstream model, one call per
//! candidate, whether each profile fits a free-text hiring requirement.
//!
//! Contract:
//! - the result keeps the input order, restricted to fits;
//! - an empty candidate list makes no upstream calls;
//! - any failed or timed-out call fails the whole evaluation (no partial results).

use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::{stream, FutureExt, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::llm_client::{generate_within, LlmError, TextGenerator};
use crate::matching::formatter::format_profile;
use crate::matching::prompts::{build_fit_prompt, FIT_SYSTEM};
use crate::models::candidate::Candidate;

pub struct FitEvaluator<'a> {
    generator: &'a dyn TextGenerator,
    call_timeout: Duration,
    /// Max judgments in flight at once.
    concurrency: usize,
}

impl<'a> FitEvaluator<'a> {
    pub fn new(
        generator: &'a dyn TextGenerator,
        call_timeout: Duration,
        concurrency: usize,
    ) -> Self {
        Self {
            generator,
            call_timeout,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn evaluate(
        &self,
        requirement: &str,
        candidates: Vec<Candidate>,
    ) -> Result<Vec<Candidate>, LlmError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        info!("Evaluating {} candidates for fit", candidates.len());

        // `buffered` yields verdicts in input order; `try_collect` stops at the
        // first error and drops every call still in flight.
        let judgments: Vec<BoxFuture<'_, Result<bool, LlmError>>> = candidates
            .iter()
            .map(|candidate| self.judge(requirement, candidate).boxed())
            .collect();
        let verdicts: Vec<bool> = stream::iter(judgments)
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let fits: Vec<Candidate> = candidates
            .into_iter()
            .zip(verdicts)
            .filter_map(|(candidate, fit)| fit.then_some(candidate))
            .collect();

        info!("{} candidates judged a fit", fits.len());
        Ok(fits)
    }

    async fn judge(&self, requirement: &str, candidate: &Candidate) -> Result<bool, LlmError> {
        let prompt = build_fit_prompt(&format_profile(candidate), requirement);
        let reply = generate_within(self.generator, &prompt, FIT_SYSTEM, self.call_timeout).await?;
        let fit = is_fit_reply(&reply);
        debug!(candidate_id = %candidate.id, fit, "Fit judgment received");
        Ok(fit)
    }
}

/// A reply is a fit only if, after trimming and lower-casing, it contains the
/// word `true` and not the word `false`.
pub fn is_fit_reply(reply: &str) -> bool {
    let normalized = reply.trim().to_lowercase();

    let mut saw_true = false;
    let mut saw_false = false;
    for word in normalized.split(|c: char| !c.is_alphanumeric()) {
        match word {
            "true" => saw_true = true,
            "false" => saw_false = true,
            _ => {}
        }
    }
    saw_true && !saw_false
}
