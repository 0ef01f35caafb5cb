// Platform automation seam. The real browser sessions live out of process;
// this module owns the contract they fulfil: a plan of named steps, a driver
// trait that executes one step at a time, and a runner that enforces each
// step's timeout and retry budget.

pub mod dry_run;
pub mod plan;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::automation::plan::{PlanStep, PostingPlan};
use crate::models::listing::{ListingDraft, Platform};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("step `{step}` timed out after {timeout_ms}ms")]
    Timeout { step: &'static str, timeout_ms: u128 },

    #[error("step `{step}` failed: {reason}")]
    Step { step: &'static str, reason: String },
}

/// Outcome of a completed posting run.
#[derive(Debug, Clone, Serialize)]
pub struct PostOutcome {
    pub platform: Platform,
    pub steps_completed: usize,
    /// URL of the published listing, when the platform surfaces one.
    pub listing_url: Option<String>,
}

/// Executes single plan steps against one platform session.
///
/// Held in the worker context as `Arc<dyn PlatformDriver>` so the dry-run
/// driver and any real out-of-process session driver are interchangeable.
#[async_trait]
pub trait PlatformDriver: Send + Sync {
    async fn run_step(
        &self,
        platform: Platform,
        step: &PlanStep,
        listing: &ListingDraft,
    ) -> Result<(), DriverError>;

    /// Listing URL to report once the plan completed, if any.
    fn published_url(&self, _platform: Platform, _listing: &ListingDraft) -> Option<String> {
        None
    }
}

/// Walks a plan start to finish. Every step gets its own timeout per attempt
/// and is retried up to its `max_retries` budget; the first step to exhaust
/// its budget aborts the run.
pub async fn run_plan(
    driver: &dyn PlatformDriver,
    plan: &PostingPlan,
    listing: &ListingDraft,
) -> Result<PostOutcome, DriverError> {
    let mut steps_completed = 0;

    for step in &plan.steps {
        let mut attempt = 0u32;
        loop {
            let result = tokio::time::timeout(
                step.timeout,
                driver.run_step(plan.platform, step, listing),
            )
            .await;

            let error = match result {
                Ok(Ok(())) => break,
                Ok(Err(e)) => e,
                Err(_) => DriverError::Timeout {
                    step: step.name,
                    timeout_ms: step.timeout.as_millis(),
                },
            };

            if attempt >= step.max_retries {
                return Err(error);
            }
            attempt += 1;
            warn!(
                platform = plan.platform.as_str(),
                step = step.name,
                attempt,
                "step failed, retrying: {error}"
            );
        }
        steps_completed += 1;
    }

    Ok(PostOutcome {
        platform: plan.platform,
        steps_completed,
        listing_url: driver.published_url(plan.platform, listing),
    })
}
