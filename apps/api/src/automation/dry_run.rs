//! Stand-in driver used when no browser session backend is wired up. Walks
//! every step with a human-like randomized pause and logs what a real
//! session would do — useful for exercising the whole posting pipeline.

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::info;

use crate::automation::plan::{PlanStep, StepAction};
use crate::automation::{DriverError, PlatformDriver};
use crate::models::listing::{ListingDraft, Platform};

const MIN_STEP_PAUSE_MS: u64 = 20;
const MAX_STEP_PAUSE_MS: u64 = 120;

pub struct DryRunDriver;

#[async_trait]
impl PlatformDriver for DryRunDriver {
    async fn run_step(
        &self,
        platform: Platform,
        step: &PlanStep,
        listing: &ListingDraft,
    ) -> Result<(), DriverError> {
        // ThreadRng is not Send: draw the pause before the await point.
        let pause = rand::thread_rng().gen_range(MIN_STEP_PAUSE_MS..=MAX_STEP_PAUSE_MS);
        tokio::time::sleep(Duration::from_millis(pause)).await;

        match &step.action {
            StepAction::SelectCategory { path } => info!(
                platform = platform.as_str(),
                step = step.name,
                title = %listing.title,
                category = %path.join(" > "),
                "dry-run step"
            ),
            _ => info!(
                platform = platform.as_str(),
                step = step.name,
                title = %listing.title,
                "dry-run step"
            ),
        }

        Ok(())
    }
}
