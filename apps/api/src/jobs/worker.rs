//! Posting workers. Each worker drains the shared queue one job at a time:
//! resolve the category when the platform needs one, build the posting plan,
//! drive the platform session, record the outcome, notify. A randomized
//! pause between posts keeps the cadence human.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::automation::plan::build_plan;
use crate::automation::{run_plan, PlatformDriver, PostOutcome};
use crate::classifier::suggest::suggest_category;
use crate::classifier::taxonomy::Taxonomy;
use crate::jobs::queue::{JobRecord, JobStatus, JobStore};
use crate::notify::Notifier;

/// Everything a worker needs, cloned into each worker task.
#[derive(Clone)]
pub struct WorkerContext {
    pub taxonomy: Arc<Taxonomy>,
    pub driver: Arc<dyn PlatformDriver>,
    pub notifier: Notifier,
    pub min_post_delay_secs: u64,
    pub max_post_delay_secs: u64,
}

pub async fn run(
    worker_id: usize,
    rx: Arc<Mutex<mpsc::Receiver<Uuid>>>,
    store: JobStore,
    ctx: WorkerContext,
) {
    loop {
        let next = { rx.lock().await.recv().await };
        let Some(id) = next else {
            debug!(worker_id, "posting queue closed, worker exiting");
            break;
        };

        // Claim the job: queued → publishing. Anything else (typically a
        // cancellation that raced us) is left untouched.
        let job = {
            let mut store = store.write().await;
            match store.get_mut(&id) {
                Some(record) if record.status == JobStatus::Queued => {
                    record.status = JobStatus::Publishing;
                    record.clone()
                }
                _ => continue,
            }
        };

        info!(
            worker_id,
            job_id = %job.id,
            platform = job.platform.as_str(),
            title = %job.listing.title,
            "publishing listing"
        );

        let outcome = publish(&job, &ctx).await;

        {
            let mut store = store.write().await;
            if let Some(record) = store.get_mut(&id) {
                record.finished_at = Some(Utc::now());
                match &outcome {
                    Ok(result) => {
                        record.status = JobStatus::Published;
                        record.result = Some(result.clone());
                    }
                    Err(e) => {
                        record.status = JobStatus::Failed;
                        record.error = Some(format!("{e:#}"));
                    }
                }
            }
        }

        match &outcome {
            Ok(result) => {
                ctx.notifier
                    .notify_success(
                        &job.listing.title,
                        job.platform.as_str(),
                        result.listing_url.as_deref(),
                    )
                    .await
            }
            Err(e) => {
                warn!(worker_id, job_id = %job.id, "posting failed: {e:#}");
                ctx.notifier
                    .notify_failure(&job.listing.title, job.platform.as_str(), &format!("{e:#}"))
                    .await
            }
        }

        pause_between_posts(&ctx).await;
    }
}

async fn publish(job: &JobRecord, ctx: &WorkerContext) -> anyhow::Result<PostOutcome> {
    let listing = &job.listing;

    let category = if job.platform.requires_category() {
        let suggestion = suggest_category(
            &ctx.taxonomy,
            &listing.title,
            &listing.description,
            listing.category_hint.as_deref(),
        );
        match suggestion.category {
            Some(category) => {
                info!(
                    job_id = %job.id,
                    category = %category.full_path,
                    confidence = suggestion.confidence,
                    "category resolved"
                );
                Some(category)
            }
            // The picker cannot be navigated without a category.
            None => anyhow::bail!(suggestion
                .message
                .unwrap_or_else(|| "no category".to_string())),
        }
    } else {
        None
    };

    let plan = build_plan(job.platform, listing, category.as_ref());
    let outcome = run_plan(ctx.driver.as_ref(), &plan, listing).await?;
    Ok(outcome)
}

async fn pause_between_posts(ctx: &WorkerContext) {
    // ThreadRng is not Send: draw before the await point.
    let pause = {
        let mut rng = rand::thread_rng();
        rng.gen_range(ctx.min_post_delay_secs..=ctx.max_post_delay_secs)
    };
    if pause > 0 {
        debug!(pause_secs = pause, "pausing before next post");
        tokio::time::sleep(Duration::from_secs(pause)).await;
    }
}
