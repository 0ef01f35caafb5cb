//! In-memory posting queue: a bounded channel feeding a small fixed worker
//! pool, with job records kept in a shared map for status lookups. Nothing
//! is persisted — jobs live and die with the process.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Mutex, RwLock};
use uuid::Uuid;

use crate::automation::PostOutcome;
use crate::errors::AppError;
use crate::jobs::worker::{self, WorkerContext};
use crate::models::listing::{ListingDraft, Platform};

const QUEUE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Publishing,
    Published,
    Failed,
    Cancelled,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Published | JobStatus::Failed | JobStatus::Cancelled
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Publishing => "publishing",
            JobStatus::Published => "published",
            JobStatus::Failed => "failed",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub id: Uuid,
    pub platform: Platform,
    pub listing: ListingDraft,
    pub status: JobStatus,
    pub result: Option<PostOutcome>,
    pub error: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

pub type JobStore = Arc<RwLock<HashMap<Uuid, JobRecord>>>;

/// Handle to the posting queue. Cloning is cheap; all clones share the same
/// channel and store.
#[derive(Clone)]
pub struct JobQueue {
    tx: mpsc::Sender<Uuid>,
    // Keeps the receiver alive even with zero workers, so submissions never
    // observe a closed channel.
    _rx: Arc<Mutex<mpsc::Receiver<Uuid>>>,
    store: JobStore,
}

impl JobQueue {
    /// Spawns `workers` posting workers and returns the queue handle.
    pub fn start(workers: usize, ctx: WorkerContext) -> Self {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        let rx = Arc::new(Mutex::new(rx));
        let store: JobStore = Arc::new(RwLock::new(HashMap::new()));

        for worker_id in 0..workers {
            tokio::spawn(worker::run(
                worker_id,
                Arc::clone(&rx),
                Arc::clone(&store),
                ctx.clone(),
            ));
        }

        Self { tx, _rx: rx, store }
    }

    /// Enqueues a listing for posting. Applies backpressure when the queue
    /// is at capacity.
    pub async fn submit(
        &self,
        platform: Platform,
        listing: ListingDraft,
    ) -> Result<JobRecord, AppError> {
        if listing.title.trim().is_empty() {
            return Err(AppError::Validation(
                "listing title must not be empty".to_string(),
            ));
        }

        let record = JobRecord {
            id: Uuid::new_v4(),
            platform,
            listing,
            status: JobStatus::Queued,
            result: None,
            error: None,
            submitted_at: Utc::now(),
            finished_at: None,
        };

        self.store.write().await.insert(record.id, record.clone());
        self.tx
            .send(record.id)
            .await
            .map_err(|_| AppError::Internal(anyhow!("posting queue is closed")))?;

        Ok(record)
    }

    pub async fn get(&self, id: Uuid) -> Option<JobRecord> {
        self.store.read().await.get(&id).cloned()
    }

    /// Cancels a job that has not started. Running or finished jobs can no
    /// longer be cancelled — one browser session per job, we never kill a
    /// session midway through a submit.
    pub async fn cancel(&self, id: Uuid) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        let record = store
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

        match record.status {
            JobStatus::Queued => {
                record.status = JobStatus::Cancelled;
                record.finished_at = Some(Utc::now());
                Ok(())
            }
            status => Err(AppError::Conflict(format!(
                "Job {id} is {} and can no longer be cancelled",
                status.as_str()
            ))),
        }
    }

    /// All known jobs, oldest first.
    pub async fn snapshot(&self) -> Vec<JobRecord> {
        let mut jobs: Vec<JobRecord> = self.store.read().await.values().cloned().collect();
        jobs.sort_by_key(|job| job.submitted_at);
        jobs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::dry_run::DryRunDriver;
    use crate::classifier::taxonomy::Taxonomy;
    use crate::notify::Notifier;
    use std::time::Duration;

    fn context() -> WorkerContext {
        WorkerContext {
            taxonomy: Arc::new(Taxonomy::builtin()),
            driver: Arc::new(DryRunDriver),
            notifier: Notifier::new(None),
            min_post_delay_secs: 0,
            max_post_delay_secs: 0,
        }
    }

    fn draft(title: &str) -> ListingDraft {
        ListingDraft {
            title: title.to_string(),
            description: String::new(),
            price: 10.0,
            images: vec![],
            brand: None,
            size: None,
            condition: None,
            category_hint: None,
        }
    }

    async fn wait_for_terminal(queue: &JobQueue, id: Uuid) -> JobRecord {
        tokio::time::timeout(Duration::from_secs(10), async {
            loop {
                if let Some(job) = queue.get(id).await {
                    if job.status.is_terminal() {
                        return job;
                    }
                }
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        })
        .await
        .expect("job did not reach a terminal status in time")
    }

    #[tokio::test]
    async fn test_submit_records_a_queued_job() {
        // No workers: the job stays queued and observable.
        let queue = JobQueue::start(0, context());
        let record = queue
            .submit(Platform::Vinted, draft("Escarpins noirs"))
            .await
            .unwrap();

        assert_eq!(record.status, JobStatus::Queued);
        let fetched = queue.get(record.id).await.unwrap();
        assert_eq!(fetched.status, JobStatus::Queued);
        assert!(fetched.result.is_none());
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_titles() {
        let queue = JobQueue::start(0, context());
        let err = queue
            .submit(Platform::Vinted, draft("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_cancel_queued_job() {
        let queue = JobQueue::start(0, context());
        let record = queue
            .submit(Platform::Leboncoin, draft("Vélo enfant"))
            .await
            .unwrap();

        queue.cancel(record.id).await.unwrap();
        let job = queue.get(record.id).await.unwrap();
        assert_eq!(job.status, JobStatus::Cancelled);
        assert!(job.finished_at.is_some());
    }

    #[tokio::test]
    async fn test_cancel_unknown_job_is_not_found() {
        let queue = JobQueue::start(0, context());
        let err = queue.cancel(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_cancel_finished_job_conflicts() {
        let queue = JobQueue::start(1, context());
        let record = queue
            .submit(Platform::Vinted, draft("Escarpins noirs taille 38"))
            .await
            .unwrap();

        wait_for_terminal(&queue, record.id).await;
        let err = queue.cancel(record.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_worker_publishes_a_classifiable_vinted_listing() {
        let queue = JobQueue::start(1, context());
        let record = queue
            .submit(Platform::Vinted, draft("Escarpins noirs taille 38"))
            .await
            .unwrap();

        let job = wait_for_terminal(&queue, record.id).await;
        assert_eq!(job.status, JobStatus::Published);
        let outcome = job.result.unwrap();
        assert_eq!(outcome.platform, Platform::Vinted);
        assert!(outcome.steps_completed > 0);
        assert!(job.error.is_none());
    }

    #[tokio::test]
    async fn test_worker_fails_vinted_job_without_category() {
        // Vinted needs a category; nonsense text resolves none and the job
        // fails with the classifier's message.
        let queue = JobQueue::start(1, context());
        let record = queue
            .submit(Platform::Vinted, draft("xyzabc nonsense text"))
            .await
            .unwrap();

        let job = wait_for_terminal(&queue, record.id).await;
        assert_eq!(job.status, JobStatus::Failed);
        assert!(job.error.is_some());
        assert!(job.result.is_none());
    }

    #[tokio::test]
    async fn test_leboncoin_job_does_not_need_a_category() {
        let queue = JobQueue::start(1, context());
        let record = queue
            .submit(Platform::Leboncoin, draft("xyzabc nonsense text"))
            .await
            .unwrap();

        let job = wait_for_terminal(&queue, record.id).await;
        assert_eq!(job.status, JobStatus::Published);
    }

    #[tokio::test]
    async fn test_cancelled_job_is_skipped_by_workers() {
        // Cancel before any worker exists, then start none: the record must
        // keep its cancelled status even though the id sits in the channel.
        let queue = JobQueue::start(0, context());
        let record = queue
            .submit(Platform::Vinted, draft("Escarpins noirs"))
            .await
            .unwrap();
        queue.cancel(record.id).await.unwrap();

        let job = queue.get(record.id).await.unwrap();
        assert_eq!(job.status, JobStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_snapshot_is_oldest_first() {
        let queue = JobQueue::start(0, context());
        let first = queue
            .submit(Platform::Vinted, draft("Premier"))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = queue
            .submit(Platform::Vinted, draft("Deuxième"))
            .await
            .unwrap();

        let jobs = queue.snapshot().await;
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id, first.id);
        assert_eq!(jobs[1].id, second.id);
    }
}
