use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::automation::PostOutcome;
use crate::errors::AppError;
use crate::jobs::queue::{JobRecord, JobStatus};
use crate::models::listing::{ListingDraft, Platform};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitJobRequest {
    pub platform: Platform,
    pub listing: ListingDraft,
}

#[derive(Debug, Serialize)]
pub struct JobStatusResponse {
    pub job_id: Uuid,
    pub platform: Platform,
    pub status: JobStatus,
    pub result: Option<PostOutcome>,
    pub error: Option<String>,
}

impl From<JobRecord> for JobStatusResponse {
    fn from(record: JobRecord) -> Self {
        Self {
            job_id: record.id,
            platform: record.platform,
            status: record.status,
            result: record.result,
            error: record.error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub total: usize,
    pub jobs: Vec<JobStatusResponse>,
}

/// POST /api/v1/jobs
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitJobRequest>,
) -> Result<(StatusCode, Json<JobStatusResponse>), AppError> {
    let record = state.jobs.submit(req.platform, req.listing).await?;
    Ok((StatusCode::ACCEPTED, Json(record.into())))
}

/// GET /api/v1/jobs/:id
pub async fn handle_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobStatusResponse>, AppError> {
    let record = state
        .jobs
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(record.into()))
}

/// GET /api/v1/jobs
pub async fn handle_list(State(state): State<AppState>) -> Json<JobListResponse> {
    let jobs: Vec<JobStatusResponse> = state
        .jobs
        .snapshot()
        .await
        .into_iter()
        .map(JobStatusResponse::from)
        .collect();

    Json(JobListResponse {
        total: jobs.len(),
        jobs,
    })
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_cancel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.jobs.cancel(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
