//! Public job catalog endpoints.

use axum::extract::{Path, Query, State};
use serde::Serialize;

use crate::api::{ApiResponse, ApiResult};
use crate::errors::AppError;
use crate::models::{Job, JobSearchParams};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct JobListPayload {
    pub count: usize,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct JobPayload {
    pub job: Job,
}

/// GET /api/jobs
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> ApiResult<JobListPayload> {
    let filters = params.normalize();
    let jobs = state.repo.search_jobs(&filters).await?;
    Ok(ApiResponse::ok(JobListPayload {
        count: jobs.len(),
        jobs,
    }))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> ApiResult<JobPayload> {
    let job = state
        .repo
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    Ok(ApiResponse::ok(JobPayload { job }))
}
