//! Recruiter-facing endpoints: job management, applicant review, dashboard.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use crate::api::{ApiResponse, ApiResult};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::matching;
use crate::models::{
    Application, ApplicationStatus, ApplicationWithApplicant, CreateJobRequest, Job,
    RecruiterDashboard, RecruiterJob, UpdateStatusRequest,
};
use crate::AppState;

/// How many recent jobs a dashboard shows.
const DASHBOARD_RECENT_JOBS: usize = 5;
/// How many recent applications a dashboard shows.
const DASHBOARD_RECENT_APPLICATIONS: usize = 10;

#[derive(Debug, Serialize)]
pub struct JobCreatedPayload {
    pub message: &'static str,
    pub job: Job,
}

#[derive(Debug, Serialize)]
pub struct RecruiterJobsPayload {
    pub count: usize,
    pub jobs: Vec<RecruiterJob>,
}

#[derive(Debug, Serialize)]
pub struct JobApplicationsPayload {
    pub count: usize,
    pub applications: Vec<ApplicationWithApplicant>,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdatedPayload {
    pub message: &'static str,
    pub application: Application,
}

#[derive(Debug, Serialize)]
pub struct DashboardPayload {
    pub dashboard: RecruiterDashboard,
}

/// POST /api/recruiter/jobs
pub async fn create_job(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateJobRequest>,
) -> ApiResult<JobCreatedPayload> {
    user.require_recruiter()?;

    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("description is required".to_string()));
    }

    let job_id = state.repo.create_job(user.id, &request).await?;

    // Read the row back hydrated; this fetch also registers the first view.
    let job = state
        .repo
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::Internal("Job vanished after creation".to_string()))?;

    Ok(ApiResponse::created(JobCreatedPayload {
        message: "Job posted successfully",
        job,
    }))
}

/// GET /api/recruiter/jobs
pub async fn list_recruiter_jobs(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<RecruiterJobsPayload> {
    user.require_recruiter()?;

    let jobs = state.repo.list_jobs_by_recruiter(user.id).await?;
    Ok(ApiResponse::ok(RecruiterJobsPayload {
        count: jobs.len(),
        jobs,
    }))
}

/// GET /api/recruiter/jobs/{id}/applications
///
/// A job owned by someone else is indistinguishable from a missing one.
pub async fn list_job_applications(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(job_id): Path<i64>,
) -> ApiResult<JobApplicationsPayload> {
    user.require_recruiter()?;

    match state.repo.job_owner(job_id).await? {
        Some(owner) if owner == user.id => {}
        _ => return Err(AppError::NotFound("Job not found".to_string())),
    }

    let applications = state.repo.list_applications_by_job(job_id).await?;
    Ok(ApiResponse::ok(JobApplicationsPayload {
        count: applications.len(),
        applications,
    }))
}

/// PUT /api/recruiter/applications/{id}/status
pub async fn update_application_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(application_id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<StatusUpdatedPayload> {
    user.require_recruiter()?;

    let status = ApplicationStatus::from_str(&request.status)
        .filter(ApplicationStatus::is_transition_target)
        .ok_or_else(|| AppError::Validation("Invalid status value".to_string()))?;

    match state.repo.application_owner(application_id).await? {
        Some(owner) if owner == user.id => {}
        _ => return Err(AppError::NotFound("Application not found".to_string())),
    }

    let application = state
        .repo
        .update_application_status(application_id, status, request.recruiter_notes.as_deref())
        .await?;

    Ok(ApiResponse::ok(StatusUpdatedPayload {
        message: "Application status updated",
        application,
    }))
}

/// GET /api/recruiter/dashboard
pub async fn recruiter_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<DashboardPayload> {
    user.require_recruiter()?;

    let profile = state
        .repo
        .get_recruiter_profile(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Recruiter profile not found".to_string()))?;

    let jobs = state.repo.list_jobs_by_recruiter(user.id).await?;

    let mut applications = Vec::new();
    for job in &jobs {
        applications.extend(state.repo.list_applications_by_job(job.id).await?);
    }
    applications.sort_by(|a, b| b.application.applied_at.cmp(&a.application.applied_at));

    let stats = matching::recruiter_stats(&jobs, &applications);

    let recent_jobs = jobs.into_iter().take(DASHBOARD_RECENT_JOBS).collect();
    let recent_applications = applications
        .into_iter()
        .take(DASHBOARD_RECENT_APPLICATIONS)
        .collect();

    Ok(ApiResponse::ok(DashboardPayload {
        dashboard: RecruiterDashboard {
            profile,
            recent_jobs,
            recent_applications,
            stats,
        },
    }))
}
