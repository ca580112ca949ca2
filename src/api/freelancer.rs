//! Freelancer-facing endpoints: applying, application history, dashboard.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use crate::api::{ApiResponse, ApiResult};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::matching::{
    self, RECOMMENDATION_CAP, RECOMMENDATION_SKILLS, RESULTS_PER_SKILL,
};
use crate::models::{
    ApplicationWithJob, ApplyRequest, FreelancerDashboard, JobFilters,
};
use crate::AppState;

const DASHBOARD_RECENT: usize = 5;

#[derive(Debug, Serialize)]
pub struct ApplicationCreatedPayload {
    pub message: &'static str,
    pub application_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ApplicationsPayload {
    pub count: usize,
    pub applications: Vec<ApplicationWithJob>,
}

#[derive(Debug, Serialize)]
pub struct DashboardPayload {
    pub dashboard: FreelancerDashboard,
}

/// POST /api/freelancer/jobs/{id}/apply
pub async fn apply_to_job(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(job_id): Path<i64>,
    Json(request): Json<ApplyRequest>,
) -> ApiResult<ApplicationCreatedPayload> {
    user.require_freelancer()?;

    let application_id = state
        .repo
        .create_application(job_id, user.id, &request)
        .await?;

    Ok(ApiResponse::created(ApplicationCreatedPayload {
        message: "Application submitted successfully",
        application_id,
    }))
}

/// GET /api/freelancer/applications
pub async fn list_freelancer_applications(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<ApplicationsPayload> {
    user.require_freelancer()?;

    let applications = state.repo.list_applications_by_freelancer(user.id).await?;
    Ok(ApiResponse::ok(ApplicationsPayload {
        count: applications.len(),
        applications,
    }))
}

/// GET /api/freelancer/dashboard
///
/// Recommendations come from searching active jobs by the profile's leading
/// skills, two hits per skill, deduplicated first-wins and capped.
pub async fn freelancer_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<DashboardPayload> {
    user.require_freelancer()?;

    let profile = state
        .repo
        .get_freelancer_profile(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Freelancer profile not found".to_string()))?;

    let applications = state.repo.list_applications_by_freelancer(user.id).await?;

    let mut candidates = Vec::new();
    for skill in profile.skills.iter().take(RECOMMENDATION_SKILLS) {
        let filters = JobFilters {
            search: Some(skill.name.clone()),
            ..Default::default()
        };
        let hits = state.repo.search_jobs(&filters).await?;
        candidates.extend(hits.into_iter().take(RESULTS_PER_SKILL));
    }
    let recommended_jobs = matching::dedup_recommendations(candidates, RECOMMENDATION_CAP);

    let completion = matching::profile_completion(&profile);
    let stats = matching::freelancer_stats(&applications, completion);

    let recent_applications = applications.into_iter().take(DASHBOARD_RECENT).collect();

    Ok(ApiResponse::ok(DashboardPayload {
        dashboard: FreelancerDashboard {
            profile,
            recent_applications,
            recommended_jobs,
            stats,
        },
    }))
}
