//! Dashboard aggregate models.
//!
//! Dashboard payloads are composed from several independent queries and are
//! approximately consistent: a read interleaved with writes can observe
//! counts that disagree across sections.

use serde::Serialize;

use super::{
    ApplicationWithApplicant, ApplicationWithJob, FreelancerProfile, Job, RecruiterJob,
    RecruiterProfile,
};

/// Summary counters for a freelancer dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct FreelancerStats {
    pub total_applications: i64,
    pub pending_applications: i64,
    pub accepted_applications: i64,
    pub rejected_applications: i64,
    /// Integer floor percentage over the 9-point profile checklist.
    pub profile_completion: u32,
}

/// Freelancer dashboard payload.
#[derive(Debug, Serialize)]
pub struct FreelancerDashboard {
    pub profile: FreelancerProfile,
    pub recent_applications: Vec<ApplicationWithJob>,
    pub recommended_jobs: Vec<Job>,
    pub stats: FreelancerStats,
}

/// Summary counters for a recruiter dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct RecruiterStats {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub total_applications: i64,
    pub pending_applications: i64,
    pub shortlisted_applications: i64,
    pub accepted_applications: i64,
}

/// Recruiter dashboard payload.
#[derive(Debug, Serialize)]
pub struct RecruiterDashboard {
    pub profile: RecruiterProfile,
    pub recent_jobs: Vec<RecruiterJob>,
    pub recent_applications: Vec<ApplicationWithApplicant>,
    pub stats: RecruiterStats,
}
