//! Profile and account models consumed by the matching engine.
//!
//! Profile CRUD lives outside this service; these are the read-side views the
//! dashboards and the application ledger depend on.

use serde::{Deserialize, Serialize};

/// Account role resolved from the forwarded gateway identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Freelancer,
    Recruiter,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Freelancer => "freelancer",
            UserRole::Recruiter => "recruiter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "freelancer" => Some(UserRole::Freelancer),
            "recruiter" => Some(UserRole::Recruiter),
            _ => None,
        }
    }
}

/// A skill attached to a freelancer profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSkill {
    pub id: i64,
    pub name: String,
    pub proficiency_level: String,
}

/// A tech stack entry attached to a freelancer profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileTechStack {
    pub id: i64,
    pub name: String,
    pub experience_years: i64,
}

/// Read-side view of a freelancer profile, hydrated with catalog links.
#[derive(Debug, Clone, Serialize)]
pub struct FreelancerProfile {
    pub id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    pub years_of_experience: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub is_available: bool,
    pub skills: Vec<ProfileSkill>,
    pub tech_stacks: Vec<ProfileTechStack>,
}

/// Read-side view of a recruiter profile.
#[derive(Debug, Clone, Serialize)]
pub struct RecruiterProfile {
    pub id: i64,
    pub user_id: i64,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
