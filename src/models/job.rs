//! Job posting models and search filter types.

use serde::{Deserialize, Serialize};

/// Required experience level for a job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "junior" => Some(ExperienceLevel::Junior),
            "mid" => Some(ExperienceLevel::Mid),
            "senior" => Some(ExperienceLevel::Senior),
            _ => None,
        }
    }
}

/// Engagement type for a job posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobType {
    #[serde(rename = "full-time")]
    FullTime,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "contract")]
    Contract,
    #[serde(rename = "freelance")]
    Freelance,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Freelance => "freelance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "full-time" => Some(JobType::FullTime),
            "part-time" => Some(JobType::PartTime),
            "contract" => Some(JobType::Contract),
            "freelance" => Some(JobType::Freelance),
            _ => None,
        }
    }
}

/// A job posting, hydrated with its catalog associations and poster identity.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: i64,
    pub recruiter_id: i64,
    pub company_name: String,
    pub recruiter_name: String,
    pub recruiter_email: String,
    pub title: String,
    pub description: String,
    pub pay_per_hour: f64,
    pub experience_level: ExperienceLevel,
    pub job_type: JobType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_remote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    pub is_active: bool,
    pub views_count: i64,
    pub applications_count: i64,
    pub created_at: String,
    pub required_skills: Vec<String>,
    pub tech_stack: Vec<String>,
}

/// A job row as seen by its owning recruiter, with a live application count.
#[derive(Debug, Clone, Serialize)]
pub struct RecruiterJob {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub pay_per_hour: f64,
    pub experience_level: ExperienceLevel,
    pub job_type: JobType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_remote: bool,
    pub is_active: bool,
    pub views_count: i64,
    pub applications_count: i64,
    /// Counted from application rows at read time, not the incremental counter.
    pub total_applications: i64,
    pub created_at: String,
}

/// Request body for posting a new job.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pay_per_hour: Option<f64>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_remote: Option<bool>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// Raw search parameters as they arrive on the query string.
///
/// Everything is optional text; normalization decides what survives as a
/// filter. A malformed numeric bound drops that filter, never the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub min_pay: Option<String>,
    #[serde(default)]
    pub max_pay: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub is_remote: Option<String>,
}

/// Normalized job search filters. Absent fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct JobFilters {
    pub search: Option<String>,
    pub experience_level: Option<String>,
    pub min_pay: Option<f64>,
    pub max_pay: Option<f64>,
    pub job_type: Option<String>,
    pub is_remote: bool,
}

/// Sentinel job type value meaning "no job type filter".
const ALL_TYPES: &str = "All Types";

impl JobSearchParams {
    /// Normalize raw query parameters into typed filters.
    pub fn normalize(self) -> JobFilters {
        let non_empty = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };

        let search = non_empty(self.search);
        let experience_level = non_empty(self.experience_level);
        let job_type = non_empty(self.job_type).filter(|t| t != ALL_TYPES);
        let min_pay = non_empty(self.min_pay).and_then(|s| s.parse::<f64>().ok());
        let max_pay = non_empty(self.max_pay).and_then(|s| s.parse::<f64>().ok());
        let is_remote = self
            .is_remote
            .map(|s| s.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        JobFilters {
            search,
            experience_level,
            min_pay,
            max_pay,
            job_type,
            is_remote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_impose_no_constraints() {
        let filters = JobSearchParams::default().normalize();
        assert!(filters.search.is_none());
        assert!(filters.experience_level.is_none());
        assert!(filters.min_pay.is_none());
        assert!(filters.max_pay.is_none());
        assert!(filters.job_type.is_none());
        assert!(!filters.is_remote);
    }

    #[test]
    fn test_malformed_pay_bounds_are_dropped() {
        let filters = JobSearchParams {
            min_pay: Some("abc".to_string()),
            max_pay: Some("60".to_string()),
            ..Default::default()
        }
        .normalize();
        assert!(filters.min_pay.is_none());
        assert_eq!(filters.max_pay, Some(60.0));
    }

    #[test]
    fn test_all_types_sentinel_is_ignored() {
        let filters = JobSearchParams {
            job_type: Some("All Types".to_string()),
            ..Default::default()
        }
        .normalize();
        assert!(filters.job_type.is_none());
    }

    #[test]
    fn test_blank_strings_are_absent() {
        let filters = JobSearchParams {
            search: Some("   ".to_string()),
            experience_level: Some("".to_string()),
            ..Default::default()
        }
        .normalize();
        assert!(filters.search.is_none());
        assert!(filters.experience_level.is_none());
    }

    #[test]
    fn test_is_remote_only_restricts_on_true() {
        let truthy = JobSearchParams {
            is_remote: Some("TRUE".to_string()),
            ..Default::default()
        }
        .normalize();
        assert!(truthy.is_remote);

        let falsy = JobSearchParams {
            is_remote: Some("false".to_string()),
            ..Default::default()
        }
        .normalize();
        assert!(!falsy.is_remote);
    }

    #[test]
    fn test_enum_round_trips() {
        for level in ["junior", "mid", "senior"] {
            assert_eq!(ExperienceLevel::from_str(level).unwrap().as_str(), level);
        }
        for job_type in ["full-time", "part-time", "contract", "freelance"] {
            assert_eq!(JobType::from_str(job_type).unwrap().as_str(), job_type);
        }
        assert!(ExperienceLevel::from_str("principal").is_none());
        assert!(JobType::from_str("internship").is_none());
    }
}
