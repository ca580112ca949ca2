//! Application lifecycle models.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a job application.
///
/// `applied` is the initial state assigned at creation and is never a valid
/// transition target. The remaining four states may each be set from any
/// prior state; entering `reviewed`, `accepted` or `rejected` stamps the
/// matching timestamp, again on repeat entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Reviewed,
    Shortlisted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "applied" => Some(ApplicationStatus::Applied),
            "reviewed" => Some(ApplicationStatus::Reviewed),
            "shortlisted" => Some(ApplicationStatus::Shortlisted),
            "accepted" => Some(ApplicationStatus::Accepted),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    /// Capitalized form used in notification titles.
    pub fn title_case(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Whether a recruiter may set this status on an existing application.
    pub fn is_transition_target(&self) -> bool {
        !matches!(self, ApplicationStatus::Applied)
    }

    /// Timestamp column stamped when this status is entered, if any.
    pub fn timestamp_column(&self) -> Option<&'static str> {
        match self {
            ApplicationStatus::Reviewed => Some("reviewed_at"),
            ApplicationStatus::Accepted => Some("accepted_at"),
            ApplicationStatus::Rejected => Some("rejected_at"),
            ApplicationStatus::Applied | ApplicationStatus::Shortlisted => None,
        }
    }
}

/// A job application record.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub freelancer_id: i64,
    pub cover_letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_date: Option<String>,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruiter_notes: Option<String>,
    pub applied_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<String>,
}

/// An application as seen by the hiring recruiter, hydrated with applicant data.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithApplicant {
    #[serde(flatten)]
    pub application: Application,
    pub freelancer_name: String,
    pub freelancer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    pub years_of_experience: i64,
    pub skills: Vec<String>,
}

/// An application as seen by its freelancer, hydrated with job data.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: Application,
    pub job_title: String,
    pub pay_per_hour: f64,
    pub experience_level: super::ExperienceLevel,
    pub company_name: String,
}

/// Request body for applying to a job.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyRequest {
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub proposed_rate: Option<f64>,
    #[serde(default)]
    pub availability_date: Option<String>,
}

/// Request body for a recruiter updating an application's status.
///
/// The status arrives as a raw string so an unrecognized value maps to a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub recruiter_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_is_not_a_transition_target() {
        assert!(!ApplicationStatus::Applied.is_transition_target());
        for status in [
            ApplicationStatus::Reviewed,
            ApplicationStatus::Shortlisted,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        ] {
            assert!(status.is_transition_target());
        }
    }

    #[test]
    fn test_timestamp_columns() {
        assert_eq!(
            ApplicationStatus::Reviewed.timestamp_column(),
            Some("reviewed_at")
        );
        assert_eq!(
            ApplicationStatus::Accepted.timestamp_column(),
            Some("accepted_at")
        );
        assert_eq!(
            ApplicationStatus::Rejected.timestamp_column(),
            Some("rejected_at")
        );
        assert_eq!(ApplicationStatus::Shortlisted.timestamp_column(), None);
        assert_eq!(ApplicationStatus::Applied.timestamp_column(), None);
    }

    #[test]
    fn test_status_round_trips() {
        for s in ["applied", "reviewed", "shortlisted", "accepted", "rejected"] {
            assert_eq!(ApplicationStatus::from_str(s).unwrap().as_str(), s);
        }
        assert!(ApplicationStatus::from_str("withdrawn").is_none());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(ApplicationStatus::Rejected.title_case(), "Rejected");
        assert_eq!(ApplicationStatus::Shortlisted.title_case(), "Shortlisted");
    }
}
