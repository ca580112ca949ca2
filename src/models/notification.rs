//! Notification models.

use serde::{Deserialize, Serialize};

/// Category of a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Application,
    Job,
    Profile,
    System,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Application => "application",
            NotificationType::Job => "job",
            NotificationType::Profile => "profile",
            NotificationType::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "application" => Some(NotificationType::Application),
            "job" => Some(NotificationType::Job),
            "profile" => Some(NotificationType::Profile),
            "system" => Some(NotificationType::System),
            _ => None,
        }
    }
}

/// An append-only notification event for a user.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_application_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_job_id: Option<i64>,
    pub is_read: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<String>,
}

/// Query parameters for listing notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationQuery {
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_round_trips() {
        for t in ["application", "job", "profile", "system"] {
            assert_eq!(NotificationType::from_str(t).unwrap().as_str(), t);
        }
        assert!(NotificationType::from_str("email").is_none());
    }
}
