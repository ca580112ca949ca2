//! Notification inbox endpoints.

use axum::{
    extract::{Path, Query, State},
    Extension,
};
use serde::Serialize;

use crate::api::{ApiResponse, ApiResult};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{Notification, NotificationQuery};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct NotificationsPayload {
    pub count: usize,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountPayload {
    pub unread_count: i64,
}

#[derive(Debug, Serialize)]
pub struct MarkReadPayload {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MarkAllReadPayload {
    pub message: &'static str,
    pub count: u64,
}

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<NotificationQuery>,
) -> ApiResult<NotificationsPayload> {
    let notifications = state
        .repo
        .list_notifications(user.id, query.unread_only, query.limit)
        .await?;

    Ok(ApiResponse::ok(NotificationsPayload {
        count: notifications.len(),
        notifications,
    }))
}

/// GET /api/notifications/unread/count
pub async fn unread_count(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<UnreadCountPayload> {
    let unread_count = state.repo.unread_notification_count(user.id).await?;
    Ok(ApiResponse::ok(UnreadCountPayload { unread_count }))
}

/// POST /api/notifications/{id}/read
///
/// Someone else's notification is indistinguishable from a missing one.
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(notification_id): Path<i64>,
) -> ApiResult<MarkReadPayload> {
    let updated = state
        .repo
        .mark_notification_read(notification_id, user.id)
        .await?;
    if !updated {
        return Err(AppError::NotFound("Notification not found".to_string()));
    }

    Ok(ApiResponse::ok(MarkReadPayload {
        message: "Notification marked as read",
    }))
}

/// POST /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<MarkAllReadPayload> {
    let count = state.repo.mark_all_notifications_read(user.id).await?;
    Ok(ApiResponse::ok(MarkAllReadPayload {
        message: "All notifications marked as read",
        count,
    }))
}
