//! Gateway authentication and caller identity.
//!
//! The service sits behind a trusted gateway. Two layers apply to `/api`:
//! an optional pre-shared key check on `x-api-key`, and identity resolution
//! from `x-user-id` with the role loaded from the account store.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;
use crate::models::UserRole;
use crate::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated caller, resolved by [`identity_layer`] and available to
/// handlers as an extension.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i64,
    pub role: UserRole,
}

impl AuthUser {
    pub fn require_recruiter(&self) -> Result<(), AppError> {
        if self.role != UserRole::Recruiter {
            return Err(AppError::Forbidden(
                "This endpoint requires a recruiter account".to_string(),
            ));
        }
        Ok(())
    }

    pub fn require_freelancer(&self) -> Result<(), AppError> {
        if self.role != UserRole::Freelancer {
            return Err(AppError::Forbidden(
                "This endpoint requires a freelancer account".to_string(),
            ));
        }
        Ok(())
    }
}

/// Compare two byte strings in constant time.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Pre-shared key middleware. When no key is configured the layer is a
/// pass-through; otherwise every request must carry a matching `x-api-key`.
pub async fn psk_auth_layer(psk: Option<String>, request: Request, next: Next) -> Response {
    let Some(expected) = psk.as_deref() else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if constant_time_compare(key.as_bytes(), expected.as_bytes()) => {
            next.run(request).await
        }
        _ => {
            tracing::warn!("request rejected: missing or invalid api key");
            AppError::Unauthorized("Invalid or missing API key".to_string()).into_response()
        }
    }
}

/// Identity middleware for authenticated routes. Reads `x-user-id`, loads the
/// account's role, and injects an [`AuthUser`] extension. Requests without a
/// resolvable active account get a 401.
pub async fn identity_layer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok());

    let Some(user_id) = user_id else {
        return AppError::Unauthorized("Missing or malformed user identity".to_string())
            .into_response();
    };

    let role = match state.repo.get_user_role(user_id).await {
        Ok(Some(role)) => role,
        Ok(None) => {
            tracing::warn!(user_id, "identity rejected: unknown or inactive account");
            return AppError::Unauthorized("Unknown or inactive account".to_string())
                .into_response();
        }
        Err(e) => return e.into_response(),
    };

    request.extensions_mut().insert(AuthUser { id: user_id, role });
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare(b"secret", b"secret"));
        assert!(!constant_time_compare(b"secret", b"secre7"));
        assert!(!constant_time_compare(b"secret", b"secret-longer"));
        assert!(constant_time_compare(b"", b""));
    }

    #[test]
    fn test_role_guards() {
        let recruiter = AuthUser {
            id: 1,
            role: UserRole::Recruiter,
        };
        assert!(recruiter.require_recruiter().is_ok());
        assert!(recruiter.require_freelancer().is_err());

        let freelancer = AuthUser {
            id: 2,
            role: UserRole::Freelancer,
        };
        assert!(freelancer.require_freelancer().is_ok());
        assert!(freelancer.require_recruiter().is_err());
    }
}
