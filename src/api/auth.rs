//! Auth API endpoints.

use axum::{extract::State, http::HeaderMap, Json};

use super::{success, ApiResult};
use crate::auth;
use crate::errors::AppError;
use crate::models::{LoginRequest, SessionInfo, SessionResponse, SessionUser};
use crate::AppState;

/// POST /api/auth/login - Establish an operator session.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<SessionResponse> {
    if !auth::verify_credentials(&state.config, &request.email, &request.password) {
        return Err(AppError::Unauthorized(
            "Invalid email or password.".to_string(),
        ));
    }

    let token = state.sessions.create(&request.email);
    tracing::info!("Operator {} logged in", request.email);

    success(SessionResponse {
        token,
        email: request.email,
    })
}

/// POST /api/auth/logout - Invalidate the presented session token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    if let Some(token) = auth::bearer_token(&headers) {
        state.sessions.remove(&token);
    }
    success(())
}

/// GET /api/auth/session - Current session probe.
///
/// Returns the operator for a valid token, or null. Clients use this at
/// startup to detect an existing authenticated session.
pub async fn session(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<SessionInfo> {
    let user = auth::bearer_token(&headers)
        .and_then(|token| state.sessions.email_for(&token))
        .map(|email| SessionUser { email });

    success(SessionInfo { user })
}
