//! Session-token authentication module.
//!
//! Credentials are checked with constant-time comparison to mitigate timing
//! attacks; valid logins get a bearer token that guards the admin routes.

use std::collections::HashMap;
use std::sync::RwLock;

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::{codes, ErrorDetails, ErrorResponse};

/// In-memory session store: token -> operator email.
///
/// Sessions do not survive a process restart; operators simply log in again.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for an authenticated operator and return its token.
    pub fn create(&self, email: &str) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(token.clone(), email.to_string());
        token
    }

    /// Invalidate a session. Unknown tokens are ignored.
    pub fn remove(&self, token: &str) {
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .remove(token);
    }

    /// Look up the operator bound to a token.
    pub fn email_for(&self, token: &str) -> Option<String> {
        self.sessions
            .read()
            .expect("session store lock poisoned")
            .get(token)
            .cloned()
    }
}

/// Verify operator credentials against the configured admin account.
///
/// Both fields are compared in constant time, and the email check does not
/// short-circuit the password check. Returns false when no admin account is
/// configured (login disabled).
pub fn verify_credentials(config: &Config, email: &str, password: &str) -> bool {
    let (Some(expected_email), Some(expected_password)) =
        (&config.admin_email, &config.admin_password)
    else {
        return false;
    };

    let email_ok = constant_time_compare(email, expected_email);
    let password_ok = constant_time_compare(password, expected_password);
    email_ok & password_ok
}

/// Session authentication layer guarding the admin routes.
pub async fn session_auth_layer(
    sessions: std::sync::Arc<SessionStore>,
    request: Request,
    next: Next,
) -> Response {
    match bearer_token(request.headers()) {
        Some(token) if sessions.email_for(&token).is_some() => next.run(request).await,
        Some(_) => unauthorized_response("Invalid or expired session"),
        None => unauthorized_response("Missing session token"),
    }
}

/// Extract the bearer token from the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse {
        success: false,
        error: ErrorDetails {
            code: codes::UNAUTHORIZED.to_string(),
            message: message.to_string(),
        },
    };

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    fn test_config(email: Option<&str>, password: Option<&str>) -> Config {
        Config {
            admin_email: email.map(String::from),
            admin_password: password.map(String::from),
            db_path: PathBuf::from(":memory:"),
            bind_addr: "127.0.0.1:0".parse::<SocketAddr>().unwrap(),
            log_level: "warn".to_string(),
            site_name: "Animo".to_string(),
        }
    }

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("test-key-123", "test-key-123"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("test-key-123", "test-key-124"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-key"));
    }

    #[test]
    fn test_verify_credentials() {
        let config = test_config(Some("admin@example.com"), Some("hunter2"));
        assert!(verify_credentials(&config, "admin@example.com", "hunter2"));
        assert!(!verify_credentials(&config, "admin@example.com", "wrong"));
        assert!(!verify_credentials(&config, "other@example.com", "hunter2"));
    }

    #[test]
    fn test_verify_credentials_unconfigured() {
        let config = test_config(None, None);
        assert!(!verify_credentials(&config, "", ""));
        assert!(!verify_credentials(&config, "admin@example.com", "hunter2"));
    }

    #[test]
    fn test_session_store_lifecycle() {
        let store = SessionStore::new();
        let token = store.create("admin@example.com");
        assert_eq!(store.email_for(&token).as_deref(), Some("admin@example.com"));

        store.remove(&token);
        assert!(store.email_for(&token).is_none());
    }
}
