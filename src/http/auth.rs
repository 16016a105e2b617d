//! Bearer-token authentication and role gating.
//!
//! The platform's auth service issues tokens; this backend only matches
//! them against configured lists and derives a role. Every route except
//! `/health` requires a recognized token; write routes additionally
//! require the admin role.

use std::collections::HashMap;

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};

use super::error::AppError;
use super::state::AppState;
use crate::config::AuthTokens;

/// Caller role derived from the presented token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Teacher,
}

/// Token-to-role lookup built from configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    tokens: HashMap<String, Role>,
}

impl AuthConfig {
    /// Build the lookup from configured token lists. A token present in
    /// both lists is treated as admin.
    pub fn from_tokens(tokens: &AuthTokens) -> Self {
        let mut map = HashMap::new();
        for token in &tokens.teacher_tokens {
            map.insert(token.clone(), Role::Teacher);
        }
        for token in &tokens.admin_tokens {
            map.insert(token.clone(), Role::Admin);
        }
        Self { tokens: map }
    }

    /// Resolve a raw token to its role.
    pub fn role_for(&self, token: &str) -> Option<Role> {
        self.tokens.get(token).copied()
    }

    /// Whether any token is configured at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Authenticated caller, extracted from the `Authorization` header.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub role: Role,
}

impl AuthUser {
    /// Gate for write operations.
    pub fn require_admin(&self) -> Result<(), AppError> {
        match self.role {
            Role::Admin => Ok(()),
            Role::Teacher => Err(AppError::Forbidden(
                "Admin role required for this operation".to_string(),
            )),
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Expected a bearer token".to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let role = state
            .auth
            .role_for(token)
            .ok_or_else(|| AppError::Unauthorized("Unknown bearer token".to_string()))?;
        Ok(AuthUser { role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig::from_tokens(&AuthTokens {
            admin_tokens: vec!["admin-1".to_string()],
            teacher_tokens: vec!["teacher-1".to_string()],
        })
    }

    #[test]
    fn test_role_lookup() {
        let auth = config();
        assert_eq!(auth.role_for("admin-1"), Some(Role::Admin));
        assert_eq!(auth.role_for("teacher-1"), Some(Role::Teacher));
        assert_eq!(auth.role_for("nope"), None);
    }

    #[test]
    fn test_admin_wins_on_duplicate_token() {
        let auth = AuthConfig::from_tokens(&AuthTokens {
            admin_tokens: vec!["shared".to_string()],
            teacher_tokens: vec!["shared".to_string()],
        });
        assert_eq!(auth.role_for("shared"), Some(Role::Admin));
    }

    #[test]
    fn test_require_admin() {
        assert!(AuthUser { role: Role::Admin }.require_admin().is_ok());
        assert!(AuthUser { role: Role::Teacher }.require_admin().is_err());
    }

    #[test]
    fn test_empty_config_rejects_everyone() {
        let auth = AuthConfig::default();
        assert!(auth.is_empty());
        assert_eq!(auth.role_for("anything"), None);
    }
}
