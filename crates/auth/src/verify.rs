//! Token verification boundary.
//!
//! The identity provider is an external collaborator: it issues tokens and
//! owns credentials. This module only defines the seam the HTTP layer calls
//! through, plus a static implementation for tests and local development.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use petcare_domain::UserRole;

/// Profile returned by the identity provider for a valid token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedProfile {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Provider-side role code, e.g. "PET_OWNER" or "PROVIDER".
    pub role: String,
    pub is_verified: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Missing, malformed, or expired token.
    #[error("invalid or expired token")]
    InvalidToken,

    /// The provider could not be reached or answered unexpectedly.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Seam to the external identity provider.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<VerifiedProfile, VerifyError>;
}

/// Fixed token → profile table. Test/dev double for the real provider.
#[derive(Debug, Default)]
pub struct StaticTokenVerifier {
    profiles: HashMap<String, VerifiedProfile>,
}

impl StaticTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, profile: VerifiedProfile) -> Self {
        self.profiles.insert(token.into(), profile);
        self
    }
}

impl TokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> Result<VerifiedProfile, VerifyError> {
        self.profiles
            .get(token)
            .cloned()
            .ok_or(VerifyError::InvalidToken)
    }
}

/// Map a provider role code onto the domain role. Unknown codes default to
/// pet owner.
pub fn role_from_code(code: &str) -> UserRole {
    match code {
        "PROVIDER" | "SERVICE_PROVIDER" => UserRole::Provider,
        _ => UserRole::Owner,
    }
}
