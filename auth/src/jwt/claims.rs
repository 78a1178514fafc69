use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Identity claims carried by a bearer token.
///
/// Serialized as `{"user_id": ..., "email": ..., "exp": ...}` where `exp` is
/// the absolute expiry in Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub exp: i64,
}

impl Claims {
    /// Build claims with an explicit expiry timestamp (Unix seconds).
    pub fn new(user_id: impl ToString, email: impl Into<String>, exp: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.into(),
            exp,
        }
    }

    /// Build claims that expire `ttl` after `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - The expiry falls outside the representable range
    pub fn issued_at(
        user_id: impl ToString,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = issued_at.checked_add_signed(ttl).ok_or_else(|| {
            JwtError::EncodingFailed(format!("token lifetime of {} overflows expiry", ttl))
        })?;

        Ok(Self::new(user_id, email, expires_at.timestamp()))
    }

    /// Build claims that expire `ttl` from now.
    pub fn for_user(
        user_id: impl ToString,
        email: impl Into<String>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        Self::issued_at(user_id, email, Utc::now(), ttl)
    }
}
