//! Signed replay tokens.
//!
//! A report rendered on one request is saved on a later one. The summary
//! travels through the browser in a hidden form field, so it is sealed in an
//! HS256 JWT and only accepted back if the signature, expiry, and month match.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{MAX_REPLAY_TTL_MINUTES, ReplayConfig};

/// Errors that can occur while sealing or opening a replay token.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Token encoding failed.
    #[error("failed to encode report summary: {0}")]
    Encoding(String),

    /// Token is malformed, tampered with, or carries an unexpected payload.
    #[error("invalid report summary: {0}")]
    Decoding(String),

    /// Token has expired.
    #[error("report summary has expired, please reload the report")]
    Expired,

    /// Token was issued for another month.
    #[error("report summary was issued for {issued}, not {submitted}")]
    MonthMismatch {
        /// Month sealed in the token.
        issued: String,
        /// Month submitted alongside the token.
        submitted: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct ReplayClaims<T> {
    month: String,
    iat: i64,
    exp: i64,
    summary: T,
}

/// Seals and opens replay tokens.
#[derive(Clone)]
pub struct ReplayCodec {
    ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for ReplayCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplayCodec")
            .field("ttl", &self.ttl)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl ReplayCodec {
    /// Creates a codec with the given secret and time-to-live.
    #[must_use]
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            ttl,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Creates a codec from configuration.
    ///
    /// Without a configured secret a random one is generated, so tokens do
    /// not survive a restart. The lifetime is clamped to
    /// `1..=MAX_REPLAY_TTL_MINUTES`.
    #[must_use]
    pub fn from_config(config: &ReplayConfig) -> Self {
        let secret = config
            .secret
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple()));
        let ttl_minutes = config.ttl_minutes.clamp(1, MAX_REPLAY_TTL_MINUTES);
        Self::new(&secret, Duration::minutes(ttl_minutes))
    }

    /// Seals a summary for the given month.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::Encoding` if the summary cannot be serialized.
    pub fn seal<T: Serialize>(&self, month: &str, summary: &T) -> Result<String, ReplayError> {
        self.seal_at(month, summary, Utc::now())
    }

    /// Seals a summary as if issued at `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::Encoding` if the summary cannot be serialized.
    pub fn seal_at<T: Serialize>(
        &self,
        month: &str,
        summary: &T,
        issued_at: DateTime<Utc>,
    ) -> Result<String, ReplayError> {
        let claims = ReplayClaims {
            month: month.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
            summary,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ReplayError::Encoding(e.to_string()))
    }

    /// Opens a token and returns its summary, verbatim as sealed.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::Expired` if the token has expired,
    /// `ReplayError::MonthMismatch` if it was sealed for another month, and
    /// `ReplayError::Decoding` for anything malformed or tampered with.
    pub fn open<T: DeserializeOwned>(&self, token: &str, month: &str) -> Result<T, ReplayError> {
        let validation = Validation::default();

        let claims = decode::<ReplayClaims<T>>(token.trim(), &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => ReplayError::Expired,
                _ => ReplayError::Decoding(e.to_string()),
            })?;

        if claims.month != month {
            return Err(ReplayError::MonthMismatch {
                issued: claims.month,
                submitted: month.to_string(),
            });
        }

        Ok(claims.summary)
    }
}
