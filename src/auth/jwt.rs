//! JWT token management
//!
//! Mints access/refresh tokens and verifies them against the process secret.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::fmt;

use crate::auth::types::{JwtClaims, TokenKind, TokenPair, TokenPayload};
use crate::config::JwtConfig;
use crate::error::{AppError, Result};
use crate::logging::{LogComponent, LogStage};
use crate::{ldebug, lwarn};

/// Why a token failed verification. Only ever logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    Expired,
    BadSignature,
    Malformed(String),
    Other(String),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expired => f.write_str("token expired"),
            Self::BadSignature => f.write_str("signature mismatch"),
            Self::Malformed(detail) => write!(f, "malformed token: {detail}"),
            Self::Other(detail) => write!(f, "verification failed: {detail}"),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for VerifyError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_)
            | ErrorKind::MissingRequiredClaim(_) => Self::Malformed(err.to_string()),
            _ => Self::Other(err.to_string()),
        }
    }
}

/// JWT token manager
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: i64,
    refresh_ttl: i64,
}

impl fmt::Debug for JwtManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtManager")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtManager {
    /// Create new JWT manager. An empty secret is a fatal configuration error.
    pub fn new(config: &JwtConfig) -> Result<Self> {
        if config.secret.trim().is_empty() {
            return Err(AppError::config(
                "JWT_SECRET 未配置，无法签发或校验令牌",
            ));
        }

        let access_ttl = config.access_ttl()?.num_seconds();
        let refresh_ttl = config.refresh_ttl()?.num_seconds();

        let mut validation = Validation::new(Algorithm::HS256);
        // exp is checked against our own clock in `decode_at`
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            access_ttl,
            refresh_ttl,
        })
    }

    /// Generate access token
    pub fn mint_access(&self, uid: i32) -> Result<String> {
        self.mint_at(uid, TokenKind::Access, Utc::now().timestamp())
    }

    /// Generate refresh token
    pub fn mint_refresh(&self, uid: i32) -> Result<String> {
        self.mint_at(uid, TokenKind::Refresh, Utc::now().timestamp())
    }

    /// Generate access + refresh tokens for the same subject
    pub fn mint_pair(&self, uid: i32) -> Result<TokenPair> {
        Ok(TokenPair {
            access_token: self.mint_access(uid)?,
            refresh_token: self.mint_refresh(uid)?,
        })
    }

    /// Sign a token as if issued at `issued_at` (unix seconds)
    pub fn mint_at(&self, uid: i32, kind: TokenKind, issued_at: i64) -> Result<String> {
        let lifetime = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };
        let claims = JwtClaims::new(uid, kind, issued_at, lifetime);
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Verify a token. Any failure collapses to `None`; the cause is logged.
    #[must_use]
    pub fn verify(&self, token: &str) -> Option<TokenPayload> {
        match self.decode(token) {
            Ok(payload) => Some(payload),
            Err(VerifyError::Expired) => {
                ldebug!(
                    "system",
                    LogStage::Authentication,
                    LogComponent::Jwt,
                    "verify_token",
                    "token rejected: expired"
                );
                None
            }
            Err(err) => {
                lwarn!(
                    "system",
                    LogStage::Authentication,
                    LogComponent::Jwt,
                    "verify_token",
                    format!("token rejected: {err}")
                );
                None
            }
        }
    }

    pub(crate) fn decode(&self, token: &str) -> std::result::Result<TokenPayload, VerifyError> {
        self.decode_at(token, Utc::now().timestamp())
    }

    /// Validate signature and expiry against `now`. Invalid at and after `exp`.
    pub(crate) fn decode_at(
        &self,
        token: &str,
        now: i64,
    ) -> std::result::Result<TokenPayload, VerifyError> {
        let claims = decode::<JwtClaims>(token, &self.decoding_key, &self.validation)?.claims;
        if now >= claims.exp {
            return Err(VerifyError::Expired);
        }
        Ok(claims.into())
    }

    #[must_use]
    pub const fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl
    }

    #[must_use]
    pub const fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_manager() -> JwtManager {
        JwtManager::new(&JwtConfig {
            secret: "test-secret-key-for-jwt-testing".to_string(),
            access_token_expires: "1h".to_string(),
            refresh_token_expires: "7d".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let err = JwtManager::new(&JwtConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));

        let blank = JwtConfig {
            secret: "   ".to_string(),
            ..JwtConfig::default()
        };
        assert!(JwtManager::new(&blank).is_err());
    }

    #[test]
    fn test_access_token_round_trip() {
        let manager = create_test_manager();
        let token = manager.mint_access(42).unwrap();

        let payload = manager.verify(&token).unwrap();
        assert_eq!(payload.subject, 42);
        assert_eq!(payload.kind, TokenKind::Access);
        assert_eq!(payload.expires_at - payload.issued_at, 3_600);
        assert_eq!(manager.access_ttl_seconds(), 3_600);
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let manager = create_test_manager();
        let token = manager.mint_refresh(42).unwrap();

        let payload = manager.verify(&token).unwrap();
        assert_eq!(payload.subject, 42);
        assert_eq!(payload.kind, TokenKind::Refresh);
        assert_eq!(
            payload.expires_at - payload.issued_at,
            manager.refresh_ttl_seconds()
        );
    }

    #[test]
    fn test_expiry_boundary() {
        let manager = create_test_manager();
        let issued_at = 1_700_000_000;
        let token = manager.mint_at(1, TokenKind::Access, issued_at).unwrap();

        assert!(manager.decode_at(&token, issued_at + 3_599).is_ok());
        assert_eq!(
            manager.decode_at(&token, issued_at + 3_600),
            Err(VerifyError::Expired)
        );
        assert_eq!(
            manager.decode_at(&token, issued_at + 7_200),
            Err(VerifyError::Expired)
        );
    }

    #[test]
    fn test_expired_token_verifies_to_none() {
        let manager = create_test_manager();
        let two_hours_ago = Utc::now().timestamp() - 7_200;
        let token = manager.mint_at(1, TokenKind::Access, two_hours_ago).unwrap();
        assert!(manager.verify(&token).is_none());
    }

    #[test]
    fn test_wrong_secret_is_bad_signature() {
        let manager = create_test_manager();
        let other = JwtManager::new(&JwtConfig {
            secret: "another-secret".to_string(),
            ..JwtConfig::default()
        })
        .unwrap();

        let token = other.mint_access(1).unwrap();
        assert_eq!(manager.decode(&token), Err(VerifyError::BadSignature));
        assert!(manager.verify(&token).is_none());
    }

    #[test]
    fn test_garbage_is_malformed() {
        let manager = create_test_manager();
        assert!(matches!(
            manager.decode("invalid-token"),
            Err(VerifyError::Malformed(_))
        ));
        assert!(manager.verify("").is_none());
    }

    #[test]
    fn test_older_refresh_token_stays_valid() {
        let manager = create_test_manager();
        let now = Utc::now().timestamp();
        let older = manager.mint_at(5, TokenKind::Refresh, now - 600).unwrap();
        let newer = manager.mint_at(5, TokenKind::Refresh, now).unwrap();

        assert_ne!(older, newer);
        assert_eq!(manager.verify(&older).unwrap().subject, 5);
        assert_eq!(manager.verify(&newer).unwrap().subject, 5);
    }
}
