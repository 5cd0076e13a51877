/**
 * Session Tokens
 *
 * This module issues and verifies the HS256 JWTs handed out on login.
 *
 * # Claims
 *
 * - `userId` - the user's store-assigned identifier
 * - `iat` - issue time (Unix seconds)
 * - `exp` - `iat` + one hour
 *
 * Expiry is checked with zero leeway: a token issued at `T` is accepted
 * strictly before `T + 3600` and rejected from then on.
 */

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifetime of an issued token in seconds
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing or decoding failed (bad signature, malformed token, ...)
    #[error("token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The token's `exp` is not after the check time
    #[error("token expired at {exp}")]
    Expired { exp: i64 },

    /// `userId` is not a UUID
    #[error("invalid user id in token: {0}")]
    InvalidUserId(String),
}

/// Issues and verifies signed session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    /// Create an issuer for the given HS256 secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a token for `user_id`, issued now
    pub fn issue(&self, user_id: uuid::Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Create a token for `user_id` issued at `now`
    pub fn issue_at(&self, user_id: uuid::Uuid, now: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let claims = Claims {
            user_id: user_id.to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature and structure, then check expiry against `now`
    ///
    /// # Errors
    ///
    /// * `TokenError::Jwt` - bad signature, wrong algorithm or malformed token
    /// * `TokenError::Expired` - `now` is at or past `exp`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the caller's clock.
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;
        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired { exp: claims.exp });
        }
        Ok(claims)
    }

    /// Verify a token and extract its user ID
    pub fn user_id_from_token(&self, token: &str) -> Result<uuid::Uuid, TokenError> {
        let claims = self.verify(token)?;
        uuid::Uuid::parse_str(&claims.user_id).map_err(|_| TokenError::InvalidUserId(claims.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Duration;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret")
    }

    #[test]
    fn test_create_token() {
        let token = issuer().issue(uuid::Uuid::new_v4()).unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_token() {
        let user_id = uuid::Uuid::new_v4();
        let token = issuer().issue(user_id).unwrap();

        let claims = issuer().verify(&token).unwrap();
        assert_eq!(claims.user_id, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_get_user_id_from_token() {
        let user_id = uuid::Uuid::new_v4();
        let token = issuer().issue(user_id).unwrap();
        assert_eq!(issuer().user_id_from_token(&token).unwrap(), user_id);
    }

    #[test]
    fn test_claim_is_named_user_id() {
        let token = issuer().issue(uuid::Uuid::new_v4()).unwrap();
        let validation = Validation::new(Algorithm::HS256);
        let raw = decode::<serde_json::Value>(&token, &DecodingKey::from_secret(b"test-secret"), &validation)
            .unwrap()
            .claims;
        assert!(raw.get("userId").is_some());
        assert!(raw.get("user_id").is_none());
    }

    #[test]
    fn test_verify_invalid_token() {
        assert_matches!(issuer().verify("invalid.token.here"), Err(TokenError::Jwt(_)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issuer().issue(uuid::Uuid::new_v4()).unwrap();
        let other = TokenIssuer::new("another-secret");
        assert_matches!(other.verify(&token), Err(TokenError::Jwt(_)));
    }

    #[test]
    fn test_expiry_boundary() {
        let issued = Utc::now();
        let token = issuer().issue_at(uuid::Uuid::new_v4(), issued).unwrap();
        let ttl = Duration::seconds(TOKEN_TTL_SECS);

        assert!(issuer().verify_at(&token, issued).is_ok());
        assert!(issuer().verify_at(&token, issued + ttl - Duration::seconds(1)).is_ok());
        assert_matches!(issuer().verify_at(&token, issued + ttl), Err(TokenError::Expired { .. }));
        assert_matches!(
            issuer().verify_at(&token, issued + ttl + Duration::seconds(1)),
            Err(TokenError::Expired { .. })
        );
    }

    #[test]
    fn test_old_token_rejected_by_verify() {
        let issued = Utc::now() - Duration::seconds(TOKEN_TTL_SECS + 5);
        let token = issuer().issue_at(uuid::Uuid::new_v4(), issued).unwrap();
        assert_matches!(issuer().verify(&token), Err(TokenError::Expired { .. }));
    }
}
