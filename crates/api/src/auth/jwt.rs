//! Access and refresh token handling.
//!
//! Access tokens are short-lived HS256 JWTs carrying [`Claims`]. Refresh
//! tokens are opaque random strings: the client holds the plaintext and the
//! `user_sessions` table holds only its SHA-256 digest.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use acadex_core::types::DbId;

/// Payload of every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The account's database id.
    pub sub: DbId,
    /// Role name at issue time (`"admin"`, `"teacher"`, `"student"`).
    pub role: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Random token id, usable for audit trails.
    pub jti: String,
}

/// Signing key and token lifetimes.
///
/// | Env var                | Default | Notes                 |
/// |------------------------|---------|-----------------------|
/// | `JWT_SECRET`           | none    | required, non-empty   |
/// | `JWT_ACCESS_TTL_MINS`  | `15`    | access token lifetime |
/// | `JWT_REFRESH_TTL_DAYS` | `7`     | session lifetime      |
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_ttl_mins: i64,
    pub refresh_ttl_days: i64,
}

impl JwtConfig {
    /// Read the signing configuration from the environment. Panics when
    /// `JWT_SECRET` is missing or empty; the server must not start with an
    /// unsigned-token configuration.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self {
            secret,
            access_ttl_mins: ttl_from_env("JWT_ACCESS_TTL_MINS", 15),
            refresh_ttl_days: ttl_from_env("JWT_REFRESH_TTL_DAYS", 7),
        }
    }

    /// Sign a fresh access token for a user.
    pub fn issue_access_token(
        &self,
        user_id: DbId,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role: role.to_string(),
            exp: iat + self.access_ttl_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Check a token's signature and expiry, returning its claims.
    pub fn decode_access_token(
        &self,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

fn ttl_from_env(name: &str, default: i64) -> i64 {
    std::env::var(name)
        .map(|raw| {
            raw.parse()
                .unwrap_or_else(|e| panic!("{name} is not valid: {e}"))
        })
        .unwrap_or(default)
}

/// Create a refresh token, returning `(plaintext, digest)`.
///
/// Hand the plaintext to the client and persist only the digest.
pub fn mint_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let digest = refresh_token_digest(&plaintext);
    (plaintext, digest)
}

/// SHA-256 hex digest of a refresh token, the form stored in
/// `user_sessions.refresh_token_hash`.
pub fn refresh_token_digest(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "a-unit-test-secret-of-reasonable-length".into(),
            access_ttl_mins: 15,
            refresh_ttl_days: 7,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let cfg = config();
        let token = cfg.issue_access_token(42, "teacher").unwrap();
        let claims = cfg.decode_access_token(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "teacher");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = config().issue_access_token(1, "student").unwrap();

        let other = JwtConfig {
            secret: "an-entirely-different-secret".into(),
            ..config()
        };
        assert!(other.decode_access_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let cfg = config();
        // Build claims whose expiry is far enough in the past to clear the
        // default 60s leeway.
        let iat = chrono::Utc::now().timestamp() - 600;
        let claims = Claims {
            sub: 1,
            role: "student".into(),
            exp: iat + 120,
            iat,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.secret.as_bytes()),
        )
        .unwrap();

        assert!(cfg.decode_access_token(&token).is_err());
    }

    #[test]
    fn refresh_digest_is_stable_hex() {
        let (plaintext, digest) = mint_refresh_token();
        assert_eq!(digest, refresh_token_digest(&plaintext));
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
