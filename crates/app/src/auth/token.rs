//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs carrying the subject (a user's email), the issue
//! time and the expiry. The signing secret is supplied once at startup.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroize;

/// Lifetime of interactive access tokens unless configured otherwise.
pub const DEFAULT_TOKEN_TTL: SignedDuration = SignedDuration::from_mins(30);

/// Lifetime for tokens minted for non-interactive use.
pub const SHORT_LIVED_TOKEN_TTL: SignedDuration = SignedDuration::from_mins(15);

/// HMAC signing secret. Zeroized on drop and never printed.
#[derive(Clone)]
pub struct TokenSecret {
    bytes: Vec<u8>,
}

impl TokenSecret {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<String> for TokenSecret {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(**redacted**)")
    }
}

impl Drop for TokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Registered claims carried by every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Any reason a presented token is not acceptable: bad signature, wrong
/// algorithm, malformed, missing claims or expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid token")]
pub struct InvalidToken;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token lifetime is out of range")]
    Lifetime(#[source] jiff::Error),

    #[error("token signing failed")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: SignedDuration,
}

impl TokenService {
    #[must_use]
    pub fn new(secret: TokenSecret, default_ttl: SignedDuration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);

        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            default_ttl,
        }
    }

    #[must_use]
    pub const fn default_ttl(&self) -> SignedDuration {
        self.default_ttl
    }

    /// Sign a token for `subject` valid for `ttl` from now, or for the
    /// default lifetime when `ttl` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the expiry overflows or signing fails.
    pub fn issue(
        &self,
        subject: &str,
        ttl: Option<SignedDuration>,
    ) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, Timestamp::now(), ttl)
    }

    /// Like [`TokenService::issue`] with an explicit issue time.
    ///
    /// # Errors
    ///
    /// Returns an error if the expiry overflows or signing fails.
    pub fn issue_at(
        &self,
        subject: &str,
        issued_at: Timestamp,
        ttl: Option<SignedDuration>,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = issued_at
            .checked_add(ttl.unwrap_or(self.default_ttl))
            .map_err(TokenError::Lifetime)?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.as_second(),
            exp: expires_at.as_second(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Check a presented token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidToken`] for every kind of rejection.
    pub fn verify(&self, token: &str) -> Result<Claims, InvalidToken> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| InvalidToken)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &Algorithm::HS256)
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}
