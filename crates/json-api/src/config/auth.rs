//! Auth Config

use std::fmt;

use backoffice_app::auth::{TokenSecret, TokenService};
use clap::{Args, builder::NonEmptyStringValueParser};
use jiff::SignedDuration;

/// Access token settings.
#[derive(Args)]
pub struct AuthConfig {
    /// HS256 signing secret for access tokens
    #[arg(
        long,
        env = "JWT_SECRET",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    #[arg(
        long,
        env = "ACCESS_TOKEN_TTL_MINUTES",
        default_value_t = 30,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub access_token_ttl_minutes: u32,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"**redacted**")
            .field("access_token_ttl_minutes", &self.access_token_ttl_minutes)
            .finish()
    }
}

impl AuthConfig {
    /// Build the token service. The secret is moved into it and not kept
    /// in configuration afterwards.
    pub fn token_service(&mut self) -> TokenService {
        let secret = TokenSecret::from(std::mem::take(&mut self.jwt_secret));

        TokenService::new(
            secret,
            SignedDuration::from_mins(i64::from(self.access_token_ttl_minutes)),
        )
    }
}
