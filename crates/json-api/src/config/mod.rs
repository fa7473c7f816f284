//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    orders::OrdersConfig,
    server::ListenConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod orders;
pub(crate) mod server;

/// Back-office JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "backoffice-json", about = "Back-office JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Metrics and request logging settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Access token settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Order lifecycle settings.
    #[command(flatten)]
    pub orders: OrdersConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use backoffice_app::domain::orders::TransitionPolicy;
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 5] = [
        "backoffice-json",
        "--database-url",
        "postgres://localhost/backoffice",
        "--jwt-secret",
        "s3cret",
    ];

    #[test]
    fn defaults_apply_when_only_required_values_given() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8000");
        assert_eq!(config.auth.access_token_ttl_minutes, 30);
        assert_eq!(config.orders.transition_policy, TransitionPolicy::Strict);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn permissive_policy_can_be_selected() -> TestResult {
        let config = ServerConfig::try_parse_from(
            REQUIRED
                .into_iter()
                .chain(["--order-transition-policy", "permissive"]),
        )?;

        assert_eq!(config.orders.transition_policy, TransitionPolicy::Permissive);

        Ok(())
    }

    #[test]
    fn empty_jwt_secret_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "backoffice-json",
            "--database-url",
            "postgres://localhost/backoffice",
            "--jwt-secret",
            "",
        ]);

        assert!(result.is_err(), "an empty signing secret must not be accepted");
    }

    #[test]
    fn zero_token_ttl_is_rejected() {
        let result = ServerConfig::try_parse_from(
            REQUIRED
                .into_iter()
                .chain(["--access-token-ttl-minutes", "0"]),
        );

        assert!(result.is_err(), "tokens must live for at least a minute");
    }

    #[test]
    fn port_can_be_overridden_but_not_zeroed() -> TestResult {
        let config =
            ServerConfig::try_parse_from(REQUIRED.into_iter().chain(["--port", "9100"]))?;

        assert_eq!(config.socket_addr(), "0.0.0.0:9100");
        assert!(
            ServerConfig::try_parse_from(REQUIRED.into_iter().chain(["--port", "0"])).is_err(),
            "port zero would bind a random port"
        );

        Ok(())
    }
}
