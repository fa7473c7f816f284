//! Orders Config

use backoffice_app::domain::orders::TransitionPolicy;
use clap::Args;

/// Order lifecycle settings.
#[derive(Debug, Args)]
pub struct OrdersConfig {
    /// Which status changes are accepted (strict, permissive)
    #[arg(
        long = "order-transition-policy",
        env = "ORDER_TRANSITION_POLICY",
        default_value = "strict"
    )]
    pub transition_policy: TransitionPolicy,
}
