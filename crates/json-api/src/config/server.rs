//! Listener settings

use clap::Args;

/// Where the back-office API listens.
#[derive(Debug, Args)]
pub struct ListenConfig {
    /// Interface to bind
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to bind
    #[arg(
        short,
        long,
        env = "SERVER_PORT",
        default_value_t = DEFAULT_PORT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,
}

/// Default listener port.
pub const DEFAULT_PORT: u16 = 8000;

impl ListenConfig {
    /// `host:port` for [`salvo::conn::TcpListener`].
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
