//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::parser::INITIAL_BUFFER_SIZE;

/// Port used by [`ServerConfig::default`].
pub const DEFAULT_PORT: u16 = 42069;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The initial size of each connection's read buffer. It doubles as needed.
    pub read_buffer_size: usize,
    /// How long to wait after responding before closing the connection.
    pub close_delay: Duration,
}

impl ServerConfig {
    /// Default configuration listening on all interfaces at `port`.
    pub fn with_port(port: u16) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            read_buffer_size: INITIAL_BUFFER_SIZE,
            close_delay: Duration::from_millis(50),
        }
    }
}
