//! Server configuration module

use std::net::IpAddr;

/// Configuration for the clinic backend HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host IP address to bind to
    pub host: IpAddr,
    /// Origins allowed to call /api routes with credentials
    pub allowed_origins: Vec<String>,
    /// Enable CORS for all origins (development mode)
    pub cors_all: bool,
    /// Maximum request body size in MB
    pub max_body_size_mb: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: [127, 0, 0, 1].into(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            cors_all: false,
            max_body_size_mb: 10,
        }
    }
}

impl ServerConfig {
    /// Get maximum payload size in bytes
    pub fn max_payload_size(&self) -> usize {
        (self.max_body_size_mb as usize) * 1024 * 1024
    }
}
