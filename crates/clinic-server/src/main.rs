//! Binary entry point for the clinic backend API.

use std::net::IpAddr;

use clap::Parser;

use clinic_server::server::{self, config::ServerConfig};

#[derive(Parser)]
#[command(name = "clinic-server")]
#[command(about = "Backend API for the clinic-management web frontend")]
#[command(version)]
struct Cli {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host IP address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Allowed CORS origin for /api routes (repeatable)
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    allow_origins: Vec<String>,

    /// Enable CORS for all origins, without credentials (development mode)
    #[arg(long)]
    cors_all: bool,

    /// Maximum request body size in MB
    #[arg(long, default_value = "10")]
    max_body_size: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let defaults = ServerConfig::default();
    let config = ServerConfig {
        port: cli.port,
        host: cli.host,
        allowed_origins: if cli.allow_origins.is_empty() {
            defaults.allowed_origins
        } else {
            cli.allow_origins
        },
        cors_all: cli.cors_all,
        max_body_size_mb: cli.max_body_size,
    };

    server::start_server(config).await
}
