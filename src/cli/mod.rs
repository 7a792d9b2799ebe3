//! Command-line interface.

use clap::Parser;
use console::style;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "geogate")]
#[command(about = "Geocoding proxy that annotates Mapbox results with city and state")]
#[command(version)]
pub struct Cli {
    /// Bind address: a port ("3030"), a host ("0.0.0.0"), or both ("0.0.0.0:3030")
    #[arg(short, long, default_value = "127.0.0.1:3030")]
    bind: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Parse arguments, validate configuration, and start the server.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configuration problems stop the process here, before any request
    // could go out with a missing credential.
    let settings = Settings::from_env()?;
    let (host, port) = parse_bind_address(&cli.bind)?;

    println!(
        "{} Starting geogate at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(&settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "3030" -> 127.0.0.1:3030
/// - Just a host: "0.0.0.0" -> 0.0.0.0:3030
/// - Host and port: "0.0.0.0:3030" -> 0.0.0.0:3030
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), 3030))
}
