//! Listening address and log level.
//!
//! Everything comes from command-line flags. Without flags the server
//! listens on `0.0.0.0:5000` and logs at `info`.

use clap::Parser;
use tracing::Level;

/// Address bound when `--host` is not given
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port bound when `--port` is not given
pub const DEFAULT_PORT: u16 = 5000;

/// IMC Server - body-mass index over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "imc_server")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Lowest level logged (trace, debug, info, warn, error)
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: Level::INFO,
        }
    }
}

impl ServerConfig {
    /// `host:port` as passed to the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ServerConfig, clap::Error> {
        ServerConfig::try_parse_from(std::iter::once("imc_server").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr(), "0.0.0.0:5000");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&["--host", "127.0.0.1", "-p", "8080", "--log-level", "debug"]).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_log_level_case_insensitive() {
        assert_eq!(parse(&["--log-level", "WARN"]).unwrap().log_level, Level::WARN);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["--port", "0"]).is_err());
        assert!(parse(&["--port", "70000"]).is_err());
        assert!(parse(&["--log-level", "verbose"]).is_err());
    }

    #[test]
    fn test_unknown_flags_rejected() {
        let err = parse(&["--workers", "4"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
