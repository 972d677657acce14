//! Command-line and environment configuration for the server binary.

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Mock pet API server
#[derive(Parser, Debug)]
#[command(name = "pet-server", version, about = "Mock HTTP endpoints for the pets demo")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "PET_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, env = "PET_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost_3000() {
        let config = ServerConfig::try_parse_from(["pet-server"]).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "pet-server",
            "--host",
            "0.0.0.0",
            "-p",
            "8080",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_port() {
        assert!(ServerConfig::try_parse_from(["pet-server", "--port", "99999"]).is_err());
    }
}
