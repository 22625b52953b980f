use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
    /// Largest request body accepted on form submissions, uploads included.
    pub upload_max_bytes: usize,
}

/// Default body limit: 20 MiB.
const DEFAULT_UPLOAD_MAX_BYTES: usize = 20 * 1024 * 1024;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            "staging" => Self::Staging,
            _ => Self::Development,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DATABASE_URL`
    /// Optional with defaults: `SERVER_HOST`, `SERVER_PORT` (or `PORT`), `ENVIRONMENT`,
    /// `LOG_LEVEL`, `UPLOAD_DIR`, `UPLOAD_MAX_BYTES`
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is not set, or if `SERVER_HOST` / `SERVER_PORT` /
    /// `UPLOAD_MAX_BYTES` contain invalid values.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let environment = Environment::parse(
            &std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        );

        // PORT wins over SERVER_PORT, then 3000
        let server_port = std::env::var("PORT")
            .or_else(|_| std::env::var("SERVER_PORT"))
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let default_host = if environment == Environment::Production {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let server_host = std::env::var("SERVER_HOST")
            .unwrap_or_else(|_| default_host.to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map_or_else(|_| PathBuf::from("public/images"), PathBuf::from);

        let upload_max_bytes = match std::env::var("UPLOAD_MAX_BYTES") {
            Ok(value) => value
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("UPLOAD_MAX_BYTES must be a byte count"))?,
            Err(_) => DEFAULT_UPLOAD_MAX_BYTES,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            environment,
            log_level,
            upload_dir,
            upload_max_bytes,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }

    /// Whether error pages may include the full error chain.
    #[must_use]
    pub fn shows_error_detail(&self) -> bool {
        self.environment != Environment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: Environment) -> Config {
        Config {
            database_url: String::new(),
            server_host: IpAddr::from([127, 0, 0, 1]),
            server_port: 3000,
            environment,
            log_level: "info".to_string(),
            upload_dir: PathBuf::from("public/images"),
            upload_max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = config(Environment::Development).socket_addr();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_upload_limit_exceeds_axum_default() {
        assert!(config(Environment::Development).upload_max_bytes > 2 * 1024 * 1024);
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Staging);
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("anything"), Environment::Development);
    }

    #[test]
    fn test_error_detail_hidden_in_production() {
        assert!(config(Environment::Development).shows_error_detail());
        assert!(config(Environment::Staging).shows_error_detail());
        assert!(!config(Environment::Production).shows_error_detail());
    }
}
