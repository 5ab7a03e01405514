use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const ENV_VAR: &str = "NAVIGATOR_ENV";
const HOST_VAR: &str = "NAVIGATOR_HOST";
const PORT_VAR: &str = "NAVIGATOR_PORT";
const LOG_LEVEL_VAR: &str = "NAVIGATOR_LOG_LEVEL";

/// Deployment stage the service is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Runtime settings for the NAVIGATOR service binaries.
///
/// The scoring engine itself takes no configuration: its coefficients and
/// thresholds are fixed.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            AppEnvironment::parse(&env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string()));

        let host = env::var(HOST_VAR).unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var(PORT_VAR) {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            Err(_) => 3000,
        };

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Listener address for the HTTP service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost {
                value: self.host.clone(),
                source,
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort {
        value: String,
    },
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "{PORT_VAR} must be a valid u16 (got '{value}')")
            }
            ConfigError::InvalidHost { value, .. } => {
                write!(f, "{HOST_VAR} must parse to an IPv4 or IPv6 address (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { .. } => None,
            ConfigError::InvalidHost { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for var in [ENV_VAR, HOST_VAR, PORT_VAR, LOG_LEVEL_VAR] {
            env::remove_var(var);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn production_aliases_are_recognised() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var(ENV_VAR, " PROD ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var(PORT_VAR, "eighty");
        let err = AppConfig::load().expect_err("port must be numeric");
        assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "eighty"));
        reset_env();
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var(HOST_VAR, "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_hostnames_that_are_not_ip_addresses() {
        let server = ServerConfig {
            host: "navigator.internal".to_string(),
            port: 8080,
        };
        let err = server.socket_addr().expect_err("hostnames are not resolved");
        assert!(err.to_string().contains("navigator.internal"));
    }
}
