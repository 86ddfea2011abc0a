use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ENVIRONMENT: &str = "production";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not in the correct format: {value:?}")]
    Malformed { var: &'static str, value: String },
}

/// Server settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub environment: String,
    /// `None` (or a `*` entry) allows any origin
    pub cors_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: Ipv4Addr = match lookup("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Malformed { var: "HOST", value })?,
            None => Ipv4Addr::UNSPECIFIED,
        };

        let port: u16 = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Malformed { var: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let environment = lookup("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let cors_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(value) => {
                let origins: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect();
                if let Some(bad) = origins.iter().find(|o| HeaderValue::from_str(o).is_err()) {
                    return Err(ConfigError::Malformed {
                        var: "CORS_ALLOWED_ORIGINS",
                        value: bad.clone(),
                    });
                }
                let wildcard = origins.iter().any(|o| o == "*");
                (!origins.is_empty() && !wildcard).then_some(origins)
            }
            None => None,
        };

        Ok(Config {
            host,
            port,
            environment,
            cors_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let origin = match &self.cors_origins {
            Some(origins) => AllowOrigin::list(
                origins
                    .iter()
                    .filter_map(|o| HeaderValue::from_str(o).ok()),
            ),
            None => AllowOrigin::from(Any),
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 8000)));
        assert_eq!(config.environment, "production");
        assert_eq!(config.cors_origins, None);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3001"),
            ("APP_ENV", "development"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://mindstats.app ,"),
        ])
        .unwrap();

        assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 3001)));
        assert_eq!(config.environment, "development");
        assert_eq!(
            config.cors_origins,
            Some(vec![
                "http://localhost:3000".to_string(),
                "https://mindstats.app".to_string(),
            ])
        );
    }

    #[test]
    fn rejects_malformed_port() {
        assert_eq!(
            config(&[("PORT", "eighty")]),
            Err(ConfigError::Malformed { var: "PORT", value: "eighty".to_string() })
        );
    }

    #[test]
    fn rejects_malformed_host() {
        assert!(matches!(
            config(&[("HOST", "localhost")]),
            Err(ConfigError::Malformed { var: "HOST", .. })
        ));
    }

    #[test]
    fn blank_or_wildcard_origin_list_allows_any() {
        assert_eq!(config(&[("CORS_ALLOWED_ORIGINS", " , ")]).unwrap().cors_origins, None);
        assert_eq!(config(&[("CORS_ALLOWED_ORIGINS", "*")]).unwrap().cors_origins, None);
    }
}
