use crate::{
    env_source::{EnvSource, SystemEnv},
    ConfigError,
};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&SystemEnv)
    }

    pub fn from_source<E: EnvSource>(env: &E) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_source(env)?,
            logging: LoggingConfig::from_source(env),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `SERVER_PORT` wins over `PORT`, which Railway injects into every service.
    pub fn from_source<E: EnvSource>(env: &E) -> Result<Self, ConfigError> {
        let (name, port) = match (env.var("SERVER_PORT"), env.var("PORT")) {
            (Some(port), _) => ("SERVER_PORT", port),
            (None, Some(port)) => ("PORT", port),
            (None, None) => ("SERVER_PORT", "3000".to_string()),
        };

        Ok(Self {
            host: env.var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: port
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name, value: port })?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub modules: HashMap<String, String>,
}

impl LoggingConfig {
    pub fn from_source<E: EnvSource>(env: &E) -> Self {
        let mut modules = HashMap::new();

        // Load module-specific log levels
        if let Some(level) = env.var("LOG_MODULE_API") {
            modules.insert("api".to_string(), level);
        }
        if let Some(level) = env.var("LOG_MODULE_CONFIG") {
            modules.insert("config".to_string(), level);
        }

        Self {
            level: env.var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            format: env.var("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            modules,
        }
    }

    /// Directive string for `tracing_subscriber::EnvFilter`, e.g. `info,api=debug`
    pub fn filter_directive(&self) -> String {
        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();

        let mut filter = self.level.clone();
        for (module, level) in modules {
            filter.push_str(&format!(",{module}={level}"));
        }
        filter
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            modules: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let env: HashMap<&str, &str> = HashMap::new();
        let server = ServerConfig::from_source(&env).unwrap();

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3000);
        assert_eq!(server.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_port_falls_back_to_railway_port() {
        let env = HashMap::from([("PORT", "8080")]);
        assert_eq!(ServerConfig::from_source(&env).unwrap().port, 8080);

        let env = HashMap::from([("PORT", "8080"), ("SERVER_PORT", "9090")]);
        assert_eq!(ServerConfig::from_source(&env).unwrap().port, 9090);
    }

    #[test]
    fn test_invalid_server_port() {
        let env = HashMap::from([("PORT", "70000")]);

        assert_eq!(
            ServerConfig::from_source(&env).unwrap_err(),
            ConfigError::InvalidValue {
                name: "PORT",
                value: "70000".to_string()
            }
        );
    }

    #[test]
    fn test_logging_config_from_source() {
        let env = HashMap::from([
            ("LOG_LEVEL", "warn"),
            ("LOG_FORMAT", "json"),
            ("LOG_MODULE_CONFIG", "trace"),
            ("LOG_MODULE_API", "debug"),
        ]);
        let logging = LoggingConfig::from_source(&env);

        assert_eq!(logging.format, "json");
        assert_eq!(logging.filter_directive(), "warn,api=debug,config=trace");
    }

    #[test]
    fn test_logging_config_defaults() {
        let env: HashMap<&str, &str> = HashMap::new();

        assert_eq!(LoggingConfig::from_source(&env), LoggingConfig::default());
        assert_eq!(LoggingConfig::default().filter_directive(), "info");
    }

    #[test]
    fn test_api_config_from_source() {
        let env = HashMap::from([("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "0")]);
        let config = ApiConfig::from_source(&env).unwrap();

        assert_eq!(config.server.bind_address(), "127.0.0.1:0");
        assert_eq!(config.logging.level, "info");
    }
}
