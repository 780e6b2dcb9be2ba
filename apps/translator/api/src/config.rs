use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, server::ServerConfig};

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            environment: Environment::Development,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars_unset(["APP_ENV", "HOST", "PORT", "CORS_ALLOWED_ORIGIN"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "translator_api");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.cors, CorsConfig::default());
            assert_eq!(config.environment, Environment::Development);
        });
    }

    #[test]
    fn test_config_from_env_propagates_bad_port() {
        temp_env::with_var("PORT", Some("http"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
