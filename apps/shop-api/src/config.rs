use axum_helpers::JwtConfig;
use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub order_service_url: String,
    pub product_service_url: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;

        let order_service_url = env_or_default("ORDER_SERVICE_URL", "http://localhost:5000");
        let product_service_url = env_or_default("PRODUCT_SERVICE_URL", "http://localhost:5001");

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            jwt,
            order_service_url,
            product_service_url,
            environment,
        })
    }
}
