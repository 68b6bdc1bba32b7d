use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when no connection string is configured
    pub mongodb: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    /// Load from the environment.
    ///
    /// A missing `DATABASE_URL` is not an error; the service then starts
    /// without a document store. Malformed values still fail.
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let mongodb = match MongoConfig::from_env() {
            Ok(mongodb) => Some(mongodb),
            Err(e) if e.is_missing() => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }

    /// Whether a store connection string was supplied
    pub fn database_url_set(&self) -> bool {
        self.mongodb.is_some()
    }
}

#[cfg(test)]
impl Config {
    /// Development configuration with no store configured
    pub fn for_tests() -> Self {
        Self {
            app: app_info!(),
            mongodb: None,
            server: ServerConfig::default(),
            environment: Environment::Development,
        }
    }
}
