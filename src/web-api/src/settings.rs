use carrier_api::CarrierSettings;
use config::{Config, ConfigError, File};
use refresher::RefreshSettings;
use schedule_core::{Environment, LogLevel, ServiceCatalog};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log_level: LogLevel,
    pub environment: Environment,
    pub api: ApiSettings,
    #[serde(default)]
    pub carrier: CarrierSettings,
    pub store: StoreSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
    /// Replaces the built in service catalog when present.
    pub catalog: Option<ServiceCatalog>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub ip: String,
    pub port: u16,
    pub num_workers: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub path: PathBuf,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .map_err(|e| ConfigError::Message(format!("APP_ENVIRONMENT: {e}")))?
            .try_into()
            .unwrap_or(Environment::Test);

        let environment = environment.as_str().to_lowercase();

        Config::builder()
            .add_source(File::with_name(&format!("config/{environment}")).required(true))
            .add_source(File::with_name(&format!("config/{environment}.secret")).required(false))
            .add_source(config::Environment::with_prefix("SA_SCHEDULE").separator("__"))
            .set_override("environment", environment.as_str())?
            .build()?
            .try_deserialize()
    }

    pub fn catalog(&self) -> ServiceCatalog {
        self.catalog.clone().unwrap_or_default()
    }
}

impl ApiSettings {
    pub fn listener_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
