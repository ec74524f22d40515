use serde::Deserialize;
use std::env;
use studio_ledger::AdmissionPolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BusinessRules {
    /// Cap on bookings one attendee may hold across all classes; unset means unlimited
    #[serde(default)]
    pub max_bookings_per_email: Option<u32>,
}

impl BusinessRules {
    pub fn admission_policy(&self) -> AdmissionPolicy {
        AdmissionPolicy {
            max_bookings_per_email: self.max_bookings_per_email,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Settings from the environment (with a prefix of STUDIO)
            // Eg. `STUDIO__SERVER__PORT=8081` would set `server.port`
            .add_source(config::Environment::with_prefix("STUDIO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
