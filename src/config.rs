use crate::domain::value_objects::Country;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub default_country: Country,
    pub strict_localization: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            default_country: Country::Usa,
            strict_localization: false,
            debug: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown country code {0:?} in GREETER_DEFAULT_COUNTRY")]
    UnknownCountry(String),
}

pub fn load_config() -> Result<Config, ConfigError> {
    let listen_addr = std::env::var("GREETER_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let default_country = match std::env::var("GREETER_DEFAULT_COUNTRY") {
        Ok(code) => Country::from_code(&code).ok_or(ConfigError::UnknownCountry(code))?,
        Err(_) => Country::Usa,
    };

    let strict_localization = std::env::var("GREETER_STRICT_LOCALIZATION")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        listen_addr,
        default_country,
        strict_localization,
        debug,
    })
}
