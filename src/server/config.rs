use std::str::FromStr;

use crate::server::{error::config::ConfigError, util::geo::NearbyFilter};

/// Default address the HTTP listener binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration read from the process environment.
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    pub nearby: NearbyFilter,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable is present and every value parses
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable holds an unparsable value
    pub fn from_env() -> Result<Self, ConfigError> {
        let radius_km: f64 = optional_var("NEARBY_RADIUS_KM", NearbyFilter::default().radius_km)?;
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "NEARBY_RADIUS_KM".to_string(),
                reason: format!(
                    "radius must be a positive number of kilometres, got {}",
                    radius_km
                ),
            });
        }

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address: optional_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.to_string())?,
            nearby: NearbyFilter {
                radius_km,
                include_closed: optional_var("NEARBY_INCLUDE_CLOSED", false)?,
            },
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
