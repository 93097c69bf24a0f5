//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The two TTLs are independent because the client keeps one cache
/// per content type: location-area pages change rarely, area detail pages
/// even less so.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the PokeAPI endpoint
    pub base_url: String,
    /// Retention interval in seconds for cached location-area pages
    pub location_ttl: u64,
    /// Retention interval in seconds for cached area detail documents
    pub area_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_BASE_URL` - PokeAPI endpoint (default: the public API)
    /// - `POKEDEX_LOCATION_TTL_SECS` - location page retention (default: 300)
    /// - `POKEDEX_AREA_TTL_SECS` - area detail retention (default: 600)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("POKEDEX_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            location_ttl: env::var("POKEDEX_LOCATION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            area_ttl: env::var("POKEDEX_AREA_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
        }
    }

    /// Retention interval for the location-area page cache.
    pub fn location_interval(&self) -> Duration {
        Duration::from_secs(self.location_ttl)
    }

    /// Retention interval for the area detail cache.
    pub fn area_interval(&self) -> Duration {
        Duration::from_secs(self.area_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            location_ttl: 300,
            area_ttl: 600,
        }
    }
}
