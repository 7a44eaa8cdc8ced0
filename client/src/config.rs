//! Client configuration
use std::env;
use std::time::Duration;

use counterdex_battle::DEFAULT_SPECIES_LIMIT;
use counterdex_protocol::POKEAPI_URL;

/// Settings for [`PokeApiClient`](crate::PokeApiClient) and the battle helper binary.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API root, without the endpoint path
    pub base_url: String,

    pub user_agent: String,

    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,

    /// How many species to recommend per query
    pub species_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            user_agent: concat!("counterdex/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
            species_limit: DEFAULT_SPECIES_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEAPI_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEAPI_TIMEOUT_SECS` - request timeout in seconds (default: none)
    /// - `COUNTERDEX_SPECIES_LIMIT` - recommended species per query (default: 4)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Construct configuration from any key lookup. Values that fail to
    /// parse are ignored, as are an empty URL and a zero timeout.
    pub fn from_vars<F>(vars: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = read_var::<String, _>(&vars, "POKEAPI_URL")
            && !url.is_empty()
        {
            config.base_url = url;
        }

        if let Some(secs) = read_var::<u64, _>(&vars, "POKEAPI_TIMEOUT_SECS")
            && secs > 0
        {
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(limit) = read_var::<usize, _>(&vars, "COUNTERDEX_SPECIES_LIMIT") {
            config.species_limit = limit;
        }

        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn read_var<T, F>(vars: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    vars(key)?.trim().parse().ok()
}
