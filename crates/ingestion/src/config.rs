//! Census API configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Default SAIPE time-series endpoint.
pub const DEFAULT_SAIPE_URL: &str = "https://api.census.gov/data/timeseries/poverty/saipe";

/// States missing from the boundary file.
pub const DEFAULT_EXCLUDED_STATES: [&str; 2] = ["AK", "HI"];

/// Settings for the SAIPE client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusConfig {
    /// Census API key
    pub api_key: Option<String>,

    /// SAIPE endpoint
    pub base_url: String,

    /// State abbreviations dropped from every table
    pub excluded_states: Vec<String>,

    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_SAIPE_URL.to_string(),
            excluded_states: DEFAULT_EXCLUDED_STATES.iter().map(|s| s.to_string()).collect(),
            timeout_secs: 60,
        }
    }
}

impl CensusConfig {
    /// Override fields from `CENSUS_API_KEY`, `SAIPE_BASE_URL` and
    /// `EXCLUDED_STATES` (comma separated) when they are set.
    pub fn apply_env(mut self) -> Self {
        if let Ok(key) = env::var("CENSUS_API_KEY") {
            if !key.trim().is_empty() {
                self.api_key = Some(key.trim().to_string());
            }
        }
        if let Ok(url) = env::var("SAIPE_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(states) = env::var("EXCLUDED_STATES") {
            self.excluded_states = parse_state_list(&states);
        }
        self
    }

    pub fn is_excluded(&self, state: &str) -> bool {
        self.excluded_states.iter().any(|s| s.eq_ignore_ascii_case(state))
    }
}

/// Split a comma separated list of state abbreviations.
pub fn parse_state_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|part| part.trim().to_uppercase())
        .filter(|part| !part.is_empty())
        .collect()
}
