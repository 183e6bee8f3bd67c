//! Census SAIPE (Small Area Income and Poverty Estimates) county rates.
//!
//! The time-series endpoint answers with a JSON array of string arrays; the
//! first row names the columns:
//!
//! ```text
//! [["NAME","STABREV","COUNTY","SAEPOVRTALL_PT","time","state","county"],
//!  ["Lane County","OR","039","15.9","2015","41","039"], ...]
//! ```

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Url;
use tracing::{debug, info, warn};

use crate::config::CensusConfig;
use crate::error::{IngestionError, Result};

/// Variables requested from the API.
pub const SAIPE_FIELDS: &str = "NAME,STABREV,COUNTY,SAEPOVRTALL_PT";

const NAME_COLUMN: &str = "NAME";
const STATE_COLUMN: &str = "STABREV";
const RATE_COLUMN: &str = "SAEPOVRTALL_PT";

/// Poverty percentage by state abbreviation, then county name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PovertyTable {
    rates: HashMap<String, HashMap<String, f64>>,
}

impl PovertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a county's rate.
    pub fn insert(&mut self, state: &str, county: &str, rate: f64) {
        self.rates
            .entry(state.to_string())
            .or_default()
            .insert(county.to_string(), rate);
    }

    /// Rate for a county, if the table has one.
    pub fn lookup(&self, state: &str, county: &str) -> Option<f64> {
        self.rates.get(state)?.get(county).copied()
    }

    /// Rate for a county, 0 when the county is missing.
    pub fn metric_for(&self, state: &str, county: &str) -> f64 {
        self.lookup(state, county).unwrap_or(0.0)
    }

    /// Number of counties across all states.
    pub fn len(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a table from decoded API rows (header first).
    ///
    /// Rows from `excluded` states and rows without a usable rate are dropped.
    pub fn from_rows(rows: &[Vec<Option<String>>], config: &CensusConfig) -> Result<Self> {
        let (header, body) = rows
            .split_first()
            .ok_or_else(|| IngestionError::InvalidResponse("empty response".to_string()))?;

        let column = |name: &str| {
            header
                .iter()
                .position(|h| h.as_deref() == Some(name))
                .ok_or_else(|| IngestionError::InvalidResponse(format!("missing column {}", name)))
        };
        let name_idx = column(NAME_COLUMN)?;
        let state_idx = column(STATE_COLUMN)?;
        let rate_idx = column(RATE_COLUMN)?;

        let mut table = Self::new();
        let mut skipped = 0usize;
        for row in body {
            let field = |idx: usize| row.get(idx).and_then(|v| v.as_deref());
            let (Some(name), Some(state)) = (field(name_idx), field(state_idx)) else {
                skipped += 1;
                continue;
            };
            if config.is_excluded(state) {
                continue;
            }
            let rate = field(rate_idx)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite());
            match rate {
                Some(rate) => table.insert(state, &county_from_name(name), rate),
                None => {
                    warn!(county = %name, state = %state, "Skipping county without a poverty rate");
                    skipped += 1;
                }
            }
        }

        debug!(counties = table.len(), skipped, "Built poverty table");
        Ok(table)
    }

    /// Build a table from a raw JSON response body.
    pub fn from_json(body: &str, config: &CensusConfig) -> Result<Self> {
        let rows: Vec<Vec<Option<String>>> = serde_json::from_str(body)?;
        Self::from_rows(&rows, config)
    }
}

/// County name as used by the boundary file: the API name minus its last
/// word ("Lane County" becomes "Lane", "St. Louis city" becomes "St. Louis").
pub fn county_from_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.split_last() {
        Some((_, rest)) => rest.join(" "),
        None => String::new(),
    }
}

/// Client for the SAIPE time-series endpoint.
pub struct SaipeClient {
    client: reqwest::Client,
    config: CensusConfig,
}

impl SaipeClient {
    pub fn new(config: CensusConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Request URL for every county in every state for `year`.
    pub fn request_url(&self, year: i32) -> Result<Url> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(IngestionError::MissingApiKey)?;
        let year = year.to_string();
        Url::parse_with_params(
            &self.config.base_url,
            &[
                ("get", SAIPE_FIELDS),
                ("time", year.as_str()),
                ("for", "county:*"),
                ("in", "state:*"),
                ("key", key),
            ],
        )
        .map_err(|e| IngestionError::InvalidConfig(format!("bad SAIPE URL: {}", e)))
    }

    /// Fetch the poverty table for one year.
    pub async fn fetch_year(&self, year: i32) -> Result<PovertyTable> {
        let url = self.request_url(year)?;
        info!(year, "Fetching SAIPE county poverty rates");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let table = PovertyTable::from_json(&body, &self.config)?;
        info!(year, counties = table.len(), "Loaded SAIPE poverty rates");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    fn header() -> Vec<Option<String>> {
        row(&["NAME", "STABREV", "COUNTY", "SAEPOVRTALL_PT", "time", "state", "county"])
    }

    #[test]
    fn test_county_from_name() {
        assert_eq!(county_from_name("Lane County"), "Lane");
        assert_eq!(county_from_name("St. Louis city"), "St. Louis");
        assert_eq!(county_from_name("East Baton Rouge Parish"), "East Baton Rouge");
        assert_eq!(county_from_name("Alone"), "");
        assert_eq!(county_from_name(""), "");
    }

    #[test]
    fn test_first_county_of_a_state_is_kept() {
        let rows = vec![
            header(),
            row(&["Lane County", "OR", "039", "15.9", "2015", "41", "039"]),
            row(&["Linn County", "OR", "043", "14.1", "2015", "41", "043"]),
        ];
        let table = PovertyTable::from_rows(&rows, &CensusConfig::default()).unwrap();
        assert_eq!(table.lookup("OR", "Lane"), Some(15.9));
        assert_eq!(table.lookup("OR", "Linn"), Some(14.1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_county_defaults_to_zero() {
        let table = PovertyTable::new();
        assert_eq!(table.lookup("OR", "Lane"), None);
        assert_eq!(table.metric_for("OR", "Lane"), 0.0);
    }

    #[test]
    fn test_null_rate_is_skipped() {
        let mut bad = row(&["Kalawao County", "OR", "005", "", "2015", "41", "005"]);
        bad[3] = None;
        let rows = vec![header(), bad];
        let table = PovertyTable::from_rows(&rows, &CensusConfig::default()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let rows = vec![row(&["NAME", "STABREV"])];
        let err = PovertyTable::from_rows(&rows, &CensusConfig::default()).unwrap_err();
        assert!(matches!(err, IngestionError::InvalidResponse(_)));
    }

    #[test]
    fn test_request_url_requires_key() {
        let client = SaipeClient::new(CensusConfig::default()).unwrap();
        assert!(matches!(
            client.request_url(2015),
            Err(IngestionError::MissingApiKey)
        ));
    }

    #[test]
    fn test_request_url_query() {
        let config = CensusConfig {
            api_key: Some("abc123".to_string()),
            ..CensusConfig::default()
        };
        let client = SaipeClient::new(config).unwrap();
        let url = client.request_url(2015).unwrap();
        let query: HashMap<String, String> = url.query_pairs().into_owned().collect();

        assert_eq!(url.host_str(), Some("api.census.gov"));
        assert_eq!(query["get"], SAIPE_FIELDS);
        assert_eq!(query["time"], "2015");
        assert_eq!(query["for"], "county:*");
        assert_eq!(query["in"], "state:*");
        assert_eq!(query["key"], "abc123");
    }
}
