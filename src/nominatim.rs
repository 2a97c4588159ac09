//! Nominatim HTTP adapter for geocoding.

use serde::Deserialize;

use crate::error::GeocodeError;
use crate::model::Coordinates;
use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));

        let places = self
            .client
            .get(url)
            .query(&[("format", "json"), ("q", address), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json::<Vec<NominatimPlace>>()?;

        places.into_iter().next().map(NominatimPlace::coordinates).transpose()
    }
}

/// Nominatim returns coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn coordinates(self) -> Result<Coordinates, GeocodeError> {
        let parse = |value: &str| {
            value
                .parse::<f64>()
                .map_err(|_| GeocodeError::InvalidResponse(format!("bad coordinate {:?}", value)))
        };

        Ok(Coordinates::new(parse(&self.lat)?, parse(&self.lon)?))
    }
}
