//! IPMA open-data client
//!
//! HTTP client for the IPMA district listing and city forecast documents.

use std::collections::BTreeSet;

use async_trait::async_trait;
use domain::{DayForecast, District, DistrictId, Forecast, Locality, WeatherType};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{DailyForecastResponse, LocationListResponse, RawDailyForecast, RawLocation};

/// IPMA client errors
#[derive(Debug, Error)]
pub enum IpmaError {
    /// The HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Transport failure (timeout, DNS, refused connection) or unexpected status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// IPMA has no document for the requested resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// IPMA answered with a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Response body was not the expected document
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// IPMA client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpmaConfig {
    /// IPMA open-data base URL (default: <https://api.ipma.pt/open-data>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.ipma.pt/open-data".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("ipma-proxy/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for IpmaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Source of district, locality and forecast data
#[async_trait]
pub trait WeatherDataClient: Send + Sync {
    /// List the districts present in the upstream listing, sorted by id
    async fn list_districts(&self) -> Result<Vec<District>, IpmaError>;

    /// List localities in upstream order, optionally restricted to one district
    async fn list_localities(
        &self,
        district_id: Option<DistrictId>,
    ) -> Result<Vec<Locality>, IpmaError>;

    /// Get the first `days` days of the forecast for a locality
    async fn get_forecast(&self, locality_id: u32, days: usize) -> Result<Forecast, IpmaError>;

    /// Check if the upstream service is reachable
    async fn is_healthy(&self) -> bool;
}

/// IPMA HTTP client implementation
#[derive(Debug)]
pub struct IpmaClient {
    client: Client,
    config: IpmaConfig,
}

impl IpmaClient {
    /// Create a new IPMA client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: IpmaConfig) -> Result<Self, IpmaError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| IpmaError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// URL of the combined district/island locality listing
    fn locations_url(&self) -> String {
        format!("{}/distrits-islands.json", self.base_url())
    }

    /// URL of the daily city forecast for a locality
    fn forecast_url(&self, locality_id: u32) -> String {
        format!(
            "{}/forecast/meteorology/cities/daily/{locality_id}.json",
            self.base_url()
        )
    }

    /// GET a JSON document and map status codes to `IpmaError`
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, IpmaError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| IpmaError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(IpmaError::NotFound(url.to_string()));
        }
        if status.is_server_error() {
            return Err(IpmaError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(IpmaError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| IpmaError::ParseError(e.to_string()))
    }

    async fn fetch_locations(&self) -> Result<Vec<RawLocation>, IpmaError> {
        let url = self.locations_url();
        debug!(url = %url, "Fetching locality listing");

        let listing: LocationListResponse = self.fetch_json(&url).await?;
        Ok(listing.data)
    }

    /// Distinct, non-zero district ids of the listing, ascending
    fn collect_districts(locations: &[RawLocation]) -> Vec<District> {
        locations
            .iter()
            .filter_map(|loc| loc.district_id)
            .filter_map(|id| DistrictId::try_from(id).ok())
            .filter(|id| *id != 0)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(District::from_id)
            .collect()
    }

    /// Convert listing entries into localities, keeping upstream order
    fn collect_localities(
        locations: Vec<RawLocation>,
        district_id: Option<DistrictId>,
    ) -> Vec<Locality> {
        locations
            .into_iter()
            .filter_map(|loc| {
                let ids = loc.global_id_local.zip(loc.district_id).and_then(|(id, district)| {
                    Some((u32::try_from(id).ok()?, DistrictId::try_from(district).ok()?))
                });
                let Some((id, entry_district)) = ids else {
                    debug!(
                        name = ?loc.name,
                        global_id_local = ?loc.global_id_local,
                        district_id = ?loc.district_id,
                        "Skipping listing entry without usable ids"
                    );
                    return None;
                };

                if district_id.is_some_and(|wanted| wanted != entry_district) {
                    return None;
                }

                Some(Locality::new(
                    id,
                    loc.name.unwrap_or_default(),
                    entry_district,
                    loc.latitude,
                    loc.longitude,
                ))
            })
            .collect()
    }

    /// Map one raw forecast day, resolving the weather description
    fn parse_day(raw: RawDailyForecast) -> DayForecast {
        let weather = WeatherType::from_optional_code(raw.id_weather_type);

        DayForecast {
            wind_speed: raw.wind_speed(),
            wind_direction: raw.wind_direction(),
            date: raw.forecast_date,
            temp_min: raw.t_min,
            temp_max: raw.t_max,
            precipitation_probability: raw.precipita_prob,
            relative_humidity: raw.h_r,
            weather_type_id: raw.id_weather_type,
            weather_description: weather.description().to_string(),
        }
    }
}

#[async_trait]
impl WeatherDataClient for IpmaClient {
    #[instrument(skip(self))]
    async fn list_districts(&self) -> Result<Vec<District>, IpmaError> {
        let locations = self.fetch_locations().await?;
        let districts = Self::collect_districts(&locations);

        debug!(count = districts.len(), "Districts resolved");
        Ok(districts)
    }

    #[instrument(skip(self))]
    async fn list_localities(
        &self,
        district_id: Option<DistrictId>,
    ) -> Result<Vec<Locality>, IpmaError> {
        let locations = self.fetch_locations().await?;
        let localities = Self::collect_localities(locations, district_id);

        debug!(count = localities.len(), "Localities resolved");
        Ok(localities)
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, locality_id: u32, days: usize) -> Result<Forecast, IpmaError> {
        let url = self.forecast_url(locality_id);
        debug!(url = %url, "Fetching city forecast");

        let response: DailyForecastResponse = self.fetch_json(&url).await?;
        let days = response
            .data
            .into_iter()
            .take(days)
            .map(Self::parse_day)
            .collect();

        Ok(Forecast::new(locality_id, days))
    }

    async fn is_healthy(&self) -> bool {
        self.fetch_locations().await.is_ok()
    }
}
