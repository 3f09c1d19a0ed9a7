//! Forecast entities

use serde::{Deserialize, Serialize};

/// Weather prediction for a single day
///
/// Every measurement is optional because IPMA omits fields it has no
/// value for; missing values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Forecast date as sent by IPMA (`YYYY-MM-DD`)
    #[serde(rename = "data")]
    pub date: Option<String>,
    /// Minimum temperature in Celsius
    #[serde(rename = "temperatura_minima")]
    pub temp_min: Option<f64>,
    /// Maximum temperature in Celsius
    #[serde(rename = "temperatura_maxima")]
    pub temp_max: Option<f64>,
    /// Precipitation probability percentage
    #[serde(rename = "probabilidade_precipitacao")]
    pub precipitation_probability: Option<f64>,
    /// Wind speed (IPMA value or speed class)
    #[serde(rename = "vento_velocidade")]
    pub wind_speed: Option<f64>,
    /// Predominant wind direction (`N`, `NE`, ...)
    #[serde(rename = "vento_direcao")]
    pub wind_direction: Option<String>,
    /// Relative humidity percentage
    #[serde(rename = "humidade_relativa")]
    pub relative_humidity: Option<f64>,
    /// IPMA `idWeatherType`
    #[serde(rename = "id_tempo")]
    pub weather_type_id: Option<i64>,
    /// Description resolved from the weather-type table
    #[serde(rename = "descricao_tempo")]
    pub weather_description: String,
}

/// Multi-day forecast for one locality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Locality the forecast belongs to
    #[serde(rename = "localidade_id")]
    pub locality_id: u32,
    /// Days in upstream order
    #[serde(rename = "previsoes")]
    pub days: Vec<DayForecast>,
    /// Number of entries in `days`
    #[serde(rename = "total_dias")]
    pub total_days: usize,
}

impl Forecast {
    /// Create a forecast; `total_days` always equals `days.len()`
    #[must_use]
    pub fn new(locality_id: u32, days: Vec<DayForecast>) -> Self {
        let total_days = days.len();
        Self {
            locality_id,
            days,
            total_days,
        }
    }
}
