//! IPMA wire models
//!
//! Raw documents as served by the IPMA open-data API. IPMA is inconsistent
//! about numeric encoding (`"tMin": "8.4"` next to `"idWeatherType": 2`),
//! so numeric fields accept either a JSON number or a numeric string.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw `distrits-islands.json` document
#[derive(Debug, Clone, Deserialize)]
pub struct LocationListResponse {
    pub data: Vec<RawLocation>,
}

/// One entry of the district/island locality listing
#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    #[serde(rename = "globalIdLocal", default, deserialize_with = "lenient_i64")]
    pub global_id_local: Option<i64>,
    #[serde(rename = "local", default)]
    pub name: Option<String>,
    #[serde(rename = "idDistrito", default, deserialize_with = "lenient_i64")]
    pub district_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

/// Raw `forecast/meteorology/cities/daily/{id}.json` document
#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecastResponse {
    pub data: Vec<RawDailyForecast>,
}

/// One day of a raw city forecast
///
/// Wind and humidity appear as `ffVento`/`ddVento`/`hR` in some IPMA
/// products and as `classWindSpeed`/`predWindDir` in the city daily
/// product, so both spellings are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyForecast {
    #[serde(rename = "forecastDate", default)]
    pub forecast_date: Option<String>,
    #[serde(rename = "tMin", default, deserialize_with = "lenient_f64")]
    pub t_min: Option<f64>,
    #[serde(rename = "tMax", default, deserialize_with = "lenient_f64")]
    pub t_max: Option<f64>,
    #[serde(rename = "precipitaProb", default, deserialize_with = "lenient_f64")]
    pub precipita_prob: Option<f64>,
    #[serde(rename = "ffVento", default, deserialize_with = "lenient_f64")]
    pub ff_vento: Option<f64>,
    #[serde(rename = "classWindSpeed", default, deserialize_with = "lenient_f64")]
    pub class_wind_speed: Option<f64>,
    #[serde(rename = "ddVento", default)]
    pub dd_vento: Option<String>,
    #[serde(rename = "predWindDir", default)]
    pub pred_wind_dir: Option<String>,
    #[serde(rename = "hR", default, deserialize_with = "lenient_f64")]
    pub h_r: Option<f64>,
    #[serde(rename = "idWeatherType", default, deserialize_with = "lenient_i64")]
    pub id_weather_type: Option<i64>,
}

impl RawDailyForecast {
    /// Wind speed, preferring the measured value over the speed class
    pub fn wind_speed(&self) -> Option<f64> {
        self.ff_vento.or(self.class_wind_speed)
    }

    /// Wind direction from whichever field is present
    pub fn wind_direction(&self) -> Option<String> {
        self.dd_vento.clone().or_else(|| self.pred_wind_dir.clone())
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_accepts_string_coordinates() {
        let raw: RawLocation = serde_json::from_str(
            r#"{"idRegiao":1,"idAreaAviso":"AVR","idConcelho":5,"globalIdLocal":1010500,
                "latitude":"40.6413","idDistrito":1,"local":"Aveiro","longitude":"-8.6535"}"#,
        )
        .unwrap();

        assert_eq!(raw.global_id_local, Some(1_010_500));
        assert_eq!(raw.district_id, Some(1));
        assert_eq!(raw.name.as_deref(), Some("Aveiro"));
        assert!((raw.latitude.unwrap() - 40.6413).abs() < 1e-9);
        assert!((raw.longitude.unwrap() + 8.6535).abs() < 1e-9);
    }

    #[test]
    fn location_missing_fields_are_none() {
        let raw: RawLocation = serde_json::from_str(r#"{"local":"Somewhere"}"#).unwrap();
        assert!(raw.global_id_local.is_none());
        assert!(raw.district_id.is_none());
        assert!(raw.latitude.is_none());
    }

    #[test]
    fn daily_forecast_accepts_mixed_numbers() {
        let raw: RawDailyForecast = serde_json::from_str(
            r#"{"precipitaProb":"0.0","tMin":"8.4","tMax":19.6,"predWindDir":"NW",
                "idWeatherType":2,"classWindSpeed":2,"forecastDate":"2024-01-15"}"#,
        )
        .unwrap();

        assert_eq!(raw.forecast_date.as_deref(), Some("2024-01-15"));
        assert!((raw.t_min.unwrap() - 8.4).abs() < 1e-9);
        assert!((raw.t_max.unwrap() - 19.6).abs() < 1e-9);
        assert_eq!(raw.id_weather_type, Some(2));
        assert_eq!(raw.wind_direction().as_deref(), Some("NW"));
        assert!((raw.wind_speed().unwrap() - 2.0).abs() < 1e-9);
        assert!(raw.h_r.is_none());
    }

    #[test]
    fn measured_wind_wins_over_class() {
        let raw: RawDailyForecast = serde_json::from_str(
            r#"{"ffVento":"12.5","classWindSpeed":2,"ddVento":"S","predWindDir":"N"}"#,
        )
        .unwrap();

        assert!((raw.wind_speed().unwrap() - 12.5).abs() < 1e-9);
        assert_eq!(raw.wind_direction().as_deref(), Some("S"));
    }

    #[test]
    fn garbage_numbers_become_none() {
        let raw: RawDailyForecast =
            serde_json::from_str(r#"{"tMin":"n/a","tMax":null,"idWeatherType":"x"}"#).unwrap();
        assert!(raw.t_min.is_none());
        assert!(raw.t_max.is_none());
        assert!(raw.id_weather_type.is_none());
    }

    #[test]
    fn response_without_data_fails() {
        let result: Result<DailyForecastResponse, _> =
            serde_json::from_str(r#"{"owner":"IPMA","country":"PT"}"#);
        assert!(result.is_err());

        let result: Result<LocationListResponse, _> = serde_json::from_str(r#"{"data":{}}"#);
        assert!(result.is_err());
    }
}
