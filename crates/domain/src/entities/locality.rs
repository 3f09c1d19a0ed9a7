//! Locality entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{DistrictId, UNKNOWN_DISTRICT_NAME, district_name};

/// A named forecast point belonging to one district
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    /// IPMA global locality id (`globalIdLocal`)
    pub id: u32,
    /// Display name
    #[serde(rename = "nome")]
    pub name: String,
    /// District the locality belongs to
    #[serde(rename = "distrito_id")]
    pub district_id: DistrictId,
    /// District display name, `"Desconhecido"` when the id is not mapped
    #[serde(rename = "distrito_nome")]
    pub district_name: String,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
}

impl Locality {
    /// Create a locality, resolving the district name from the table
    #[must_use]
    pub fn new(
        id: u32,
        name: String,
        district_id: DistrictId,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id,
            name,
            district_id,
            district_name: district_name(district_id)
                .unwrap_or(UNKNOWN_DISTRICT_NAME)
                .to_string(),
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_district_name() {
        let loc = Locality::new(1_010_500, "Aveiro".into(), 1, Some(40.6413), Some(-8.6535));
        assert_eq!(loc.district_name, "Aveiro");
    }

    #[test]
    fn unmapped_district_is_unknown() {
        let loc = Locality::new(9_999_999, "Nowhere".into(), 77, None, None);
        assert_eq!(loc.district_name, "Desconhecido");
    }

    #[test]
    fn serializes_with_portuguese_keys() {
        let loc = Locality::new(1_110_600, "Lisboa".into(), 11, Some(38.766), Some(-9.1286));
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["id"], 1_110_600);
        assert_eq!(json["nome"], "Lisboa");
        assert_eq!(json["distrito_id"], 11);
        assert_eq!(json["distrito_nome"], "Lisboa");
        assert!((json["latitude"].as_f64().unwrap() - 38.766).abs() < f64::EPSILON);
    }
}
