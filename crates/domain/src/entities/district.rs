//! District entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{DistrictId, district_name};

/// An administrative district or island group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    /// IPMA district code
    pub id: DistrictId,
    /// Display name
    #[serde(rename = "nome")]
    pub name: String,
}

impl District {
    /// Build a district from its id, falling back to `"Distrito {id}"`
    /// for ids outside the fixed table
    #[must_use]
    pub fn from_id(id: DistrictId) -> Self {
        let name = district_name(id).map_or_else(|| format!("Distrito {id}"), str::to_string);
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_id_uses_table_name() {
        let district = District::from_id(8);
        assert_eq!(district.id, 8);
        assert_eq!(district.name, "Faro");
    }

    #[test]
    fn unknown_id_uses_fallback_name() {
        assert_eq!(District::from_id(99).name, "Distrito 99");
        assert_eq!(District::from_id(0).name, "Distrito 0");
    }

    #[test]
    fn serializes_with_portuguese_keys() {
        let json = serde_json::to_value(District::from_id(11)).unwrap();
        assert_eq!(json, serde_json::json!({"id": 11, "nome": "Lisboa"}));
    }
}
