//! Property-based tests for the lookup tables
//!
//! These tests use proptest to verify the table invariants across many
//! random inputs.

use domain::{
    DISTRICT_IDS, District, Locality, UNAVAILABLE_DESCRIPTION, WeatherType, district_name,
};
use proptest::prelude::*;

// ============================================================================
// District table
// ============================================================================

mod district_tests {
    use super::*;

    proptest! {
        #[test]
        fn ids_outside_table_use_fallback(id in any::<u16>()) {
            prop_assume!(!DISTRICT_IDS.contains(&id));

            prop_assert_eq!(district_name(id), None);
            prop_assert_eq!(District::from_id(id).name, format!("Distrito {id}"));
        }

        #[test]
        fn table_ids_keep_fixed_name(index in 0..DISTRICT_IDS.len()) {
            let id = DISTRICT_IDS[index];
            let district = District::from_id(id);

            prop_assert_eq!(Some(district.name.as_str()), district_name(id));
            prop_assert!(!district.name.starts_with("Distrito "));
        }

        #[test]
        fn locality_district_name_is_table_or_unknown(id in any::<u16>()) {
            let loc = Locality::new(1, "x".to_string(), id, None, None);
            let expected = district_name(id).unwrap_or("Desconhecido");

            prop_assert_eq!(loc.district_name, expected);
        }

        #[test]
        fn lookup_is_deterministic(id in any::<u16>()) {
            prop_assert_eq!(District::from_id(id), District::from_id(id));
        }
    }
}

// ============================================================================
// Weather type table
// ============================================================================

mod weather_type_tests {
    use super::*;

    proptest! {
        #[test]
        fn known_codes_are_described(code in 1i64..=27) {
            let weather = WeatherType::from_code(code);

            prop_assert_ne!(weather, WeatherType::Unknown);
            prop_assert_ne!(weather.description(), UNAVAILABLE_DESCRIPTION);
        }

        #[test]
        fn other_codes_are_unavailable(
            code in prop_oneof![(i64::MIN..1i64), (28i64..i64::MAX)]
        ) {
            prop_assert_eq!(WeatherType::from_code(code), WeatherType::Unknown);
            prop_assert_eq!(WeatherType::from_code(code).description(), UNAVAILABLE_DESCRIPTION);
        }

        #[test]
        fn description_is_deterministic(code in any::<i64>()) {
            prop_assert_eq!(
                WeatherType::from_code(code).description(),
                WeatherType::from_code(code).description()
            );
        }
    }
}
