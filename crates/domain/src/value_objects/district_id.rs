//! District identifiers
//!
//! IPMA numbers mainland districts 1-18, the Madeira archipelago 30-31 and
//! the Azores islands 40-48. The table below is the complete set of ids
//! with a known display name.

/// Numeric district (or island group) code as used by IPMA
pub type DistrictId = u16;

/// Name used for a locality whose district id is not in the table
pub const UNKNOWN_DISTRICT_NAME: &str = "Desconhecido";

/// Every district id that has a fixed display name, in ascending order
pub const DISTRICT_IDS: [DistrictId; 29] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 30, 31, 40, 41, 42, 43, 44, 45,
    46, 47, 48,
];

/// Look up the display name of a district or island group
///
/// Returns `None` for ids outside the fixed table.
#[must_use]
pub const fn district_name(id: DistrictId) -> Option<&'static str> {
    let name = match id {
        1 => "Aveiro",
        2 => "Beja",
        3 => "Braga",
        4 => "Bragança",
        5 => "Castelo Branco",
        6 => "Coimbra",
        7 => "Évora",
        8 => "Faro",
        9 => "Guarda",
        10 => "Leiria",
        11 => "Lisboa",
        12 => "Portalegre",
        13 => "Porto",
        14 => "Santarém",
        15 => "Setúbal",
        16 => "Viana do Castelo",
        17 => "Vila Real",
        18 => "Viseu",
        30 => "Ilha da Madeira",
        31 => "Ilha de Porto Santo",
        40 => "Ilha de Santa Maria",
        41 => "Ilha de São Miguel",
        42 => "Ilha Terceira",
        43 => "Ilha da Graciosa",
        44 => "Ilha de São Jorge",
        45 => "Ilha do Pico",
        46 => "Ilha do Faial",
        47 => "Ilha das Flores",
        48 => "Ilha do Corvo",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainland_districts_are_named() {
        assert_eq!(district_name(1), Some("Aveiro"));
        assert_eq!(district_name(11), Some("Lisboa"));
        assert_eq!(district_name(13), Some("Porto"));
        assert_eq!(district_name(18), Some("Viseu"));
    }

    #[test]
    fn islands_are_named() {
        assert_eq!(district_name(30), Some("Ilha da Madeira"));
        assert_eq!(district_name(31), Some("Ilha de Porto Santo"));
        assert_eq!(district_name(41), Some("Ilha de São Miguel"));
        assert_eq!(district_name(48), Some("Ilha do Corvo"));
    }

    #[test]
    fn gaps_in_the_table_are_unknown() {
        assert_eq!(district_name(0), None);
        assert_eq!(district_name(19), None);
        assert_eq!(district_name(29), None);
        assert_eq!(district_name(32), None);
        assert_eq!(district_name(39), None);
        assert_eq!(district_name(49), None);
    }

    #[test]
    fn id_list_matches_table() {
        assert!(DISTRICT_IDS.windows(2).all(|w| w[0] < w[1]));
        for id in DISTRICT_IDS {
            assert!(district_name(id).is_some(), "id {id} has no name");
        }
        let named = (0..=u16::from(u8::MAX))
            .filter(|id| district_name(*id).is_some())
            .count();
        assert_eq!(named, DISTRICT_IDS.len());
    }
}
