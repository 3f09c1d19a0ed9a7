//! Value Objects - Immutable, identity-less domain primitives

mod district_id;
mod weather_type;

pub use district_id::{DISTRICT_IDS, DistrictId, UNKNOWN_DISTRICT_NAME, district_name};
pub use weather_type::{UNAVAILABLE_DESCRIPTION, WeatherType};
