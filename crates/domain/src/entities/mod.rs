//! Domain entities - transient DTOs built per request from upstream data

mod district;
mod forecast;
mod locality;

pub use district::District;
pub use forecast::{DayForecast, Forecast};
pub use locality::Locality;
