//! Domain layer for the IPMA forecast proxy
//!
//! Contains the entities returned to the browser client and the two static
//! lookup tables (district names and weather-type descriptions).
//! This layer performs no I/O.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
