//! HTTP request handlers

pub mod districts;
pub mod fallback;
pub mod forecast;
pub mod health;
pub mod info;
pub mod localities;
mod params;
