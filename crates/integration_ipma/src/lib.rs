//! IPMA weather integration
//!
//! Client for the IPMA open-data API (<https://api.ipma.pt>).
//! Lists districts and localities and fetches daily forecasts, reshaping
//! the upstream documents into the domain entities. No API key required.

pub mod client;
mod models;

pub use client::{IpmaClient, IpmaConfig, IpmaError, WeatherDataClient};
