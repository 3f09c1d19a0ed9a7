//! Lenient query parameter parsing
//!
//! Parameters are read as raw strings; a value that is not an integer is
//! treated as if it had not been sent.

use std::collections::HashMap;

/// Raw query parameters as sent by the client
pub type QueryParams = HashMap<String, String>;

/// Read an integer parameter, ignoring unparsable values
pub fn int_param(params: &QueryParams, name: &str) -> Option<i64> {
    params.get(name).and_then(|raw| raw.trim().parse().ok())
}
