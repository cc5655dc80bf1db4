use serde::{Deserialize, Serialize};

/// One row of a relay point table.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CsvRelayPoint {
    pub id: String,
    pub name: String,
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
    /// Missing or empty means available.
    pub is_available: Option<bool>,
}
