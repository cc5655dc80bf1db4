use relais::{catalog::RelayPoint, shared::geo::Coordinate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
    pub is_available: bool,
}

impl PointDto {
    pub fn from(point: &RelayPoint) -> Self {
        Self {
            id: point.id.to_string(),
            name: point.name.to_string(),
            address: point.address.to_string(),
            coordinate: point.coordinate,
            is_available: point.is_available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyDto {
    pub point: PointDto,
    pub distance_km: f64,
}
