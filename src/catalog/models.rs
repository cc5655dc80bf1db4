use std::sync::Arc;

use crate::{
    shared::{Identifiable, fuzzy, geo::Coordinate},
    source::CsvRelayPoint,
};

/// A physical pickup/drop-off location for parcels.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RelayPoint {
    /// Position of the point in catalog order.
    pub index: u32,
    /// Unique external identifier.
    pub id: Arc<str>,
    /// Display name (e.g., "Librairie Papyrus").
    pub name: Arc<str>,
    pub address: Arc<str>,
    /// Lowercase, accent folded name used by search.
    pub normalized_name: Arc<str>,
    pub normalized_address: Arc<str>,
    pub coordinate: Coordinate,
    /// Unavailable points are still listed and selectable, only rendered differently.
    pub is_available: bool,
}

impl RelayPoint {
    pub fn new(
        id: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        address: impl Into<Arc<str>>,
        coordinate: Coordinate,
        is_available: bool,
    ) -> Self {
        let name: Arc<str> = name.into();
        let address: Arc<str> = address.into();
        Self {
            index: 0,
            id: id.into(),
            normalized_name: fuzzy::normalize(&name).into(),
            normalized_address: fuzzy::normalize(&address).into(),
            name,
            address,
            coordinate,
            is_available,
        }
    }
}

impl Identifiable for RelayPoint {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    fn normalized_address(&self) -> Option<&str> {
        Some(&self.normalized_address)
    }
}

impl From<CsvRelayPoint> for RelayPoint {
    fn from(value: CsvRelayPoint) -> Self {
        Self::new(
            value.id,
            value.name,
            value.address,
            Coordinate::new(value.longitude, value.latitude),
            value.is_available.unwrap_or(true),
        )
    }
}
