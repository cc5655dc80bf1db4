use relais::{
    estimate::RouteEstimate,
    scene::RouteSummary,
    shared::geo::{Bounds, Coordinate},
};
use serde::{Deserialize, Serialize};

use crate::dto::PointDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDto {
    pub origin: PointDto,
    pub destination: PointDto,
    pub summary: RouteSummary,
    pub path: Vec<Coordinate>,
    pub bounds: Bounds,
}

impl RouteDto {
    pub fn from(origin: PointDto, destination: PointDto, estimate: &RouteEstimate) -> Self {
        Self {
            origin,
            destination,
            summary: RouteSummary::from(estimate),
            path: estimate.path(),
            bounds: estimate.bounds(),
        }
    }
}
