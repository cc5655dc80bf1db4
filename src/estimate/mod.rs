use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    catalog::{Catalog, RelayPoint},
    shared::{
        geo::{self, ASSUMED_SPEED_KMH, Bounds, Coordinate, Distance},
        time::Duration,
    },
};

mod config;
pub use config::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Origin id does not match any relay point")]
    InvalidOrigin,
    #[error("Destination id does not match any relay point")]
    InvalidDestination,
    #[error("Origin and destination are the same relay point")]
    SameEndpoints,
}

/// Display-only sketch of a trip between two relay points.
///
/// The distance is the great-circle distance, the duration assumes a constant
/// speed and the waypoints are jittered straight-line points. None of it comes
/// from a road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub distance: Distance,
    pub duration_minutes: f64,
    pub waypoints: Vec<Coordinate>,
}

impl RouteEstimate {
    pub fn distance_km(&self) -> f64 {
        self.distance.as_kilometers()
    }

    /// Duration rounded to whole minutes.
    pub fn duration(&self) -> Duration {
        Duration::from_minutes_f64(self.duration_minutes)
    }

    /// Origin, waypoints and destination in drawing order.
    pub fn path(&self) -> Vec<Coordinate> {
        let mut path = Vec::with_capacity(self.waypoints.len() + 2);
        path.push(self.origin);
        path.extend_from_slice(&self.waypoints);
        path.push(self.destination);
        path
    }

    /// Box around both endpoints, used to frame the route.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.origin).extend(self.destination)
    }
}

pub struct Estimator<'a> {
    catalog: &'a Catalog,
    origin: &'a str,
    destination: &'a str,
    config: Config,
}

impl<'a> Estimator<'a> {
    pub fn new(catalog: &'a Catalog, origin: &'a str, destination: &'a str) -> Self {
        Self {
            catalog,
            origin,
            destination,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Number of synthetic points placed between the endpoints.
    pub fn waypoints(mut self, count: usize) -> Self {
        self.config.waypoints = count;
        self
    }

    pub fn speed_kmh(mut self, speed: f64) -> Self {
        self.config.speed_kmh = speed;
        self
    }

    /// Resolves both endpoints without computing anything.
    pub fn endpoints(&self) -> Result<(&'a RelayPoint, &'a RelayPoint), self::Error> {
        let origin = self
            .catalog
            .point_by_id(self.origin)
            .ok_or(Error::InvalidOrigin)?;
        let destination = self
            .catalog
            .point_by_id(self.destination)
            .ok_or(Error::InvalidDestination)?;
        if origin.id == destination.id {
            return Err(Error::SameEndpoints);
        }
        Ok((origin, destination))
    }

    pub fn estimate<R>(self, rng: &mut R) -> Result<RouteEstimate, self::Error>
    where
        R: Rng,
    {
        let (origin, destination) = self.endpoints()?;
        let from = origin.coordinate;
        let to = destination.coordinate;
        let distance = geo::haversine_distance(&from, &to);
        let speed = if self.config.speed_kmh.is_finite() && self.config.speed_kmh > 0.0 {
            self.config.speed_kmh
        } else {
            ASSUMED_SPEED_KMH
        };

        Ok(RouteEstimate {
            origin: from,
            destination: to,
            distance,
            duration_minutes: geo::travel_minutes(distance, speed),
            waypoints: geo::interpolate_waypoints(&from, &to, self.config.waypoints, rng),
        })
    }
}
