use std::{
    cmp,
    fmt::Display,
    ops::{Div, Mul},
};

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);
/// Default radius used when looking for relay points around a position.
pub const NEARBY_RADIUS: Distance = Distance::from_kilometers(3.0);
/// Side of a proximity grid cell.
pub const GRID_CELL_SIZE: Distance = Distance::from_meters(1000.0);
pub(crate) const LONGITUDE_DISTANCE: Distance = Distance::from_meters(111_320.0);
pub(crate) const LATITUDE_DISTANCE: Distance = Distance::from_meters(110_540.0);

/// Upper bound, in degrees, of the offset added to each synthetic waypoint.
pub const WAYPOINT_JITTER: f64 = 0.0015;
/// Speed assumed by the travel time heuristic. Not traffic aware.
pub const ASSUMED_SPEED_KMH: f64 = 30.0;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Mul<f64> for Distance {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div for Distance {
    type Output = f64;
    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

impl Display for Distance {
    /// Kilometers with one decimal, e.g. `1.8 km`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km", self.as_kilometers())
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// A WGS84 position in degrees.
///
/// Pairs exchanged with map layers use the GeoJSON order `[longitude, latitude]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.longitude, value.latitude]
    }
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Great-circle distance using the haversine formula.
    pub fn distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::powi(f64::sin(dist_lon / 2.0), 2);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        EARTH_RADIUS * c
    }

    /// Point at `ratio` along the straight segment to `coord`, in degree space.
    pub fn lerp(&self, coord: &Self, ratio: f64) -> Self {
        Self {
            longitude: self.longitude + (coord.longitude - self.longitude) * ratio,
            latitude: self.latitude + (coord.latitude - self.latitude) * ratio,
        }
    }

    pub fn to_grid(&self) -> (i32, i32) {
        let x = (self.longitude * LONGITUDE_DISTANCE.as_meters() / GRID_CELL_SIZE.as_meters())
            .floor() as i32;
        let y = (self.latitude * LATITUDE_DISTANCE.as_meters() / GRID_CELL_SIZE.as_meters())
            .floor() as i32;
        (x, y)
    }
}

pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> Distance {
    a.distance(b)
}

/// Places `count` waypoints evenly between `start` and `end` and shifts each one
/// by a random offset of at most [`WAYPOINT_JITTER`] degrees, the same offset on
/// both axes.
///
/// The result only gives a drawn route some visual variety. There is no road
/// network behind it.
pub fn interpolate_waypoints<R>(
    start: &Coordinate,
    end: &Coordinate,
    count: usize,
    rng: &mut R,
) -> Vec<Coordinate>
where
    R: Rng,
{
    (1..=count)
        .map(|i| {
            let ratio = i as f64 / (count + 1) as f64;
            let jitter = rng.random_range(-WAYPOINT_JITTER..=WAYPOINT_JITTER);
            let point = start.lerp(end, ratio);
            Coordinate {
                longitude: point.longitude + jitter,
                latitude: point.latitude + jitter,
            }
        })
        .collect()
}

/// Heuristic travel time at [`ASSUMED_SPEED_KMH`].
pub fn estimate_duration_minutes(distance: Distance) -> f64 {
    travel_minutes(distance, ASSUMED_SPEED_KMH)
}

pub(crate) fn travel_minutes(distance: Distance, speed_kmh: f64) -> f64 {
    distance.as_kilometers() / speed_kmh * 60.0
}

/// Axis aligned box spanning a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            south_west: coordinate,
            north_east: coordinate,
        }
    }

    pub fn extend(mut self, coordinate: Coordinate) -> Self {
        self.south_west.longitude = self.south_west.longitude.min(coordinate.longitude);
        self.south_west.latitude = self.south_west.latitude.min(coordinate.latitude);
        self.north_east.longitude = self.north_east.longitude.max(coordinate.longitude);
        self.north_east.latitude = self.north_east.latitude.max(coordinate.latitude);
        self
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.south_west.longitude..=self.north_east.longitude).contains(&coordinate.longitude)
            && (self.south_west.latitude..=self.north_east.latitude).contains(&coordinate.latitude)
    }

    pub fn center(&self) -> Coordinate {
        self.south_west.lerp(&self.north_east, 0.5)
    }

    /// Returns None for an empty iterator.
    pub fn from_coordinates<I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first), Self::extend))
    }
}

#[test]
fn distance_test() {
    let paris = Coordinate::new(2.3514350059357927, 48.85800943005911);
    let london = Coordinate::new(-0.12495407345099824, 51.5052389927712);
    let d = paris.distance(&london);
    assert!((d.as_kilometers() - 343.0).abs() < 5.0);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn distance_display_test() {
    assert_eq!(Distance::from_meters(1809.4).to_string(), "1.8 km");
}
