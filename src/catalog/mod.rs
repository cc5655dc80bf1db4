use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    sync::Arc,
};

mod builtin;
mod models;
pub use models::*;
use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::{
    estimate::Estimator,
    shared::{
        self,
        geo::{Coordinate, Distance, GRID_CELL_SIZE},
    },
    source::{self, Source},
};

type IdToIndex = HashMap<Arc<str>, usize>;
type CellToIndexes = HashMap<(i32, i32), Box<[usize]>>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source error: {0}")]
    Source(#[from] source::Error),
    #[error("Relay point at position {0} has an empty id")]
    EmptyId(usize),
    #[error("Relay point id {0} is used more than once")]
    DuplicateId(String),
    #[error("Relay point {0} has a non finite coordinate")]
    InvalidCoordinate(String),
}

/// Immutable, ordered set of relay points.
///
/// Cloning is cheap, the lookups are shared.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    points: Arc<[RelayPoint]>,
    point_lookup: Arc<IdToIndex>,
    cell_lookup: Arc<CellToIndexes>,
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    /// Catalog of the Yaoundé pilot relay points.
    pub fn yaounde() -> Self {
        Self::index(builtin::yaounde_points())
    }

    /// Builds the catalog from `points`, keeping their order.
    /// Empty or duplicate ids and non finite coordinates are rejected.
    pub fn with_points<I>(self, points: I) -> Result<Self, self::Error>
    where
        I: IntoIterator<Item = RelayPoint>,
    {
        let points: Vec<RelayPoint> = points.into_iter().collect();
        let mut seen: HashSet<&str> = HashSet::with_capacity(points.len());
        for (i, point) in points.iter().enumerate() {
            if point.id.trim().is_empty() {
                return Err(Error::EmptyId(i));
            }
            if !seen.insert(&*point.id) {
                return Err(Error::DuplicateId(point.id.to_string()));
            }
            if !point.coordinate.is_finite() {
                return Err(Error::InvalidCoordinate(point.id.to_string()));
            }
        }
        Ok(Self::index(points))
    }

    /// Used to stream relay point fixtures into the catalog.
    pub fn with_source(self, source: Source) -> Result<Self, self::Error> {
        let mut points: Vec<RelayPoint> = Vec::new();
        source.stream_points(|(_, point)| points.push(point.into()))?;
        self.with_points(points)
    }

    fn index(mut points: Vec<RelayPoint>) -> Self {
        let mut point_lookup: IdToIndex = HashMap::with_capacity(points.len());
        let mut cell_lookup: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
        points.iter_mut().enumerate().for_each(|(i, point)| {
            point.index = i as u32;
            point_lookup.insert(point.id.clone(), i);
            cell_lookup
                .entry(point.coordinate.to_grid())
                .or_default()
                .push(i);
        });
        let cell_lookup: CellToIndexes = cell_lookup
            .into_iter()
            .map(|(cell, indexes)| (cell, indexes.into()))
            .collect();
        info!(
            "Loaded {} relay points into {} grid cells",
            points.len(),
            cell_lookup.len()
        );

        Self {
            points: points.into(),
            point_lookup: point_lookup.into(),
            cell_lookup: cell_lookup.into(),
        }
    }

    pub fn points(&self) -> &[RelayPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a relay point with the given id.
    /// If no point is found with the given id None is returned.
    pub fn point_by_id(&self, id: &str) -> Option<&RelayPoint> {
        let index = self.point_lookup.get(id)?;
        Some(&self.points[*index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.point_lookup.contains_key(id)
    }

    pub fn available_points(&self) -> impl Iterator<Item = &RelayPoint> {
        self.points.iter().filter(|point| point.is_available)
    }

    /// Returns the points within `radius` of `coordinate` with their distance, nearest first.
    pub fn nearby(
        &self,
        coordinate: &Coordinate,
        radius: Distance,
    ) -> Vec<(&RelayPoint, Distance)> {
        let reach_y = (radius / GRID_CELL_SIZE).ceil() + 1.0;
        // Longitude cells shrink towards the poles.
        let shrink = coordinate.latitude.to_radians().cos().abs().max(0.01);
        let reach_x = (radius / (GRID_CELL_SIZE * shrink)).ceil() + 1.0;
        let window = (2.0 * reach_x + 1.0) * (2.0 * reach_y + 1.0);

        let full_scan = window.is_nan() || window > self.points.len() as f64;

        let mut found: Vec<(&RelayPoint, Distance)> = if full_scan {
            self.points
                .par_iter()
                .map(|point| (point, point.coordinate.distance(coordinate)))
                .filter(|(_, distance)| *distance <= radius)
                .collect()
        } else {
            // The window fits in the catalog, so both reaches are small.
            let (reach_x, reach_y) = (reach_x as i32, reach_y as i32);
            let (origin_x, origin_y) = coordinate.to_grid();
            (-reach_x..=reach_x)
                .into_par_iter()
                .flat_map_iter(|x| {
                    (-reach_y..=reach_y).flat_map(move |y| {
                        self.cell_lookup
                            .get(&(origin_x.saturating_add(x), origin_y.saturating_add(y)))
                            .into_iter()
                            .flat_map(|indexes| indexes.iter())
                            .map(move |index| &self.points[*index])
                            .map(move |point| (point, point.coordinate.distance(coordinate)))
                            .filter(move |(_, distance)| *distance <= radius)
                    })
                })
                .collect()
        };

        found.par_sort_by(|(a, a_dist), (b, b_dist)| {
            a_dist
                .partial_cmp(b_dist)
                .unwrap_or(Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        found
    }

    /// Returns the points within `radius` of `coordinate`, nearest first.
    pub fn points_by_coordinate(
        &self,
        coordinate: &Coordinate,
        radius: Distance,
    ) -> Vec<&RelayPoint> {
        self.nearby(coordinate, radius)
            .into_iter()
            .map(|(point, _)| point)
            .collect()
    }

    /// Closest available point regardless of distance.
    pub fn nearest_point(&self, coordinate: &Coordinate) -> Option<&RelayPoint> {
        self.points
            .par_iter()
            .filter(|point| point.is_available)
            .map(|point| (point, point.coordinate.distance(coordinate)))
            .min_by(|(a, a_dist), (b, b_dist)| {
                a_dist
                    .partial_cmp(b_dist)
                    .unwrap_or(Ordering::Equal)
                    .then(a.index.cmp(&b.index))
            })
            .map(|(point, _)| point)
    }

    /// Does a fuzzy search on all the points, comparing their name and address to the needle.
    pub fn search<'a>(&'a self, needle: &str) -> Vec<&'a RelayPoint> {
        shared::search(needle, self.points())
    }

    pub fn estimator<'a>(&'a self, origin: &'a str, destination: &'a str) -> Estimator<'a> {
        Estimator::new(self, origin, destination)
    }
}
