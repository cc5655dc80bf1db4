use std::{fmt::Display, sync::Arc};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    catalog::{Catalog, RelayPoint},
    estimate::{self, RouteEstimate},
    scene::Scene,
};

/// Which slot a picked relay point fills.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    #[default]
    PickingOrigin,
    PickingDestination,
}

impl SelectionMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::PickingOrigin => Self::PickingDestination,
            Self::PickingDestination => Self::PickingOrigin,
        }
    }
}

impl Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PickingOrigin => f.write_str("origin"),
            Self::PickingDestination => f.write_str("destination"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub origin: Option<Arc<str>>,
    pub destination: Option<Arc<str>>,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }
}

/// Origin/destination picking for one map session.
///
/// The route estimate is kept in sync with the selection: it exists exactly
/// when both slots hold distinct catalog ids.
pub struct Controller<R = StdRng> {
    catalog: Arc<Catalog>,
    mode: SelectionMode,
    selection: Selection,
    estimate: Option<RouteEstimate>,
    config: estimate::Config,
    rng: R,
}

impl Controller<StdRng> {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Controller whose waypoint jitter is reproducible.
    pub fn seeded(catalog: Arc<Catalog>, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R> Controller<R>
where
    R: Rng,
{
    pub fn with_rng(catalog: Arc<Catalog>, rng: R) -> Self {
        Self {
            catalog,
            mode: SelectionMode::default(),
            selection: Selection::default(),
            estimate: None,
            config: estimate::Config::default(),
            rng,
        }
    }

    pub fn with_config(mut self, config: estimate::Config) -> Self {
        self.config = config;
        self.refresh();
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> SelectionMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn estimate(&self) -> Option<&RouteEstimate> {
        self.estimate.as_ref()
    }

    pub fn origin_point(&self) -> Option<&RelayPoint> {
        self.catalog.point_by_id(self.selection.origin.as_deref()?)
    }

    pub fn destination_point(&self) -> Option<&RelayPoint> {
        self.catalog.point_by_id(self.selection.destination.as_deref()?)
    }

    /// Puts `id` in the slot of the current mode.
    /// Returns false and leaves the selection untouched if `id` is not in the catalog.
    pub fn pick(&mut self, id: &str) -> bool {
        match self.mode {
            SelectionMode::PickingOrigin => self.select_origin(id),
            SelectionMode::PickingDestination => self.select_destination(id),
        }
    }

    pub fn select_origin(&mut self, id: &str) -> bool {
        let Some(point) = self.catalog.point_by_id(id) else {
            debug!("Ignoring unknown origin {id}");
            return false;
        };
        self.selection.origin = Some(point.id.clone());
        self.refresh();
        true
    }

    pub fn select_destination(&mut self, id: &str) -> bool {
        let Some(point) = self.catalog.point_by_id(id) else {
            debug!("Ignoring unknown destination {id}");
            return false;
        };
        self.selection.destination = Some(point.id.clone());
        self.refresh();
        true
    }

    pub fn clear_origin(&mut self) {
        self.selection.origin = None;
        self.refresh();
    }

    pub fn clear_destination(&mut self) {
        self.selection.destination = None;
        self.refresh();
    }

    /// Back to an empty selection in origin mode.
    pub fn reset(&mut self) {
        self.mode = SelectionMode::default();
        self.selection = Selection::default();
        self.estimate = None;
    }

    /// Declarative view of the current state for a map renderer.
    pub fn scene(&self) -> Scene {
        Scene::build(
            &self.catalog,
            &self.selection,
            self.mode,
            self.estimate.as_ref(),
        )
    }

    fn refresh(&mut self) {
        let (Some(origin), Some(destination)) = (
            self.selection.origin.as_deref(),
            self.selection.destination.as_deref(),
        ) else {
            self.estimate = None;
            return;
        };

        self.estimate = match self
            .catalog
            .estimator(origin, destination)
            .with_config(self.config)
            .estimate(&mut self.rng)
        {
            Ok(estimate) => {
                debug!(
                    "Route {origin} -> {destination}: {} in {}",
                    estimate.distance,
                    estimate.duration()
                );
                Some(estimate)
            }
            Err(err) => {
                debug!("No route {origin} -> {destination}: {err}");
                None
            }
        };
    }
}
