//! Relay point catalog and map selection for parcel pick & drop.
//!
//! The [`catalog::Catalog`] holds the relay points, a
//! [`selection::Controller`] tracks the origin and destination picked on a map
//! and keeps a [`estimate::RouteEstimate`] in sync with them. Everything the
//! map has to draw is exposed as plain data through [`scene::Scene`].
//!
//! Distances are great-circle distances and travel times assume a constant
//! speed. Neither is a routing result.

pub mod catalog;
pub mod estimate;
pub mod scene;
pub mod selection;
pub mod shared;
pub mod source;

pub use rand;

pub mod prelude {
    pub use crate::catalog::{Catalog, RelayPoint};
    pub use crate::estimate::{Estimator, RouteEstimate};
    pub use crate::scene::{MarkerStyle, Scene};
    pub use crate::selection::{Controller, Selection, SelectionMode};
    pub use crate::shared::{Coordinate, Distance, Duration};
    pub use crate::source::Source;
}
