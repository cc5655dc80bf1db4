use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Catalog, RelayPoint},
    estimate::RouteEstimate,
    selection::{Selection, SelectionMode},
    shared::geo::{Bounds, Coordinate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    Available,
    Unavailable,
    Origin,
    Destination,
}

impl MarkerStyle {
    /// Origin wins over destination, which wins over availability.
    pub fn of(point: &RelayPoint, selection: &Selection) -> Self {
        if selection.origin.as_deref() == Some(&*point.id) {
            Self::Origin
        } else if selection.destination.as_deref() == Some(&*point.id) {
            Self::Destination
        } else if point.is_available {
            Self::Available
        } else {
            Self::Unavailable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Origin => "origin",
            Self::Destination => "destination",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
    pub style: MarkerStyle,
    /// Label of the popup button, depends on the current mode.
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLayer {
    pub path: Vec<Coordinate>,
    pub bounds: Bounds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub distance_label: String,
    pub duration_label: String,
}

impl From<&RouteEstimate> for RouteSummary {
    fn from(value: &RouteEstimate) -> Self {
        let duration = value.duration();
        Self {
            distance_km: value.distance_km(),
            duration_minutes: duration.as_minutes(),
            distance_label: value.distance.to_string(),
            duration_label: duration.to_hm_string(),
        }
    }
}

/// Everything a map needs to draw the selection screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub mode: SelectionMode,
    pub markers: Vec<Marker>,
    pub route: Option<RouteLayer>,
    pub summary: Option<RouteSummary>,
}

impl Scene {
    pub fn build(
        catalog: &Catalog,
        selection: &Selection,
        mode: SelectionMode,
        estimate: Option<&RouteEstimate>,
    ) -> Self {
        let action = format!("Select as {mode}");
        let markers = catalog
            .points()
            .iter()
            .map(|point| Marker {
                id: point.id.to_string(),
                name: point.name.to_string(),
                address: point.address.to_string(),
                coordinate: point.coordinate,
                style: MarkerStyle::of(point, selection),
                action: action.clone(),
            })
            .collect();

        Self {
            mode,
            markers,
            route: estimate.map(|estimate| RouteLayer {
                path: estimate.path(),
                bounds: estimate.bounds(),
            }),
            summary: estimate.map(RouteSummary::from),
        }
    }

    pub fn marker(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    /// One point feature per marker, followed by the route line if any.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features: Vec<Feature> = self
            .markers
            .iter()
            .map(|marker| {
                let mut feature = Feature::from(Geometry::new(Value::Point(
                    <[f64; 2]>::from(marker.coordinate).to_vec(),
                )));
                feature.set_property("id", marker.id.as_str());
                feature.set_property("name", marker.name.as_str());
                feature.set_property("address", marker.address.as_str());
                feature.set_property("style", marker.style.as_str());
                feature
            })
            .collect();

        if let Some(route) = &self.route {
            let line = route
                .path
                .iter()
                .map(|coordinate| <[f64; 2]>::from(*coordinate).to_vec())
                .collect();
            let mut feature = Feature::from(Geometry::new(Value::LineString(line)));
            feature.set_property("kind", "route");
            if let Some(summary) = &self.summary {
                feature.set_property("distance_km", summary.distance_km);
                feature.set_property("duration_minutes", summary.duration_minutes);
            }
            features.push(feature);
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
