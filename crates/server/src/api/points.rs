use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{NearbyDto, PointDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use relais::shared::geo::{Coordinate, Distance, NEARBY_RADIUS};

pub async fn points(State(state): State<Arc<AppState>>) -> Response {
    let result: Vec<_> = state.catalog.points().iter().map(PointDto::from).collect();
    Json(result).into_response()
}

/// `at` is `latitude,longitude`, `radius` is in kilometers.
pub async fn near(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let at = params.get("at").ok_or(StatusCode::BAD_REQUEST)?;
    let coordinate = coordinate_from_str(at)?;
    let radius = match params.get("radius") {
        Some(value) => {
            let km: f64 = value.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
            if !km.is_finite() || km < 0.0 {
                return Err(StatusCode::BAD_REQUEST);
            }
            Distance::from_kilometers(km)
        }
        None => NEARBY_RADIUS,
    };

    let result: Vec<_> = state
        .catalog
        .nearby(&coordinate, radius)
        .into_iter()
        .map(|(point, distance)| NearbyDto {
            point: PointDto::from(point),
            distance_km: distance.as_kilometers(),
        })
        .collect();
    Ok(Json(result).into_response())
}

fn coordinate_from_str(value: &str) -> Result<Coordinate, StatusCode> {
    let (latitude, longitude) = value.split_once(',').ok_or(StatusCode::BAD_REQUEST)?;
    let latitude: f64 = latitude
        .trim()
        .parse()
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    let longitude: f64 = longitude
        .trim()
        .parse()
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    let coordinate = Coordinate::new(longitude, latitude);
    if coordinate.is_finite() {
        Ok(coordinate)
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}
