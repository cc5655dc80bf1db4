use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use relais::{
    rand::{SeedableRng, rngs::StdRng},
    selection::{Controller, SelectionMode},
};
use std::{collections::HashMap, sync::Arc};
use tracing::warn;

use crate::{
    dto::{PointDto, RouteDto},
    state::AppState,
};

pub async fn route(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let from = params.get("from").ok_or(StatusCode::BAD_REQUEST)?;
    let to = params.get("to").ok_or(StatusCode::BAD_REQUEST)?;
    let mut rng = rng_from_params(&params)?;

    let estimator = state.catalog.estimator(from, to);
    let (origin, destination) = estimator.endpoints().map_err(|err| {
        warn!("Failed to resolve route {from} -> {to}: {err}");
        StatusCode::NOT_FOUND
    })?;
    let (origin, destination) = (PointDto::from(origin), PointDto::from(destination));
    let estimate = estimator.estimate(&mut rng).map_err(|err| {
        warn!("Failed to estimate route {from} -> {to}: {err}");
        StatusCode::NOT_FOUND
    })?;

    Ok(Json(RouteDto::from(origin, destination, &estimate)).into_response())
}

/// Scene of a selection screen with the given `origin`, `destination` and `mode`.
pub async fn scene(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let rng = rng_from_params(&params)?;
    let mut controller = Controller::with_rng(state.catalog.clone(), rng);

    if let Some(origin) = params.get("origin")
        && !controller.select_origin(origin)
    {
        return Err(StatusCode::NOT_FOUND);
    }
    if let Some(destination) = params.get("destination")
        && !controller.select_destination(destination)
    {
        return Err(StatusCode::NOT_FOUND);
    }
    match params.get("mode").map(String::as_str) {
        None | Some("origin") => controller.set_mode(SelectionMode::PickingOrigin),
        Some("destination") => controller.set_mode(SelectionMode::PickingDestination),
        Some(_) => return Err(StatusCode::BAD_REQUEST),
    }

    Ok(Json(controller.scene()).into_response())
}

fn rng_from_params(params: &HashMap<String, String>) -> Result<StdRng, StatusCode> {
    match params.get("seed") {
        Some(seed) => {
            let seed: u64 = seed.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
            Ok(StdRng::seed_from_u64(seed))
        }
        None => Ok(StdRng::from_os_rng()),
    }
}
