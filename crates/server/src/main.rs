mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use relais::{catalog::Catalog, source::Source};
use std::{path::PathBuf, sync::Arc, time::Instant};
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let now = Instant::now();
    let catalog = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading relay points from {path}");
            let source = Source::default().from_file(PathBuf::from(path));
            match Catalog::new().with_source(source) {
                Ok(catalog) => catalog,
                Err(err) => {
                    error!("Failed to load relay points: {err}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            info!("No relay point file given, using the Yaoundé catalog");
            Catalog::yaounde()
        }
    };
    info!("Loading data took {:?}", now.elapsed());
    let state = Arc::new(AppState::new(catalog));

    let app = axum::Router::new()
        .route("/points", get(api::points))
        .route("/search", get(api::search))
        .route("/near", get(api::near))
        .route("/route", get(api::route))
        .route("/scene", get(api::scene))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {PORT}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {PORT}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
