//! Router de la API
//!
//! `/tarjeta` y `/categoria` se montan sobre el mismo estado; CORS y trazas
//! se aplican a todas las rutas.

pub mod categoria_routes;
pub mod tarjeta_routes;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(liveness))
        .nest("/tarjeta", tarjeta_routes::create_tarjeta_router())
        .nest("/categoria", categoria_routes::create_categoria_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn liveness() -> &'static str {
    "I am alive"
}
