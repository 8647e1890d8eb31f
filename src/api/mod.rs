//! HTTP JSON API.
//!
//! One handler module per entity plus a health probe at `/`. Each request
//! opens its own store handle scoped to that single operation; the only
//! shared state is the immutable [`Config`].
//!
//! Surface contract, per entity with its plural route segment:
//! - `GET /<e>` always answers 200 with a JSON array; a store failure is
//!   logged and masked as an empty array.
//! - `POST /<e>` wants the exact record field set, else 400; 201 on
//!   success, 500 on store failure.
//! - `PUT /<e>/{id}` wants the full `novo_*`/`nova_*` replacement set,
//!   else 400; 404 covers both "no row matched" and store failure.
//! - `DELETE /<e>/{id}` answers 200 or 404 with the same conflation.

use crate::libs::config::Config;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

pub mod modulos;
pub mod previsoes;
pub mod progressos;
pub mod sugestoes;
pub mod trilhas;
pub mod usuarios;

/// Immutable state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Builds the application router with all entity routes mounted.
pub fn build_router(config: Config) -> Router {
    Router::new()
        .route("/", get(health_check))
        .merge(usuarios::routes())
        .merge(trilhas::routes())
        .merge(modulos::routes())
        .merge(progressos::routes())
        .merge(sugestoes::routes())
        .merge(previsoes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { config })
}

/// GET / — health probe, always 200.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
