mod stats;
mod vote;

use crate::db::VoteStore;
use crate::error::AppError;
use crate::models::PollOption;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub type SharedStore = Arc<dyn VoteStore>;

// Everything not matched by an API route falls through to the client page
pub fn router(store: SharedStore, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/variants", get(variants_handler))
        .route("/stat", get(stats::stat_handler))
        .route("/dl-stat", get(stats::download_handler))
        .route("/vote", post(vote::vote_handler))
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .with_state(store)
}

async fn variants_handler(State(store): State<SharedStore>) -> Result<Json<Vec<PollOption>>, AppError> {
    let options = store.get_options().await?;
    Ok(Json(options))
}
