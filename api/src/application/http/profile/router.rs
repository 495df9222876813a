use super::handlers::get_preferences::{__path_get_preferences, get_preferences};
use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::upsert_preferences::{__path_upsert_preferences, upsert_preferences};
use super::handlers::upsert_profile::{__path_upsert_profile, upsert_profile};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profile, upsert_profile, get_preferences, upsert_preferences))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/{{user_id}}/profile", state.args.server.root_path),
            get(get_profile),
        )
        .route(
            &format!("{}/users/{{user_id}}/profile", state.args.server.root_path),
            put(upsert_profile),
        )
        .route(
            &format!("{}/users/{{user_id}}/preferences", state.args.server.root_path),
            get(get_preferences),
        )
        .route(
            &format!("{}/users/{{user_id}}/preferences", state.args.server.root_path),
            put(upsert_preferences),
        )
}
