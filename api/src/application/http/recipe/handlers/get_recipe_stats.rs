use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use souschef_core::domain::recipe::entities::RecipeStats;
use souschef_core::domain::recipe::ports::RecipeService;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeStatsResponse {
    pub data: RecipeStats,
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "recipe",
    summary = "Get recipe stats",
    description = "Counts the user's saved recipes, overall and over the last 7 days.",
    params(
        ("user_id" = Uuid, Path, description = "Owner id"),
    ),
    responses(
        (status = 200, body = GetRecipeStatsResponse)
    ),
)]
pub async fn get_recipe_stats(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeStatsResponse>, ApiError> {
    let stats = state
        .service
        .get_recipe_stats(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeStatsResponse { data: stats }))
}
