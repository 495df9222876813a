use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use souschef_core::domain::recipe::entities::StoredRecipe;
use souschef_core::domain::recipe::ports::RecipeService;
use souschef_core::domain::recipe::value_objects::GetRecipeInput;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeResponse {
    pub data: StoredRecipe,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    responses(
        (status = 200, body = GetRecipeResponse),
        (status = 404, body = ErrorResponse)
    ),
    params(
        ("user_id" = Uuid, Path, description = "Owner id"),
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
)]
pub async fn get_recipe(
    Path((user_id, recipe_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(GetRecipeInput { user_id, recipe_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse { data: recipe }))
}
