use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use souschef_core::domain::recipe::ports::RecipeService;
use souschef_core::domain::recipe::value_objects::DeleteRecipeInput;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteRecipeResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    description = "Removes a recipe from the user's collection.",
    responses(
        (status = 200, body = DeleteRecipeResponse),
        (status = 404, body = ErrorResponse)
    ),
    params(
        ("user_id" = Uuid, Path, description = "Owner id"),
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
)]
pub async fn delete_recipe(
    Path((user_id, recipe_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<DeleteRecipeResponse>, ApiError> {
    state
        .service
        .delete_recipe(DeleteRecipeInput { user_id, recipe_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteRecipeResponse {
        message: "Recipe deleted successfully".to_string(),
    }))
}
