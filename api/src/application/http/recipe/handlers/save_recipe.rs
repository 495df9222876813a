use crate::application::http::recipe::validators::SaveRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use souschef_core::domain::recipe::entities::StoredRecipe;
use souschef_core::domain::recipe::ports::RecipeService;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveRecipeResponse {
    pub data: StoredRecipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Save recipe",
    description = "Normalizes the recipe and adds it to the user's collection. Saving the same recipe twice creates two entries.",
    responses(
        (status = 201, body = SaveRecipeResponse)
    ),
    params(
        ("user_id" = Uuid, Path, description = "Owner id"),
    ),
    request_body = SaveRecipeValidator
)]
pub async fn save_recipe(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveRecipeValidator>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .save_recipe(user_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveRecipeResponse { data: recipe }))
}
