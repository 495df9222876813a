use crate::application::http::recipe::validators::GenerateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use souschef_core::domain::recipe::entities::Recipe;
use souschef_core::domain::recipe::ports::RecipeService;
use souschef_core::domain::recipe::value_objects::GenerateRecipeInput;
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub recipe: Recipe,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipe",
    description = "Builds a prompt from the preferences and profile, asks the provider for a recipe and normalizes the answer. Unparseable provider output is replaced by a fallback recipe.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, body = ErrorResponse),
        (status = 502, body = ErrorResponse)
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let generated = state
        .service
        .generate_recipe(GenerateRecipeInput {
            preferences: payload.preferences,
            profile: payload.user_profile,
            user_id: payload.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    info!(origin = ?generated.origin, title = %generated.recipe.title, "recipe generated");

    Ok(Response::OK(GenerateRecipeResponse {
        recipe: generated.recipe,
    }))
}
