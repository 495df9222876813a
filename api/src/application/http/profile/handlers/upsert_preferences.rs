use crate::application::http::profile::validators::UpsertPreferencesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use souschef_core::domain::profile::entities::DietaryPreferences;
use souschef_core::domain::profile::ports::ProfileService;
use souschef_core::domain::profile::value_objects::UpsertDietaryPreferencesInput;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpsertPreferencesResponse {
    pub data: DietaryPreferences,
}

#[utoipa::path(
    put,
    path = "/preferences",
    tag = "profile",
    summary = "Upsert dietary preferences",
    description = "Creates or replaces the user's allergies, deficiencies and food preferences.",
    responses(
        (status = 200, body = UpsertPreferencesResponse)
    ),
    params(
        ("user_id" = Uuid, Path, description = "Owner id"),
    ),
    request_body = UpsertPreferencesValidator
)]
pub async fn upsert_preferences(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpsertPreferencesValidator>,
) -> Result<Response<UpsertPreferencesResponse>, ApiError> {
    let preferences = state
        .service
        .upsert_dietary_preferences(UpsertDietaryPreferencesInput {
            user_id,
            allergies: payload.allergies,
            cuisine_preferences: payload.cuisine_preferences,
            deficiencies: payload.deficiencies,
            food_preferences: payload.food_preferences,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpsertPreferencesResponse { data: preferences }))
}
