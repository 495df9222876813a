use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use souschef_core::domain::profile::entities::DietaryPreferences;
use souschef_core::domain::profile::ports::ProfileService;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPreferencesResponse {
    pub data: DietaryPreferences,
}

#[utoipa::path(
    get,
    path = "/preferences",
    tag = "profile",
    summary = "Get dietary preferences",
    responses(
        (status = 200, body = GetPreferencesResponse),
        (status = 404, body = ErrorResponse)
    ),
    params(
        ("user_id" = Uuid, Path, description = "Owner id"),
    ),
)]
pub async fn get_preferences(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetPreferencesResponse>, ApiError> {
    let preferences = state
        .service
        .get_dietary_preferences(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPreferencesResponse { data: preferences }))
}
