use crate::application::http::profile::validators::UpsertProfileValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use souschef_core::domain::profile::entities::UserProfile;
use souschef_core::domain::profile::ports::ProfileService;
use souschef_core::domain::profile::value_objects::UpsertProfileInput;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpsertProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = "profile",
    summary = "Upsert profile",
    description = "Creates or replaces the user's profile. Dietary goals feed recipe generation.",
    responses(
        (status = 200, body = UpsertProfileResponse)
    ),
    params(
        ("user_id" = Uuid, Path, description = "Owner id"),
    ),
    request_body = UpsertProfileValidator
)]
pub async fn upsert_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpsertProfileValidator>,
) -> Result<Response<UpsertProfileResponse>, ApiError> {
    let profile = state
        .service
        .upsert_profile(UpsertProfileInput {
            user_id,
            full_name: payload.full_name,
            age: payload.age,
            height_cm: payload.height_cm,
            weight_kg: payload.weight_kg,
            dietary_goals: payload.dietary_goals,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpsertProfileResponse { data: profile }))
}
