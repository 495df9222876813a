use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use souschef_core::domain::profile::entities::UserProfile;
use souschef_core::domain::profile::ports::ProfileService;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    summary = "Get profile",
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 404, body = ErrorResponse)
    ),
    params(
        ("user_id" = Uuid, Path, description = "Owner id"),
    ),
)]
pub async fn get_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
