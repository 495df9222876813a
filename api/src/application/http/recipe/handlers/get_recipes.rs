use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use souschef_core::domain::recipe::entities::StoredRecipe;
use souschef_core::domain::recipe::ports::RecipeService;
use souschef_core::domain::recipe::value_objects::GetRecipesFilter;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetRecipesQuery {
    /// Case-insensitive match on the title.
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<StoredRecipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Get recipes",
    description = "Lists the user's saved recipes, newest first.",
    params(
        ("user_id" = Uuid, Path, description = "Owner id"),
        GetRecipesQuery
    ),
    responses(
        (status = 200, body = GetRecipesResponse)
    ),
)]
pub async fn get_recipes(
    Path(user_id): Path<Uuid>,
    Query(query): Query<GetRecipesQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_recipes(
            user_id,
            GetRecipesFilter {
                search: query.search,
                limit: query.limit,
                offset: query.offset,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data: recipes }))
}
