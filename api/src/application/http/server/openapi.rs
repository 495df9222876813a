use crate::application::http::{
    profile::router::ProfileApiDoc,
    recipe::router::{GenerateApiDoc, RecipeApiDoc},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Souschef API"
    ),
    nest(
        (path = "/recipes", api = GenerateApiDoc),
        (path = "/users/{user_id}/recipes", api = RecipeApiDoc),
        (path = "/users/{user_id}", api = ProfileApiDoc),
    )
)]
pub struct ApiDoc;
