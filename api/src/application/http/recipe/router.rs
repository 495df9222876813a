use super::handlers::delete_recipe::{__path_delete_recipe, delete_recipe};
use super::handlers::generate_recipe::{__path_generate_recipe, generate_recipe};
use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::get_recipe_stats::{__path_get_recipe_stats, get_recipe_stats};
use super::handlers::get_recipes::{__path_get_recipes, get_recipes};
use super::handlers::save_recipe::{__path_save_recipe, save_recipe};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe))]
pub struct GenerateApiDoc;

#[derive(OpenApi)]
#[openapi(paths(save_recipe, get_recipes, get_recipe_stats, get_recipe, delete_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/users/{{user_id}}/recipes", state.args.server.root_path),
            post(save_recipe),
        )
        .route(
            &format!("{}/users/{{user_id}}/recipes", state.args.server.root_path),
            get(get_recipes),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/recipes/stats",
                state.args.server.root_path
            ),
            get(get_recipe_stats),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/recipes/{{recipe_id}}",
                state.args.server.root_path
            ),
            get(get_recipe),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/recipes/{{recipe_id}}",
                state.args.server.root_path
            ),
            delete(delete_recipe),
        )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::{Value, json};
    use souschef_core::entity::recipes;
    use uuid::Uuid;

    use crate::application::http::server::http_server::router;
    use crate::application::http::test::{
        fake_gemini, fake_gemini_after, test_args, test_state_with,
    };

    const UNREACHABLE: &str = "http://127.0.0.1:9";

    fn server(flags: &[&str], endpoint: &str, db: Option<sea_orm::DatabaseConnection>) -> TestServer {
        let state = test_state_with(test_args(flags), endpoint, db);
        TestServer::new(router(state).unwrap()).unwrap()
    }

    fn row(user_id: Uuid, title: &str) -> recipes::Model {
        let now = Utc::now().fixed_offset();
        recipes::Model {
            id: Uuid::new_v4(),
            user_id,
            title: title.to_string(),
            cuisine: Some("Thai".to_string()),
            cook_time: Some("25 minutes".to_string()),
            servings: 4,
            difficulty: Some("Medium".to_string()),
            ingredients: json!(["Rice noodles", "Tamarind"]),
            instructions: json!(["Soak noodles", "Stir fry"]),
            nutritional_info: Some(json!({ "calories": 540 })),
            tags: json!(["dinner"]),
            youtube_link: None,
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_generate_returns_provider_recipe() {
        let endpoint = fake_gemini(
            "Here you go:\n```json\n{\"title\": \"Pad Thai\", \"servings\": \"3-4\", \"ingredients\": [\"Rice noodles\", 7], \"instructions\": [\"Soak\", \"Fry\"]}\n```",
        )
        .await;
        let server = server(&[], &endpoint, None);

        let response = server
            .post("/recipes/generate")
            .json(&json!({ "preferences": { "cuisine": "Thai" } }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["recipe"]["title"], "Pad Thai");
        assert_eq!(body["recipe"]["servings"], 4);
        assert_eq!(body["recipe"]["ingredients"], json!(["Rice noodles"]));
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_unparseable_answer() {
        let endpoint = fake_gemini("Sorry, I cannot help with that.").await;
        let server = server(&[], &endpoint, None);

        let response = server
            .post("/recipes/generate")
            .json(&json!({ "preferences": { "servings": "7+" } }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["recipe"]["title"], "Healthy Generated Recipe");
        assert_eq!(body["recipe"]["servings"], 7);
        assert_eq!(body["recipe"]["cuisine"], "Any");
    }

    #[tokio::test]
    async fn test_generate_provider_failure_follows_policy() {
        let fallback = server(&[], UNREACHABLE, None);
        let response = fallback
            .post("/recipes/generate")
            .json(&json!({ "preferences": {} }))
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["recipe"]["title"],
            "Healthy Generated Recipe"
        );

        let propagate = server(&["--provider-failure", "propagate"], UNREACHABLE, None);
        let response = propagate
            .post("/recipes/generate")
            .json(&json!({ "preferences": {} }))
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        assert!(response.json::<Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn test_generate_provider_timeout_serves_fallback() {
        let endpoint = fake_gemini_after(
            "{\"title\": \"Too Late\"}",
            std::time::Duration::from_secs(3),
        )
        .await;
        let server = server(&["--llm-timeout-secs", "1"], &endpoint, None);

        let response = server
            .post("/recipes/generate")
            .json(&json!({ "preferences": { "cuisine": "Thai" } }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["recipe"]["title"], "Healthy Generated Recipe");
        assert_eq!(body["recipe"]["cuisine"], "Thai");
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_body() {
        let server = server(&[], UNREACHABLE, None);

        let response = server
            .post("/recipes/generate")
            .json(&json!({ "userProfile": {} }))
            .await;

        response.assert_status_bad_request();
        assert!(response.json::<Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn test_generate_surfaces_profile_store_failure() {
        let endpoint = fake_gemini("{\"title\": \"Soup\"}").await;
        let server = server(&[], &endpoint, None);

        let response = server
            .post("/recipes/generate")
            .json(&json!({ "preferences": {}, "userId": Uuid::new_v4() }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_save_recipe_returns_created_row() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(user_id, "Pad Thai")]])
            .into_connection();
        let server = server(&[], UNREACHABLE, Some(db));

        let response = server
            .post(&format!("/users/{}/recipes", user_id))
            .json(&json!({
                "title": "Pad Thai",
                "servings": 4,
                "ingredients": ["Rice noodles", "Tamarind"],
                "instructions": ["Soak noodles", "Stir fry"],
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["data"]["title"], "Pad Thai");
        assert_eq!(body["data"]["userId"], json!(user_id));
        assert_eq!(body["data"]["nutritionalInfo"]["calories"], 540);
    }

    #[tokio::test]
    async fn test_save_recipe_validation() {
        let server = server(&[], UNREACHABLE, None);
        let path = format!("/users/{}/recipes", Uuid::new_v4());

        server
            .post(&path)
            .json(&json!({ "title": "" }))
            .await
            .assert_status_bad_request();

        server
            .post(&path)
            .json(&json!({ "title": "   " }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_save_recipe_store_failure_is_500() {
        let server = server(&[], UNREACHABLE, None);

        let response = server
            .post(&format!("/users/{}/recipes", Uuid::new_v4()))
            .json(&json!({ "title": "Soup" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>()["error"],
            "Failed to access the recipe store"
        );
    }

    #[tokio::test]
    async fn test_list_recipes() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(user_id, "Green Curry"), row(user_id, "Pad Thai")]])
            .into_connection();
        let server = server(&[], UNREACHABLE, Some(db));

        let response = server
            .get(&format!("/users/{}/recipes", user_id))
            .add_query_param("search", "curry")
            .add_query_param("limit", 10)
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_recipe_stats() {
        let count_row = |n: i64| BTreeMap::from([("num_items", sea_orm::Value::BigInt(Some(n)))]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(9)], vec![count_row(4)]])
            .into_connection();
        let server = server(&[], UNREACHABLE, Some(db));

        let response = server
            .get(&format!("/users/{}/recipes/stats", Uuid::new_v4()))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["data"],
            json!({ "total": 9, "last7Days": 4 })
        );
    }

    #[tokio::test]
    async fn test_missing_recipe_is_404() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<recipes::Model>::new()])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let server = server(&[], UNREACHABLE, Some(db));
        let path = format!("/users/{}/recipes/{}", Uuid::new_v4(), Uuid::new_v4());

        server.get(&path).await.assert_status_not_found();
        server.delete(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_recipe() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let server = server(&[], UNREACHABLE, Some(db));

        let response = server
            .delete(&format!("/users/{}/recipes/{}", Uuid::new_v4(), Uuid::new_v4()))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["message"],
            "Recipe deleted successfully"
        );
    }
}
