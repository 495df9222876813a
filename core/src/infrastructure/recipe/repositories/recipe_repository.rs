use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, LikeExpr, extension::postgres::PgExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::StoredRecipe, ports::RecipeRepository, value_objects::GetRecipesFilter},
};
use crate::entity::recipes::{
    ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity,
};

/// `%term%` with the LIKE wildcards and the escape character itself escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_recipe(&self, stored: StoredRecipe) -> Result<StoredRecipe, CoreError> {
        let recipe = stored.recipe;
        let servings = i32::try_from(recipe.servings).map_err(|_| {
            CoreError::ValidationError(format!("servings out of range: {}", recipe.servings))
        })?;

        RecipeEntity::insert(RecipeActiveModel {
            id: Set(stored.id),
            user_id: Set(stored.user_id),
            title: Set(recipe.title),
            cuisine: Set(recipe.cuisine),
            cook_time: Set(recipe.cook_time),
            servings: Set(servings),
            difficulty: Set(recipe.difficulty),
            ingredients: Set(json!(recipe.ingredients)),
            instructions: Set(json!(recipe.instructions)),
            nutritional_info: Set(recipe.nutritional_info.map(|info| json!(info))),
            tags: Set(json!(recipe.tags)),
            youtube_link: Set(recipe.youtube_link),
            is_public: Set(stored.is_public),
            created_at: Set(stored.created_at.fixed_offset()),
            updated_at: Set(stored.updated_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(StoredRecipe::from)
        .map_err(|e| {
            error!("Failed to create recipe: {}", e);
            CoreError::PersistenceError(e.to_string())
        })
    }

    async fn get_recipes_by_user(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> Result<Vec<StoredRecipe>, CoreError> {
        let mut query = RecipeEntity::find().filter(RecipeColumn::UserId.eq(user_id));

        if let Some(search) = filter.search.filter(|s| !s.trim().is_empty()) {
            let pattern = LikeExpr::new(contains_pattern(search.trim())).escape('\\');
            query = query.filter(Expr::col(RecipeColumn::Title).ilike(pattern));
        }

        query = query.order_by_desc(RecipeColumn::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let recipes = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipes by user: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?
            .into_iter()
            .map(StoredRecipe::from)
            .collect::<Vec<StoredRecipe>>();

        Ok(recipes)
    }

    async fn get_recipe_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<StoredRecipe>, CoreError> {
        let recipe = RecipeEntity::find()
            .filter(RecipeColumn::Id.eq(recipe_id))
            .filter(RecipeColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe by id: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?
            .map(StoredRecipe::from);

        Ok(recipe)
    }

    async fn delete_recipe(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = RecipeEntity::delete_many()
            .filter(RecipeColumn::Id.eq(recipe_id))
            .filter(RecipeColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn count_recipes(
        &self,
        user_id: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> Result<u64, CoreError> {
        let mut query = RecipeEntity::find().filter(RecipeColumn::UserId.eq(user_id));

        if let Some(since) = since {
            query = query.filter(RecipeColumn::CreatedAt.gte(since.fixed_offset()));
        }

        query.count(&self.db).await.map_err(|e| {
            error!("Failed to count recipes: {}", e);
            CoreError::PersistenceError(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use super::*;
    use crate::domain::recipe::entities::Recipe;
    use crate::entity::recipes::Model as RecipeModel;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            cuisine: Some("Italian".to_string()),
            cook_time: Some("20 minutes".to_string()),
            servings: 2,
            difficulty: Some("Easy".to_string()),
            ingredients: vec!["Pasta".to_string(), "Garlic".to_string()],
            instructions: vec!["Boil".to_string(), "Toss".to_string()],
            nutritional_info: None,
            tags: vec!["quick".to_string()],
            youtube_link: None,
        }
    }

    fn row(stored: &StoredRecipe) -> RecipeModel {
        RecipeModel {
            id: stored.id,
            user_id: stored.user_id,
            title: stored.recipe.title.clone(),
            cuisine: stored.recipe.cuisine.clone(),
            cook_time: stored.recipe.cook_time.clone(),
            servings: stored.recipe.servings as i32,
            difficulty: stored.recipe.difficulty.clone(),
            ingredients: json!(stored.recipe.ingredients),
            instructions: json!(stored.recipe.instructions),
            nutritional_info: None,
            tags: json!(stored.recipe.tags),
            youtube_link: None,
            is_public: false,
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_create_recipe_returns_inserted_row() {
        let stored = StoredRecipe::new(Uuid::new_v4(), recipe("Aglio e Olio"));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(&stored)]])
            .into_connection();

        let created = PostgresRecipeRepository::new(db)
            .create_recipe(stored.clone())
            .await
            .unwrap();

        assert_eq!(created.id, stored.id);
        assert_eq!(created.recipe, stored.recipe);
    }

    #[tokio::test]
    async fn test_listing_is_owner_scoped_and_searches_title() {
        let user_id = Uuid::new_v4();
        let stored = StoredRecipe::new(user_id, recipe("Garlic Bread"));
        let repository = PostgresRecipeRepository::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![row(&stored)]])
                .into_connection(),
        );

        let recipes = repository
            .get_recipes_by_user(
                user_id,
                GetRecipesFilter {
                    search: Some("garlic".to_string()),
                    limit: Some(10),
                    offset: Some(0),
                },
            )
            .await
            .unwrap();
        assert_eq!(recipes.len(), 1);

        let log = format!("{:?}", repository.db.into_transaction_log());
        assert!(log.contains("ILIKE"));
        assert!(log.contains("%garlic%"));
        assert!(log.contains("ORDER BY"));
        assert!(log.contains("DESC"));
    }

    #[test]
    fn test_search_term_wildcards_are_escaped() {
        assert_eq!(contains_pattern("garlic"), "%garlic%");
        assert_eq!(contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }

    #[tokio::test]
    async fn test_search_with_wildcards_uses_escape_clause() {
        let repository = PostgresRecipeRepository::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<RecipeModel>::new()])
                .into_connection(),
        );

        let recipes = repository
            .get_recipes_by_user(
                Uuid::new_v4(),
                GetRecipesFilter {
                    search: Some("50%_off".to_string()),
                    limit: None,
                    offset: None,
                },
            )
            .await
            .unwrap();
        assert!(recipes.is_empty());

        let log = format!("{:?}", repository.db.into_transaction_log());
        assert!(log.contains("ILIKE"));
        assert!(log.contains("ESCAPE"));
        assert!(log.contains("off%"));
    }

    #[tokio::test]
    async fn test_count_recipes_filters_by_owner_and_date() {
        let count_row = |n: i64| BTreeMap::from([("num_items", sea_orm::Value::BigInt(Some(n)))]);
        let repository = PostgresRecipeRepository::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![count_row(5)], vec![count_row(2)]])
                .into_connection(),
        );
        let user_id = Uuid::new_v4();

        let total = repository.count_recipes(user_id, None).await.unwrap();
        let recent = repository
            .count_recipes(user_id, Some(Utc::now() - chrono::Duration::days(7)))
            .await
            .unwrap();

        assert_eq!((total, recent), (5, 2));
        let log = format!("{:?}", repository.db.into_transaction_log());
        assert!(log.contains("COUNT(*)"));
        assert!(log.contains("created_at"));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_matched() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repository = PostgresRecipeRepository::new(db);

        assert!(
            repository
                .delete_recipe(Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap()
        );
        assert!(
            !repository
                .delete_recipe(Uuid::new_v4(), Uuid::new_v4())
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_persistence_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = PostgresRecipeRepository::new(db)
            .get_recipe_by_id(Uuid::new_v4(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(CoreError::PersistenceError(message)) if message.contains("connection reset")));
    }
}
