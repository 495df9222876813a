use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{GeneratedRecipe, Recipe, RecipeStats, StoredRecipe},
        value_objects::{DeleteRecipeInput, GenerateRecipeInput, GetRecipeInput, GetRecipesFilter},
    },
};

/// Repository trait for the user-scoped recipe collection
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create_recipe(
        &self,
        recipe: StoredRecipe,
    ) -> impl Future<Output = Result<StoredRecipe, CoreError>> + Send;

    fn get_recipes_by_user(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<StoredRecipe>, CoreError>> + Send;

    fn get_recipe_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<StoredRecipe>, CoreError>> + Send;

    /// Returns `false` when no recipe with this id belongs to the user.
    fn delete_recipe(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Counts the user's recipes, only those created at or after `since` when given.
    fn count_recipes(
        &self,
        user_id: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// LLM Client trait for calling the generative text provider
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one prompt and returns the provider's raw text, untouched.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation and the saved collection
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    fn save_recipe(
        &self,
        user_id: Uuid,
        recipe: Recipe,
    ) -> impl Future<Output = Result<StoredRecipe, CoreError>> + Send;

    fn get_recipes(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> impl Future<Output = Result<Vec<StoredRecipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        input: GetRecipeInput,
    ) -> impl Future<Output = Result<StoredRecipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        input: DeleteRecipeInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_recipe_stats(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<RecipeStats, CoreError>> + Send;
}
