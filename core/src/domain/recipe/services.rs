use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    profile::{entities::generation_profile, ports::ProfileRepository},
    recipe::{
        entities::{
            GeneratedRecipe, Recipe, RecipeCandidate, RecipeOrigin, RecipeStats, StoredRecipe,
        },
        extractor::extract_json_object,
        fallback::fallback_recipe,
        normalizer::normalize_recipe,
        ports::{LLMClient, RecipeRepository, RecipeService},
        prompt::build_prompt,
        schema::get_recipe_schema,
        value_objects::{
            DeleteRecipeInput, GenerateRecipeInput, GetRecipeInput, GetRecipesFilter, Profile,
            ProviderFailurePolicy,
        },
    },
};

impl<RE, PF, LLM> Service<RE, PF, LLM>
where
    RE: RecipeRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    async fn stored_profile(&self, user_id: Uuid) -> Result<Option<Profile>, CoreError> {
        let profile = self.profile_repository.get_profile(user_id).await?;
        let preferences = self
            .profile_repository
            .get_dietary_preferences(user_id)
            .await?;

        Ok(generation_profile(profile.as_ref(), preferences.as_ref()))
    }

    /// Asks the provider for a recipe. `Ok(None)` means the fallback recipe
    /// should be served instead.
    async fn provider_candidate(&self, prompt: String) -> Result<Option<Recipe>, CoreError> {
        let response_schema = self.structured_output.then(get_recipe_schema);

        let raw = match self
            .llm_client
            .generate_with_text(prompt, response_schema)
            .await
        {
            Ok(raw) => raw,
            Err(e) if self.provider_failure == ProviderFailurePolicy::Propagate => return Err(e),
            Err(e) => {
                warn!("Provider call failed, serving fallback recipe: {}", e);
                return Ok(None);
            }
        };

        let value = match extract_json_object(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("No recipe JSON in provider response, serving fallback recipe: {}", e);
                return Ok(None);
            }
        };

        match normalize_recipe(RecipeCandidate::Raw(value)) {
            Ok(recipe) => Ok(Some(recipe)),
            Err(e) => {
                warn!("Provider recipe rejected, serving fallback recipe: {}", e);
                Ok(None)
            }
        }
    }
}

impl<RE, PF, LLM> RecipeService for Service<RE, PF, LLM>
where
    RE: RecipeRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<GeneratedRecipe, CoreError> {
        // 1. Resolve the profile: inline first, stored second
        let profile = match (input.profile, input.user_id) {
            (Some(profile), _) => Some(profile),
            (None, Some(user_id)) => self.stored_profile(user_id).await?,
            (None, None) => None,
        };

        // 2. Build prompt and call the provider
        let prompt = build_prompt(&input.preferences, profile.as_ref());

        if let Some(recipe) = self.provider_candidate(prompt).await? {
            info!("Generated recipe \"{}\" from provider", recipe.title);
            return Ok(GeneratedRecipe {
                recipe,
                origin: RecipeOrigin::Provider,
            });
        }

        // 3. Deterministic fallback
        let recipe = normalize_recipe(RecipeCandidate::Recipe(fallback_recipe(
            &input.preferences,
        )))?;

        Ok(GeneratedRecipe {
            recipe,
            origin: RecipeOrigin::Fallback,
        })
    }

    async fn save_recipe(&self, user_id: Uuid, recipe: Recipe) -> Result<StoredRecipe, CoreError> {
        let recipe = normalize_recipe(RecipeCandidate::Recipe(recipe))?;

        // Saving the same recipe twice yields two rows.
        let stored = self
            .recipe_repository
            .create_recipe(StoredRecipe::new(user_id, recipe))
            .await?;

        info!("Saved recipe {} for user {}", stored.id, user_id);
        Ok(stored)
    }

    async fn get_recipes(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> Result<Vec<StoredRecipe>, CoreError> {
        self.recipe_repository
            .get_recipes_by_user(user_id, filter)
            .await
    }

    async fn get_recipe(&self, input: GetRecipeInput) -> Result<StoredRecipe, CoreError> {
        self.recipe_repository
            .get_recipe_by_id(input.recipe_id, input.user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn delete_recipe(&self, input: DeleteRecipeInput) -> Result<(), CoreError> {
        let deleted = self
            .recipe_repository
            .delete_recipe(input.recipe_id, input.user_id)
            .await?;

        if !deleted {
            return Err(CoreError::NotFound);
        }

        info!("Deleted recipe {} for user {}", input.recipe_id, input.user_id);
        Ok(())
    }

    async fn get_recipe_stats(&self, user_id: Uuid) -> Result<RecipeStats, CoreError> {
        let week_ago = Utc::now() - Duration::days(7);

        let total = self.recipe_repository.count_recipes(user_id, None).await?;
        let last_7_days = self
            .recipe_repository
            .count_recipes(user_id, Some(week_ago))
            .await?;

        Ok(RecipeStats { total, last_7_days })
    }
}
