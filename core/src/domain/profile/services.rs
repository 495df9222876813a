use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    profile::{
        entities::{DietaryPreferences, UserProfile},
        ports::{ProfileRepository, ProfileService},
        value_objects::{UpsertDietaryPreferencesInput, UpsertProfileInput},
    },
    recipe::ports::{LLMClient, RecipeRepository},
};

impl<RE, PF, LLM> ProfileService for Service<RE, PF, LLM>
where
    RE: RecipeRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, CoreError> {
        self.profile_repository
            .get_profile(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn upsert_profile(&self, input: UpsertProfileInput) -> Result<UserProfile, CoreError> {
        let profile = self
            .profile_repository
            .upsert_profile(UserProfile::new(input))
            .await?;

        info!("Upserted profile for user {}", profile.user_id);
        Ok(profile)
    }

    async fn get_dietary_preferences(&self, user_id: Uuid) -> Result<DietaryPreferences, CoreError> {
        self.profile_repository
            .get_dietary_preferences(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn upsert_dietary_preferences(
        &self,
        input: UpsertDietaryPreferencesInput,
    ) -> Result<DietaryPreferences, CoreError> {
        let preferences = self
            .profile_repository
            .upsert_dietary_preferences(DietaryPreferences::new(input))
            .await?;

        info!("Upserted dietary preferences for user {}", preferences.user_id);
        Ok(preferences)
    }
}
