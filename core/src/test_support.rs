//! Stateful in-memory repositories shared by the service tests.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::{DietaryPreferences, UserProfile},
        ports::ProfileRepository,
    },
    recipe::{
        entities::StoredRecipe,
        ports::RecipeRepository,
        value_objects::GetRecipesFilter,
    },
};

#[derive(Default)]
pub struct InMemoryRecipeRepository {
    recipes: Mutex<Vec<StoredRecipe>>,
    fail: bool,
}

impl InMemoryRecipeRepository {
    pub fn failing() -> Self {
        Self {
            recipes: Mutex::default(),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), CoreError> {
        if self.fail {
            return Err(CoreError::PersistenceError("database unavailable".to_string()));
        }
        Ok(())
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn create_recipe(&self, recipe: StoredRecipe) -> Result<StoredRecipe, CoreError> {
        self.check()?;
        self.recipes.lock().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn get_recipes_by_user(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> Result<Vec<StoredRecipe>, CoreError> {
        self.check()?;
        let search = filter.search.map(|s| s.to_lowercase());
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .filter(|r| {
                search
                    .as_ref()
                    .is_none_or(|s| r.recipe.title.to_lowercase().contains(s))
            })
            .skip(filter.offset.unwrap_or(0) as usize)
            .take(filter.limit.map(|l| l as usize).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn get_recipe_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<StoredRecipe>, CoreError> {
        self.check()?;
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == recipe_id && r.user_id == user_id)
            .cloned())
    }

    async fn delete_recipe(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        self.check()?;
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|r| !(r.id == recipe_id && r.user_id == user_id));
        Ok(recipes.len() != before)
    }

    async fn count_recipes(
        &self,
        user_id: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> Result<u64, CoreError> {
        self.check()?;
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter(|r| since.is_none_or(|since| r.created_at >= since))
            .count() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<Vec<UserProfile>>,
    preferences: Mutex<Vec<DietaryPreferences>>,
}

impl InMemoryProfileRepository {
    pub fn insert_profile(&self, profile: UserProfile) {
        let mut profiles = self.profiles.lock().unwrap();
        profiles.retain(|p| p.user_id != profile.user_id);
        profiles.push(profile);
    }

    pub fn profiles_len(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    pub fn insert_preferences(&self, preferences: DietaryPreferences) {
        let mut rows = self.preferences.lock().unwrap();
        rows.retain(|p| p.user_id != preferences.user_id);
        rows.push(preferences);
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        self.insert_profile(profile.clone());
        Ok(profile)
    }

    async fn get_dietary_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<Option<DietaryPreferences>, CoreError> {
        Ok(self
            .preferences
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn upsert_dietary_preferences(
        &self,
        preferences: DietaryPreferences,
    ) -> Result<DietaryPreferences, CoreError> {
        self.insert_preferences(preferences.clone());
        Ok(preferences)
    }
}
