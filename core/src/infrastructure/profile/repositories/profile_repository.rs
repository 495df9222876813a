use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::{DietaryPreferences, UserProfile},
        ports::ProfileRepository,
    },
};
use crate::entity::{
    profiles::{
        ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as ProfileEntity,
    },
    user_preferences::{
        ActiveModel as DietaryPreferencesActiveModel, Column as DietaryPreferencesColumn,
        Entity as DietaryPreferencesEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let profile = ProfileEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get profile: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?
            .map(UserProfile::from);

        Ok(profile)
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        ProfileEntity::insert(ProfileActiveModel {
            user_id: Set(profile.user_id),
            full_name: Set(profile.full_name),
            age: Set(profile.age),
            height_cm: Set(profile.height_cm),
            weight_kg: Set(profile.weight_kg),
            dietary_goals: Set(json!(profile.dietary_goals)),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        })
        .on_conflict(
            OnConflict::column(ProfileColumn::UserId)
                .update_columns([
                    ProfileColumn::FullName,
                    ProfileColumn::Age,
                    ProfileColumn::HeightCm,
                    ProfileColumn::WeightKg,
                    ProfileColumn::DietaryGoals,
                    ProfileColumn::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await
        .map(UserProfile::from)
        .map_err(|e| {
            error!("Failed to upsert profile: {}", e);
            CoreError::PersistenceError(e.to_string())
        })
    }

    async fn get_dietary_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<Option<DietaryPreferences>, CoreError> {
        let preferences = DietaryPreferencesEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get dietary preferences: {}", e);
                CoreError::PersistenceError(e.to_string())
            })?
            .map(DietaryPreferences::from);

        Ok(preferences)
    }

    async fn upsert_dietary_preferences(
        &self,
        preferences: DietaryPreferences,
    ) -> Result<DietaryPreferences, CoreError> {
        DietaryPreferencesEntity::insert(DietaryPreferencesActiveModel {
            user_id: Set(preferences.user_id),
            allergies: Set(json!(preferences.allergies)),
            cuisine_preferences: Set(json!(preferences.cuisine_preferences)),
            deficiencies: Set(json!(preferences.deficiencies)),
            food_preferences: Set(json!(preferences.food_preferences)),
            created_at: Set(preferences.created_at.fixed_offset()),
            updated_at: Set(preferences.updated_at.fixed_offset()),
        })
        .on_conflict(
            OnConflict::column(DietaryPreferencesColumn::UserId)
                .update_columns([
                    DietaryPreferencesColumn::Allergies,
                    DietaryPreferencesColumn::CuisinePreferences,
                    DietaryPreferencesColumn::Deficiencies,
                    DietaryPreferencesColumn::FoodPreferences,
                    DietaryPreferencesColumn::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await
        .map(DietaryPreferences::from)
        .map_err(|e| {
            error!("Failed to upsert dietary preferences: {}", e);
            CoreError::PersistenceError(e.to_string())
        })
    }
}
