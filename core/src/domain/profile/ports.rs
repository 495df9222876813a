use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::{DietaryPreferences, UserProfile},
        value_objects::{UpsertDietaryPreferencesInput, UpsertProfileInput},
    },
};

/// Repository trait for per-user profile and dietary preference rows.
/// Writes are upserts keyed by the owner id.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn upsert_profile(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_dietary_preferences(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<DietaryPreferences>, CoreError>> + Send;

    fn upsert_dietary_preferences(
        &self,
        preferences: DietaryPreferences,
    ) -> impl Future<Output = Result<DietaryPreferences, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn get_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn upsert_profile(
        &self,
        input: UpsertProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_dietary_preferences(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<DietaryPreferences, CoreError>> + Send;

    fn upsert_dietary_preferences(
        &self,
        input: UpsertDietaryPreferencesInput,
    ) -> impl Future<Output = Result<DietaryPreferences, CoreError>> + Send;
}
