use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    profile::value_objects::{UpsertDietaryPreferencesInput, UpsertProfileInput},
    recipe::value_objects::Profile,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub dietary_goals: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(input: UpsertProfileInput) -> Self {
        let now = Utc::now();

        Self {
            user_id: input.user_id,
            full_name: input.full_name,
            age: input.age,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            dietary_goals: input.dietary_goals,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreferences {
    pub user_id: Uuid,
    pub allergies: Vec<String>,
    pub cuisine_preferences: Vec<String>,
    pub deficiencies: Vec<String>,
    pub food_preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DietaryPreferences {
    pub fn new(input: UpsertDietaryPreferencesInput) -> Self {
        let now = Utc::now();

        Self {
            user_id: input.user_id,
            allergies: input.allergies,
            cuisine_preferences: input.cuisine_preferences,
            deficiencies: input.deficiencies,
            food_preferences: input.food_preferences,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Assembles the prompt profile from the stored rows.
///
/// Returns `None` when nothing useful is stored, so the prompt carries no
/// profile section at all.
pub fn generation_profile(
    profile: Option<&UserProfile>,
    preferences: Option<&DietaryPreferences>,
) -> Option<Profile> {
    let generation = Profile {
        dietary_goals: profile.map(|p| p.dietary_goals.clone()).unwrap_or_default(),
        food_preferences: preferences
            .map(|p| p.food_preferences.clone())
            .unwrap_or_default(),
        allergies: preferences.map(|p| p.allergies.clone()).unwrap_or_default(),
        deficiencies: preferences
            .map(|p| p.deficiencies.clone())
            .unwrap_or_default(),
    };

    (!generation.is_empty()).then_some(generation)
}
