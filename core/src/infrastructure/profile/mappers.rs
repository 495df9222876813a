use chrono::Utc;

use crate::domain::{
    profile::entities::{DietaryPreferences, UserProfile},
    recipe::normalizer::string_array,
};
use crate::entity::{
    profiles::Model as ProfileModel, user_preferences::Model as DietaryPreferencesModel,
};

impl From<ProfileModel> for UserProfile {
    fn from(model: ProfileModel) -> Self {
        UserProfile {
            user_id: model.user_id,
            full_name: model.full_name,
            age: model.age,
            height_cm: model.height_cm,
            weight_kg: model.weight_kg,
            dietary_goals: string_array(Some(&model.dietary_goals)),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<DietaryPreferencesModel> for DietaryPreferences {
    fn from(model: DietaryPreferencesModel) -> Self {
        DietaryPreferences {
            user_id: model.user_id,
            allergies: string_array(Some(&model.allergies)),
            cuisine_preferences: string_array(Some(&model.cuisine_preferences)),
            deficiencies: string_array(Some(&model.deficiencies)),
            food_preferences: string_array(Some(&model.food_preferences)),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
