use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileValidator {
    #[serde(default)]
    #[validate(length(max = 255, message = "fullName is too long"))]
    pub full_name: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i32>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "heightCm must be positive"))]
    pub height_cm: Option<f64>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "weightKg must be positive"))]
    pub weight_kg: Option<f64>,

    #[serde(default, alias = "dietary_goals")]
    pub dietary_goals: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPreferencesValidator {
    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default, alias = "cuisine_preferences")]
    pub cuisine_preferences: Vec<String>,

    #[serde(default)]
    pub deficiencies: Vec<String>,

    #[serde(default, alias = "food_preferences")]
    pub food_preferences: Vec<String>,
}
