use serde::{Deserialize, Serialize};
use souschef_core::domain::recipe::{
    entities::{NutritionalInfo, Recipe},
    normalizer::DEFAULT_SERVINGS,
    value_objects::{Preferences, Profile},
};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

const MAX_FIELD_LENGTH: usize = 200;
const MAX_INGREDIENTS_LENGTH: usize = 2000;
const MAX_RESTRICTIONS: usize = 30;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeValidator {
    #[validate(custom(function = "validate_preferences"))]
    pub preferences: Preferences,

    /// Inline profile, used instead of the stored one when present.
    #[serde(default, alias = "user_profile")]
    pub user_profile: Option<Profile>,

    /// Loads the stored profile of this user when no inline profile is sent.
    #[serde(default, alias = "user_id")]
    pub user_id: Option<Uuid>,
}

fn validate_preferences(preferences: &Preferences) -> Result<(), ValidationError> {
    if preferences.dietary_restrictions.len() > MAX_RESTRICTIONS {
        return Err(ValidationError::new("too_many_restrictions").with_message(
            format!("at most {} dietary restrictions are allowed", MAX_RESTRICTIONS).into(),
        ));
    }

    if preferences
        .ingredients
        .as_deref()
        .is_some_and(|ingredients| ingredients.chars().count() > MAX_INGREDIENTS_LENGTH)
    {
        return Err(ValidationError::new("ingredients_too_long").with_message(
            format!("ingredients are limited to {} characters", MAX_INGREDIENTS_LENGTH).into(),
        ));
    }

    let too_long = [
        preferences.cuisine.as_deref(),
        preferences.cook_time.as_deref(),
        preferences.servings.as_deref(),
        preferences.difficulty.as_deref(),
        preferences.meal_type.as_deref(),
    ]
    .into_iter()
    .flatten()
    .chain(preferences.dietary_restrictions.iter().map(String::as_str))
    .any(|value| value.chars().count() > MAX_FIELD_LENGTH);

    if too_long {
        return Err(ValidationError::new("field_too_long").with_message(
            format!("preference values are limited to {} characters", MAX_FIELD_LENGTH).into(),
        ));
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub cuisine: Option<String>,

    #[serde(default)]
    pub cook_time: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "servings must be positive"))]
    pub servings: Option<u32>,

    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub nutritional_info: Option<NutritionalInfo>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    #[validate(url(message = "youtubeLink must be a URL"))]
    pub youtube_link: Option<String>,
}

impl From<SaveRecipeValidator> for Recipe {
    fn from(payload: SaveRecipeValidator) -> Self {
        Recipe {
            title: payload.title,
            cuisine: payload.cuisine,
            cook_time: payload.cook_time,
            servings: payload.servings.unwrap_or(DEFAULT_SERVINGS),
            difficulty: payload.difficulty,
            ingredients: payload.ingredients,
            instructions: payload.instructions,
            nutritional_info: payload.nutritional_info,
            tags: payload.tags,
            youtube_link: payload.youtube_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_generate_payload_accepts_both_casings() {
        let camel: GenerateRecipeValidator = serde_json::from_value(json!({
            "preferences": { "cuisine": "Thai" },
            "userProfile": { "allergies": ["Peanuts"] },
        }))
        .unwrap();
        assert_eq!(camel.user_profile.unwrap().allergies, vec!["Peanuts"]);

        let user_id = Uuid::new_v4();
        let snake: GenerateRecipeValidator = serde_json::from_value(json!({
            "preferences": {},
            "user_id": user_id,
        }))
        .unwrap();
        assert_eq!(snake.user_id, Some(user_id));
    }

    #[test]
    fn test_oversized_preferences_are_rejected() {
        let payload: GenerateRecipeValidator = serde_json::from_value(json!({
            "preferences": { "dietaryRestrictions": vec!["Vegan"; MAX_RESTRICTIONS + 1] },
        }))
        .unwrap();
        assert!(payload.validate().is_err());

        let payload: GenerateRecipeValidator = serde_json::from_value(json!({
            "preferences": { "cuisine": "x".repeat(MAX_FIELD_LENGTH + 1) },
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_saved_recipe_defaults_servings() {
        let payload: SaveRecipeValidator =
            serde_json::from_value(json!({ "title": "Soup", "ingredients": ["Water"] })).unwrap();
        assert!(payload.validate().is_ok());

        let recipe = Recipe::from(payload);
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
        assert_eq!(recipe.ingredients, vec!["Water"]);
    }

    #[test]
    fn test_saved_recipe_rejects_bad_link() {
        let payload: SaveRecipeValidator = serde_json::from_value(json!({
            "title": "Soup",
            "youtubeLink": "not a link",
        }))
        .unwrap();

        assert!(payload.validate().is_err());
    }
}
