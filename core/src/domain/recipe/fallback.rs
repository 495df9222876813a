use serde_json::json;

use crate::domain::recipe::{
    entities::{NutritionalInfo, Recipe},
    normalizer::parse_servings,
    prompt::{DEFAULT_COOK_TIME, DEFAULT_CUISINE, DEFAULT_DIFFICULTY, DEFAULT_SERVINGS, non_blank},
    value_objects::Preferences,
};

pub const FALLBACK_TITLE: &str = "Healthy Generated Recipe";

const FALLBACK_INGREDIENTS: [&str; 5] = [
    "2 cups quinoa",
    "1 cup mixed vegetables",
    "2 tbsp olive oil",
    "Salt and pepper to taste",
    "Fresh herbs",
];

const FALLBACK_INSTRUCTIONS: [&str; 5] = [
    "Cook quinoa according to package instructions",
    "Sauté vegetables in olive oil",
    "Combine quinoa and vegetables",
    "Season with salt, pepper, and herbs",
    "Serve hot",
];

const FALLBACK_TAGS: [&str; 2] = ["healthy", "nutritious"];

/// Canned recipe used when the provider output cannot be turned into one.
///
/// Cuisine, cook time, difficulty and servings follow the preferences with
/// the same defaults the prompt uses; everything else is fixed.
pub fn fallback_recipe(preferences: &Preferences) -> Recipe {
    let text = |value: Option<&String>, default: &str| {
        non_blank(value.map(String::as_str))
            .unwrap_or(default)
            .to_string()
    };

    let servings = parse_servings(
        non_blank(preferences.servings.as_deref()).unwrap_or(DEFAULT_SERVINGS),
    );

    Recipe {
        title: FALLBACK_TITLE.to_string(),
        cuisine: Some(text(preferences.cuisine.as_ref(), DEFAULT_CUISINE)),
        cook_time: Some(text(preferences.cook_time.as_ref(), DEFAULT_COOK_TIME)),
        servings,
        difficulty: Some(text(preferences.difficulty.as_ref(), DEFAULT_DIFFICULTY)),
        ingredients: FALLBACK_INGREDIENTS.iter().map(|s| s.to_string()).collect(),
        instructions: FALLBACK_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        nutritional_info: Some(fallback_nutrition()),
        tags: FALLBACK_TAGS.iter().map(|s| s.to_string()).collect(),
        youtube_link: None,
    }
}

fn fallback_nutrition() -> NutritionalInfo {
    NutritionalInfo::from([
        ("calories".to_string(), json!(320)),
        ("protein".to_string(), json!("12g")),
        ("carbs".to_string(), json!("45g")),
        ("fat".to_string(), json!("12g")),
        ("fiber".to_string(), json!("6g")),
    ])
}
