use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Recipe constraints supplied for a single generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default, alias = "cook_time")]
    pub cook_time: Option<String>,
    /// A bare number, a range such as `"3-4"` or an open bound such as `"6+"`.
    #[serde(default, deserialize_with = "string_or_number")]
    pub servings: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Free-form ingredient wishes.
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default, alias = "dietary_restrictions")]
    pub dietary_restrictions: Vec<String>,
    #[serde(default, alias = "meal_type")]
    pub meal_type: Option<String>,
}

/// Longer-lived dietary constraints of the requesting user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, alias = "dietary_goals")]
    pub dietary_goals: Vec<String>,
    #[serde(default, alias = "food_preferences")]
    pub food_preferences: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub deficiencies: Vec<String>,
}

impl Profile {
    pub fn is_empty(&self) -> bool {
        self.dietary_goals.is_empty()
            && self.food_preferences.is_empty()
            && self.allergies.is_empty()
            && self.deficiencies.is_empty()
    }
}

/// What to do when the provider cannot be reached or answers with an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderFailurePolicy {
    /// Answer with the canned fallback recipe, same as an unparseable response.
    #[default]
    Fallback,
    /// Surface the provider error to the caller.
    Propagate,
}

impl FromStr for ProviderFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(ProviderFailurePolicy::Fallback),
            "propagate" => Ok(ProviderFailurePolicy::Propagate),
            other => Err(format!("unknown provider failure policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub preferences: Preferences,
    /// Inline profile; takes precedence over the stored one.
    pub profile: Option<Profile>,
    /// When set and no inline profile is given, the stored profile is used.
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct GetRecipesFilter {
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GetRecipeInput {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct DeleteRecipeInput {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_accept_numeric_servings() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"cuisine":"Thai","servings":6}"#).unwrap();
        assert_eq!(prefs.servings.as_deref(), Some("6"));
        assert_eq!(prefs.cuisine.as_deref(), Some("Thai"));
        assert!(prefs.dietary_restrictions.is_empty());
    }

    #[test]
    fn test_preferences_accept_snake_case_keys() {
        let prefs: Preferences = serde_json::from_str(
            r#"{"cook_time":"1 hour","dietary_restrictions":["Vegan"],"meal_type":"Dinner"}"#,
        )
        .unwrap();
        assert_eq!(prefs.cook_time.as_deref(), Some("1 hour"));
        assert_eq!(prefs.dietary_restrictions, vec!["Vegan".to_string()]);
        assert_eq!(prefs.meal_type.as_deref(), Some("Dinner"));
    }

    #[test]
    fn test_profile_accepts_both_key_styles() {
        let camel: Profile = serde_json::from_str(r#"{"dietaryGoals":["Lose weight"]}"#).unwrap();
        let snake: Profile = serde_json::from_str(r#"{"dietary_goals":["Lose weight"]}"#).unwrap();
        assert_eq!(camel, snake);
        assert!(!camel.is_empty());
        assert!(Profile::default().is_empty());
    }

    #[test]
    fn test_provider_failure_policy_parse() {
        assert_eq!(
            "fallback".parse::<ProviderFailurePolicy>(),
            Ok(ProviderFailurePolicy::Fallback)
        );
        assert_eq!(
            "Propagate".parse::<ProviderFailurePolicy>(),
            Ok(ProviderFailurePolicy::Propagate)
        );
        assert!("retry".parse::<ProviderFailurePolicy>().is_err());
    }
}
