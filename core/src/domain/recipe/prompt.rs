use crate::domain::recipe::value_objects::{Preferences, Profile};

pub const DEFAULT_CUISINE: &str = "Any";
pub const DEFAULT_COOK_TIME: &str = "30 minutes";
pub const DEFAULT_SERVINGS: &str = "4";
pub const DEFAULT_DIFFICULTY: &str = "Medium";
const DEFAULT_INGREDIENTS: &str = "None specified";
const DEFAULT_RESTRICTIONS: &str = "None";

const RESPONSE_FORMAT: &str = r#"Please provide a response as exactly one JSON object in the following format:
{
  "title": "Recipe name",
  "cuisine": "Cuisine type",
  "cookTime": "Cooking time",
  "servings": 4,
  "difficulty": "Easy/Medium/Hard",
  "ingredients": ["ingredient 1", "ingredient 2", ...],
  "instructions": ["step 1", "step 2", ...],
  "nutritionalInfo": {
    "calories": 300,
    "protein": "25g",
    "carbs": "30g",
    "fat": "10g",
    "fiber": "8g"
  },
  "tags": ["healthy", "vegetarian", ...]
}

Make sure the recipe is healthy, balanced, and meets the specified requirements."#;

/// Returns the trimmed value, or `None` when absent or blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Builds the provider prompt for a generation request.
///
/// The output depends only on the arguments, so identical inputs always
/// produce byte-identical prompts.
pub fn build_prompt(preferences: &Preferences, profile: Option<&Profile>) -> String {
    let mut prompt = String::from("Generate a healthy recipe with the following requirements:\n\n");

    push_line(
        &mut prompt,
        "Cuisine",
        non_blank(preferences.cuisine.as_deref()).unwrap_or(DEFAULT_CUISINE),
    );
    push_line(
        &mut prompt,
        "Cook Time",
        non_blank(preferences.cook_time.as_deref()).unwrap_or(DEFAULT_COOK_TIME),
    );
    push_line(
        &mut prompt,
        "Servings",
        non_blank(preferences.servings.as_deref()).unwrap_or(DEFAULT_SERVINGS),
    );
    push_line(
        &mut prompt,
        "Difficulty",
        non_blank(preferences.difficulty.as_deref()).unwrap_or(DEFAULT_DIFFICULTY),
    );
    if let Some(meal_type) = non_blank(preferences.meal_type.as_deref()) {
        push_line(&mut prompt, "Meal Type", meal_type);
    }
    push_line(
        &mut prompt,
        "Specific Ingredients",
        non_blank(preferences.ingredients.as_deref()).unwrap_or(DEFAULT_INGREDIENTS),
    );

    let restrictions = join_unique(&preferences.dietary_restrictions);
    push_line(
        &mut prompt,
        "Dietary Restrictions",
        if restrictions.is_empty() {
            DEFAULT_RESTRICTIONS
        } else {
            restrictions.as_str()
        },
    );

    if let Some(profile) = profile {
        push_list(&mut prompt, "Dietary Goals", &profile.dietary_goals);
        push_list(&mut prompt, "Food Preferences", &profile.food_preferences);
        push_list(&mut prompt, "Allergies to avoid", &profile.allergies);
        push_list(
            &mut prompt,
            "Nutritional deficiencies to address",
            &profile.deficiencies,
        );
    }

    prompt.push('\n');
    prompt.push_str(RESPONSE_FORMAT);
    prompt
}

fn push_line(prompt: &mut String, label: &str, value: &str) {
    prompt.push_str(label);
    prompt.push_str(": ");
    prompt.push_str(value);
    prompt.push('\n');
}

fn push_list(prompt: &mut String, label: &str, values: &[String]) {
    let joined = join_unique(values);
    if !joined.is_empty() {
        push_line(prompt, label, &joined);
    }
}

/// Joins non-blank entries with ", ", keeping the first occurrence of each.
fn join_unique(values: &[String]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(values.len());
    for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen.join(", ")
}
