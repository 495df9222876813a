use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{NutritionalInfo, Recipe, RecipeCandidate},
};

pub const DEFAULT_SERVINGS: u32 = 4;

/// Coerces a candidate into the canonical [`Recipe`] shape.
///
/// Every field except the title degrades to a default instead of failing.
pub fn normalize_recipe(candidate: RecipeCandidate) -> Result<Recipe, CoreError> {
    match candidate {
        RecipeCandidate::Raw(value) => normalize_value(&value),
        RecipeCandidate::Recipe(recipe) => normalize_typed(recipe),
    }
}

/// Servings rule shared by provider output and preferences:
/// `"a-b"` takes the upper bound, `"n+"` takes `n`, anything else is parsed
/// as an integer. Unparseable or non-positive values resolve to 4.
pub fn parse_servings(value: &str) -> u32 {
    let value = value.trim();
    let count = match value.split_once('-') {
        Some((_, upper)) => upper,
        None => value.strip_suffix('+').unwrap_or(value),
    };

    count
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_SERVINGS)
}

/// Keeps the string elements of a JSON array, in order.
pub(crate) fn string_array(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn nutritional_info(value: Option<&Value>) -> Option<NutritionalInfo> {
    let Some(Value::Object(map)) = value else {
        return None;
    };

    Some(
        map.iter()
            .filter(|(_, v)| v.is_string() || v.is_number())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    )
}

fn normalize_value(value: &Value) -> Result<Recipe, CoreError> {
    let object = value.as_object().ok_or_else(|| {
        CoreError::ValidationError("recipe candidate is not a JSON object".to_string())
    })?;

    let title = field(object, &["title", "name"])
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CoreError::ValidationError("recipe title is missing".to_string()))?;

    Ok(Recipe {
        title: title.to_string(),
        cuisine: text(field(object, &["cuisine"])),
        cook_time: text(field(object, &["cookTime", "cook_time"])),
        servings: servings(field(object, &["servings"])),
        difficulty: text(field(object, &["difficulty"])),
        ingredients: string_array(field(object, &["ingredients"])),
        instructions: string_array(field(object, &["instructions"])),
        nutritional_info: nutritional_info(field(
            object,
            &["nutritionalInfo", "nutritional_info"],
        )),
        tags: string_array(field(object, &["tags"])),
        youtube_link: field(object, &["youtubeLink", "youtube_link"])
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|link| !link.is_empty())
            .map(str::to_string),
    })
}

fn normalize_typed(mut recipe: Recipe) -> Result<Recipe, CoreError> {
    let title = recipe.title.trim();
    if title.is_empty() {
        return Err(CoreError::ValidationError(
            "recipe title is missing".to_string(),
        ));
    }
    recipe.title = title.to_string();

    if recipe.servings == 0 {
        recipe.servings = DEFAULT_SERVINGS;
    }

    Ok(recipe)
}

fn field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| object.get(*key))
        .filter(|v| !v.is_null())
}

fn text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn servings(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f > 0.0 && *f <= u32::MAX as f64)
                    .map(|f| f as u64)
            })
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_SERVINGS),
        Some(Value::String(s)) => parse_servings(s),
        _ => DEFAULT_SERVINGS,
    }
}
