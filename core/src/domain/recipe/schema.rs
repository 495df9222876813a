use serde_json::json;

/// Returns the JSON schema for recipe generation responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "cuisine": { "type": "string" },
            "cookTime": { "type": "string" },
            "servings": { "type": "integer" },
            "difficulty": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "nutritionalInfo": {
                "type": "object",
                "properties": {
                    "calories": { "type": "number" },
                    "protein": { "type": "string" },
                    "carbs": { "type": "string" },
                    "fat": { "type": "string" },
                    "fiber": { "type": "string" }
                }
            },
            "tags": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": [
            "title", "cuisine", "cookTime", "servings", "difficulty",
            "ingredients", "instructions", "nutritionalInfo", "tags"
        ]
    })
}
