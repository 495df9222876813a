use chrono::Utc;

use crate::domain::recipe::{
    entities::{Recipe, StoredRecipe},
    normalizer::{DEFAULT_SERVINGS, nutritional_info, string_array},
};
use crate::entity::recipes::Model as RecipeModel;

impl From<RecipeModel> for StoredRecipe {
    fn from(model: RecipeModel) -> Self {
        StoredRecipe {
            id: model.id,
            user_id: model.user_id,
            recipe: Recipe {
                title: model.title,
                cuisine: model.cuisine,
                cook_time: model.cook_time,
                servings: u32::try_from(model.servings)
                    .ok()
                    .filter(|s| *s > 0)
                    .unwrap_or(DEFAULT_SERVINGS),
                difficulty: model.difficulty,
                ingredients: string_array(Some(&model.ingredients)),
                instructions: string_array(Some(&model.instructions)),
                nutritional_info: nutritional_info(model.nutritional_info.as_ref()),
                tags: string_array(Some(&model.tags)),
                youtube_link: model.youtube_link,
            },
            is_public: model.is_public,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
