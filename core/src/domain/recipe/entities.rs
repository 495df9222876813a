use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Nutrition figures keyed by nutrient name. Values are JSON strings or numbers.
pub type NutritionalInfo = BTreeMap<String, serde_json::Value>;

/// Canonical recipe produced by the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub cuisine: Option<String>,
    pub cook_time: Option<String>,
    pub servings: u32,
    pub difficulty: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub nutritional_info: Option<NutritionalInfo>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub youtube_link: Option<String>,
}

/// Where a generated recipe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecipeOrigin {
    Provider,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecipe {
    pub recipe: Recipe,
    pub origin: RecipeOrigin,
}

/// Loosely-typed recipe data waiting for normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeCandidate {
    /// JSON object extracted from provider output.
    Raw(serde_json::Value),
    /// Already typed, e.g. the fallback recipe or a recipe submitted for saving.
    Recipe(Recipe),
}

/// A recipe saved to a user's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub recipe: Recipe,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredRecipe {
    pub fn new(user_id: Uuid, recipe: Recipe) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe,
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Collection counters shown on a user's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStats {
    pub total: u64,
    pub last_7_days: u64,
}
