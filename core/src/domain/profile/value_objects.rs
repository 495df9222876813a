use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UpsertProfileInput {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub dietary_goals: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UpsertDietaryPreferencesInput {
    pub user_id: Uuid,
    pub allergies: Vec<String>,
    pub cuisine_preferences: Vec<String>,
    pub deficiencies: Vec<String>,
    pub food_preferences: Vec<String>,
}
