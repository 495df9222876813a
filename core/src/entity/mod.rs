pub mod profiles;
pub mod recipes;
pub mod user_preferences;
