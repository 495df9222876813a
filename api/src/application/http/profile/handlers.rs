pub mod get_preferences;
pub mod get_profile;
pub mod upsert_preferences;
pub mod upsert_profile;
