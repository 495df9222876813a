pub mod db;
pub mod llm;
pub mod profile;
pub mod recipe;
