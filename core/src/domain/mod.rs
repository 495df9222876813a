pub mod common;
pub mod profile;
pub mod recipe;
