pub mod profile;
pub mod recipe;
pub mod server;
