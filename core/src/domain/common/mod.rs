use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::recipe::value_objects::ProviderFailurePolicy;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SouschefConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Base URL of the `generateContent` API, without the `/models/...` suffix.
    pub gemini_endpoint: String,
    pub timeout: Duration,
    /// Ask the provider for `application/json` output constrained by the recipe schema.
    pub structured_output: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PipelineConfig {
    pub provider_failure: ProviderFailurePolicy,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
