use tracing::info;

use crate::{
    domain::common::{SouschefConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        llm::GeminiLLMClient,
        profile::PostgresProfileRepository,
        recipe::PostgresRecipeRepository,
    },
};

pub type SouschefService =
    Service<PostgresRecipeRepository, PostgresProfileRepository, GeminiLLMClient>;

/// Wires the Postgres repositories and the Gemini client into one service.
pub async fn create_service(config: SouschefConfig) -> Result<SouschefService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let recipe_repository = PostgresRecipeRepository::new(postgres.get_db());
    let profile_repository = PostgresProfileRepository::new(postgres.get_db());
    let llm_client = GeminiLLMClient::new(&config.llm)?;

    info!(
        model = %config.llm.gemini_model,
        provider_failure = ?config.pipeline.provider_failure,
        "recipe service ready"
    );

    Ok(Service::new(
        recipe_repository,
        profile_repository,
        llm_client,
        config.pipeline.provider_failure,
        config.llm.structured_output,
    ))
}
