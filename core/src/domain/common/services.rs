use crate::domain::{
    profile::ports::ProfileRepository,
    recipe::{ports::{LLMClient, RecipeRepository}, value_objects::ProviderFailurePolicy},
};

/// Application service shared by every domain service implementation.
///
/// Repositories and the provider client are injected at construction so the
/// pipeline can run against fakes in tests.
#[derive(Clone)]
pub struct Service<RE, PF, LLM>
where
    RE: RecipeRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    pub(crate) recipe_repository: RE,
    pub(crate) profile_repository: PF,
    pub(crate) llm_client: LLM,
    pub(crate) provider_failure: ProviderFailurePolicy,
    pub(crate) structured_output: bool,
}

impl<RE, PF, LLM> Service<RE, PF, LLM>
where
    RE: RecipeRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    pub fn new(
        recipe_repository: RE,
        profile_repository: PF,
        llm_client: LLM,
        provider_failure: ProviderFailurePolicy,
        structured_output: bool,
    ) -> Self {
        Self {
            recipe_repository,
            profile_repository,
            llm_client,
            provider_failure,
            structured_output,
        }
    }
}
