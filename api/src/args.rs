use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use souschef_core::{
    domain::{
        common::{DatabaseConfig, LLMConfig, PipelineConfig, SouschefConfig},
        recipe::value_objects::ProviderFailurePolicy,
    },
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_ENDPOINT,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "souschef", version, about = "Recipe generation service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list. `*` allows any origin without credentials.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "souschef")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-endpoint", env = "GEMINI_ENDPOINT", default_value = DEFAULT_GEMINI_ENDPOINT)]
    pub gemini_endpoint: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Request `application/json` output constrained by the recipe schema.
    #[arg(long = "llm-structured-output", env = "LLM_STRUCTURED_OUTPUT")]
    pub structured_output: bool,

    /// `fallback` answers with the canned recipe, `propagate` returns 502.
    #[arg(
        long = "provider-failure",
        env = "PROVIDER_FAILURE",
        default_value = "fallback"
    )]
    pub provider_failure: ProviderFailurePolicy,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for SouschefConfig {
    fn from(args: Args) -> Self {
        SouschefConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_endpoint: args.llm.gemini_endpoint,
                timeout: Duration::from_secs(args.llm.timeout_secs),
                structured_output: args.llm.structured_output,
            },
            pipeline: PipelineConfig {
                provider_failure: args.llm.provider_failure,
            },
        }
    }
}
