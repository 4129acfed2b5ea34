use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use insightchef_core::domain::common::{
    DEFAULT_ANTHROPIC_BASE_URL, DEFAULT_ANTHROPIC_MODEL, DEFAULT_ANTHROPIC_VERSION,
    DEFAULT_MAX_TOKENS, InsightChefConfig, LLMConfig, SampleMode,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "insightchef-api",
    about = "InsightChef recipe API",
    args_override_self = true
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173,http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Directory holding the built single-page app, served with an
    /// `index.html` fallback.
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    #[arg(long, env = "RATE_LIMIT_MAX", default_value_t = 20)]
    pub rate_limit_max: usize,

    #[arg(long, env = "RATE_LIMIT_WINDOW_SECS", default_value_t = 60)]
    pub rate_limit_window_secs: u64,

    #[arg(long, env = "BODY_LIMIT_BYTES", default_value_t = 50 * 1024)]
    pub body_limit_bytes: usize,

    /// Expose Prometheus metrics on `/metrics`.
    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = clap::ArgAction::Set)]
    pub metrics: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleModeArg {
    Auto,
    Always,
    Never,
}

impl From<SampleModeArg> for SampleMode {
    fn from(value: SampleModeArg) -> Self {
        match value {
            SampleModeArg::Auto => SampleMode::Auto,
            SampleModeArg::Always => SampleMode::Always,
            SampleModeArg::Never => SampleMode::Never,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_ANTHROPIC_BASE_URL)]
    pub anthropic_base_url: String,

    #[arg(long, env = "ANTHROPIC_MODEL", default_value = DEFAULT_ANTHROPIC_MODEL)]
    pub anthropic_model: String,

    #[arg(long, env = "ANTHROPIC_VERSION", default_value = DEFAULT_ANTHROPIC_VERSION)]
    pub anthropic_version: String,

    #[arg(long, env = "ANTHROPIC_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub anthropic_max_tokens: u32,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 90)]
    pub llm_timeout_secs: u64,

    #[arg(long, env = "SAMPLE_MODE", value_enum, default_value_t = SampleModeArg::Auto)]
    pub sample_mode: SampleModeArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl From<Args> for InsightChefConfig {
    fn from(args: Args) -> Self {
        InsightChefConfig {
            llm: LLMConfig {
                anthropic_api_key: args.llm.anthropic_api_key,
                anthropic_base_url: args.llm.anthropic_base_url,
                anthropic_model: args.llm.anthropic_model,
                anthropic_version: args.llm.anthropic_version,
                max_tokens: args.llm.anthropic_max_tokens,
                timeout: Duration::from_secs(args.llm.llm_timeout_secs),
                sample_mode: args.llm.sample_mode.into(),
            },
        }
    }
}
