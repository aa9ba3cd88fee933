use crate::config::toml_config::{ServiceConfig, TomlConfig};
use crate::core::calculator::{DEFAULT_AMOUNT, DEFAULT_TERM_MONTHS};
use crate::core::LoanPurpose;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "loan-quote")]
#[command(about = "Indicative loan quotes and loan application submission")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Application service endpoint (overrides the configuration file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides the configuration file)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the indicative monthly payment
    Quote(QuoteArgs),
    /// Log in, fill the loan form and submit it
    Apply(ApplyArgs),
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    #[arg(long, default_value_t = DEFAULT_AMOUNT)]
    pub amount: u32,

    #[arg(long, default_value_t = DEFAULT_TERM_MONTHS)]
    pub term: u32,

    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    #[arg(long)]
    pub email: String,

    /// Verification code (not checked, only required to be non-empty)
    #[arg(long)]
    pub code: String,

    #[arg(long, default_value_t = DEFAULT_AMOUNT)]
    pub amount: u32,

    #[arg(long, default_value_t = DEFAULT_TERM_MONTHS)]
    pub term: u32,

    /// personal, business, education, medical or other
    #[arg(long)]
    pub purpose: Option<LoanPurpose>,

    #[arg(long, default_value = "")]
    pub income: String,

    #[arg(long, default_value = "")]
    pub info: String,
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<TomlConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        let file_endpoint = file_config.as_ref().map(|c| c.service.endpoint.clone());
        let endpoint = self.endpoint.clone().or(file_endpoint);
        let endpoint = validation::validate_required_field("service.endpoint", &endpoint)?;

        let mut resolved = file_config.unwrap_or_else(|| TomlConfig {
            service: ServiceConfig {
                endpoint: String::new(),
                timeout_seconds: None,
                user_agent: None,
            },
            logging: None,
        });
        resolved.service.endpoint = endpoint.clone();
        if self.timeout_seconds.is_some() {
            resolved.service.timeout_seconds = self.timeout_seconds;
        }

        resolved.validate()?;
        Ok(resolved)
    }
}
