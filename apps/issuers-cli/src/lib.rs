#![cfg_attr(feature = "strict", deny(warnings))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use issuers_core::IssuersCore;
use issuers_core::service::error::ServiceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    pub trace_level: Option<String>,
    pub trace_json: Option<bool>,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Additional config files, merged over `config/config.yml`
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List enabled issuers without their client configuration
    List {
        /// Only issuers whose id starts with this value
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show the full configuration of one issuer
    Get { issuer_id: String },
    /// List every configured issuer with all fields
    ListAll,
}

pub async fn run(core: &IssuersCore, command: Command) -> Result<Value, ServiceError> {
    let service = &core.issuers_service;

    let output = match command {
        Command::List { filter } => {
            serde_json::to_value(service.get_all_issuers(filter.as_deref()).await?)
        }
        Command::Get { issuer_id } => {
            serde_json::to_value(service.get_issuer_config(&issuer_id.into()).await?)
        }
        Command::ListAll => serde_json::to_value(service.get_all_issuers_with_all_fields().await?),
    };

    output.map_err(|err| ServiceError::MappingError(err.to_string()))
}

/// Logs a failed command with its error code and converts it for the exit path.
pub fn command_error(err: ServiceError) -> anyhow::Error {
    let code = err.error_code();
    tracing::error!(%err, "{code} {}", code.msg());
    anyhow::anyhow!("{code} {}: {err}", code.msg())
}
