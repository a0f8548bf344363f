//! Source of the raw issuer catalog JSON.

pub mod error;
pub mod file;
pub mod inline;

use std::sync::Arc;

use crate::config::core_config::IssuersSourceConfig;
use crate::provider::issuers_config::error::IssuersConfigProviderError;
use crate::provider::issuers_config::file::FileIssuersConfigProvider;
use crate::provider::issuers_config::inline::StaticIssuersConfigProvider;

/// Supplies the issuer catalog as JSON text.
///
/// `Ok(None)`, an empty string and an error all mean the catalog is not
/// accessible right now.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait IssuersConfigProvider: Send + Sync {
    async fn get_issuers_config_json(&self) -> Result<Option<String>, IssuersConfigProviderError>;
}

pub fn issuers_config_provider_from_config(
    config: &IssuersSourceConfig,
) -> Arc<dyn IssuersConfigProvider> {
    match config {
        IssuersSourceConfig::File { path } => Arc::new(FileIssuersConfigProvider::new(path)),
        IssuersSourceConfig::Inline { content } => {
            Arc::new(StaticIssuersConfigProvider::new(Some(content.to_owned())))
        }
    }
}
