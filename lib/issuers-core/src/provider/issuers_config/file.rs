use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::IssuersConfigProvider;
use super::error::IssuersConfigProviderError;

/// Reads the catalog from a local file on every call, so edits are picked up
/// without a restart.
pub struct FileIssuersConfigProvider {
    path: PathBuf,
}

impl FileIssuersConfigProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl IssuersConfigProvider for FileIssuersConfigProvider {
    async fn get_issuers_config_json(&self) -> Result<Option<String>, IssuersConfigProviderError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("Issuers config file {} not found", self.path.display());
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
