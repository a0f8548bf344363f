use crate::model::issuer::IssuerCatalog;
use crate::service::error::ServiceError;

/// Parses the raw catalog JSON. A missing or empty document means the
/// catalog is not accessible, which is different from a document listing
/// zero issuers.
pub(super) fn issuer_catalog_from_config_json(
    config: Option<&str>,
) -> Result<IssuerCatalog, ServiceError> {
    let config = config
        .filter(|config| !config.is_empty())
        .ok_or_else(|| ServiceError::ConfigUnavailable {
            reason: "issuers config is empty".to_string(),
        })?;

    serde_json::from_str(config).map_err(|err| ServiceError::MappingError(err.to_string()))
}
