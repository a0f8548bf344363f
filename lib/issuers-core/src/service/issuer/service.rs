use shared_types::IssuerId;

use super::IssuersService;
use super::mapper::issuer_catalog_from_config_json;
use crate::model::issuer::{Issuer, IssuerCatalog};
use crate::service::error::ServiceError;

impl IssuersService {
    /// Lists enabled issuers with their configuration fields removed.
    ///
    /// A non-empty `filter_id` keeps only issuers whose id starts with it.
    /// No match is an empty catalog, not an error.
    pub async fn get_all_issuers(
        &self,
        filter_id: Option<&str>,
    ) -> Result<IssuerCatalog, ServiceError> {
        let catalog = self.load_catalog().await?;
        let total = catalog.len();
        let filter_id = filter_id.filter(|id| !id.is_empty());

        let issuers: IssuerCatalog = catalog
            .issuers
            .into_iter()
            .filter(Issuer::is_enabled)
            .filter(|issuer| filter_id.is_none_or(|id| issuer.id.as_str().starts_with(id)))
            .map(Issuer::into_redacted)
            .collect();

        tracing::debug!(
            "Listed {} of {total} issuers (filter: {filter_id:?})",
            issuers.len()
        );
        Ok(issuers)
    }

    /// Returns the complete record of the issuer with exactly this id,
    /// whether it is enabled or not.
    pub async fn get_issuer_config(&self, issuer_id: &IssuerId) -> Result<Issuer, ServiceError> {
        self.load_catalog()
            .await?
            .issuers
            .into_iter()
            .find(|issuer| &issuer.id == issuer_id)
            .ok_or_else(|| ServiceError::InvalidIssuerId(issuer_id.to_owned()))
    }

    /// Returns every configured issuer, unfiltered and unredacted.
    pub async fn get_all_issuers_with_all_fields(&self) -> Result<IssuerCatalog, ServiceError> {
        self.load_catalog().await
    }

    async fn load_catalog(&self) -> Result<IssuerCatalog, ServiceError> {
        let catalog = self
            .issuers_config_provider
            .get_issuers_config_json()
            .await
            .map_err(|err| ServiceError::ConfigUnavailable {
                reason: err.to_string(),
            })
            .and_then(|config| issuer_catalog_from_config_json(config.as_deref()));

        catalog.inspect_err(|err| {
            if let ServiceError::ConfigUnavailable { reason } = err {
                tracing::warn!("Issuers config not accessible: {reason}");
            }
        })
    }
}
