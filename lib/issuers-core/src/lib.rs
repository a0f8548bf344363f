#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::issuers_config::{IssuersConfigProvider, issuers_config_provider_from_config};
use service::issuer::IssuersService;

pub mod config;
pub mod model;
pub mod provider;
pub mod service;

#[derive(Clone)]
pub struct IssuersCore {
    pub issuers_service: IssuersService,
}

impl IssuersCore {
    pub fn new(config: &CoreConfig) -> Self {
        tracing::debug!("Reading issuers config from {} source", config.issuers_source);

        Self::with_provider(issuers_config_provider_from_config(&config.issuers_source))
    }

    pub fn with_provider(issuers_config_provider: Arc<dyn IssuersConfigProvider>) -> Self {
        Self {
            issuers_service: IssuersService::new(issuers_config_provider),
        }
    }
}
