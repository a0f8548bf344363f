use std::sync::Arc;

use crate::provider::issuers_config::IssuersConfigProvider;

pub mod service;

mod mapper;


#[derive(Clone)]
pub struct IssuersService {
    issuers_config_provider: Arc<dyn IssuersConfigProvider>,
}

impl IssuersService {
    pub fn new(issuers_config_provider: Arc<dyn IssuersConfigProvider>) -> Self {
        Self {
            issuers_config_provider,
        }
    }
}
