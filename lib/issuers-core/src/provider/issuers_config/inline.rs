use super::IssuersConfigProvider;
use super::error::IssuersConfigProviderError;

pub struct StaticIssuersConfigProvider {
    content: Option<String>,
}

impl StaticIssuersConfigProvider {
    pub fn new(content: Option<String>) -> Self {
        Self { content }
    }
}

#[async_trait::async_trait]
impl IssuersConfigProvider for StaticIssuersConfigProvider {
    async fn get_issuers_config_json(&self) -> Result<Option<String>, IssuersConfigProviderError> {
        Ok(self.content.clone())
    }
}
