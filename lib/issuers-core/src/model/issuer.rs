use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use shared_types::IssuerId;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Value of the `enabled` flag that marks an issuer as listed.
pub const ISSUER_ENABLED: &str = "true";

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerLogo {
    pub url: Option<String>,
    pub alt_text: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerDisplay {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub logo: Option<IssuerLogo>,
}

/// One configured credential issuer.
///
/// `display`, `client_id`, `enabled` and `well_known_endpoint` are public.
/// The fields enumerated by [`IssuerConfigField`] are only handed out by the
/// full-configuration queries.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    #[serde(rename = "credential_issuer")]
    pub id: IssuerId,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub display: Vec<IssuerDisplay>,
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_enabled")]
    pub enabled: Option<String>,
    #[serde(rename = "wellKnownEndpoint", alias = ".well-known")]
    pub well_known_endpoint: Option<String>,

    pub authorization_endpoint: Option<String>,
    pub authorization_audience: Option<String>,
    pub token_endpoint: Option<String>,
    pub proxy_token_endpoint: Option<String>,
    pub credential_endpoint: Option<String>,
    pub credential_audience: Option<String>,
    pub redirect_uri: Option<String>,
    pub additional_headers: Option<HashMap<String, String>>,
}

/// Issuer fields that carry client configuration rather than public data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum IssuerConfigField {
    AuthorizationEndpoint,
    AuthorizationAudience,
    TokenEndpoint,
    ProxyTokenEndpoint,
    CredentialEndpoint,
    CredentialAudience,
    RedirectUri,
    AdditionalHeaders,
}

impl Issuer {
    pub fn new(id: impl Into<IssuerId>) -> Self {
        Self {
            id: id.into(),
            display: vec![],
            client_id: None,
            enabled: None,
            well_known_endpoint: None,
            authorization_endpoint: None,
            authorization_audience: None,
            token_endpoint: None,
            proxy_token_endpoint: None,
            credential_endpoint: None,
            credential_audience: None,
            redirect_uri: None,
            additional_headers: None,
        }
    }

    /// Only the exact literal `"true"` enables an issuer.
    pub fn is_enabled(&self) -> bool {
        self.enabled.as_deref() == Some(ISSUER_ENABLED)
    }

    pub fn has_config_field(&self, field: IssuerConfigField) -> bool {
        match field {
            IssuerConfigField::AuthorizationEndpoint => self.authorization_endpoint.is_some(),
            IssuerConfigField::AuthorizationAudience => self.authorization_audience.is_some(),
            IssuerConfigField::TokenEndpoint => self.token_endpoint.is_some(),
            IssuerConfigField::ProxyTokenEndpoint => self.proxy_token_endpoint.is_some(),
            IssuerConfigField::CredentialEndpoint => self.credential_endpoint.is_some(),
            IssuerConfigField::CredentialAudience => self.credential_audience.is_some(),
            IssuerConfigField::RedirectUri => self.redirect_uri.is_some(),
            IssuerConfigField::AdditionalHeaders => self.additional_headers.is_some(),
        }
    }

    /// Returns the issuer with every [`IssuerConfigField`] unset.
    pub fn into_redacted(mut self) -> Self {
        IssuerConfigField::iter().for_each(|field| self.clear_config_field(field));
        self
    }

    fn clear_config_field(&mut self, field: IssuerConfigField) {
        match field {
            IssuerConfigField::AuthorizationEndpoint => self.authorization_endpoint = None,
            IssuerConfigField::AuthorizationAudience => self.authorization_audience = None,
            IssuerConfigField::TokenEndpoint => self.token_endpoint = None,
            IssuerConfigField::ProxyTokenEndpoint => self.proxy_token_endpoint = None,
            IssuerConfigField::CredentialEndpoint => self.credential_endpoint = None,
            IssuerConfigField::CredentialAudience => self.credential_audience = None,
            IssuerConfigField::RedirectUri => self.redirect_uri = None,
            IssuerConfigField::AdditionalHeaders => self.additional_headers = None,
        }
    }
}

/// Accepts the flag as a string, or as a JSON boolean or number kept in its
/// textual form.
fn deserialize_enabled<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum EnabledValue {
        Text(String),
        Bool(bool),
        Number(serde_json::Number),
    }

    Ok(
        Option::<EnabledValue>::deserialize(deserializer)?.map(|value| match value {
            EnabledValue::Text(text) => text,
            EnabledValue::Bool(flag) => flag.to_string(),
            EnabledValue::Number(number) => number.to_string(),
        }),
    )
}

/// Issuers in the order they appear in the configuration.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerCatalog {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub issuers: Vec<Issuer>,
}

impl IssuerCatalog {
    pub fn len(&self) -> usize {
        self.issuers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issuers.is_empty()
    }
}

impl From<Vec<Issuer>> for IssuerCatalog {
    fn from(issuers: Vec<Issuer>) -> Self {
        Self { issuers }
    }
}

impl FromIterator<Issuer> for IssuerCatalog {
    fn from_iter<T: IntoIterator<Item = Issuer>>(iter: T) -> Self {
        Self {
            issuers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use maplit::hashmap;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn issuer_with_all_fields() -> Issuer {
        Issuer {
            display: vec![IssuerDisplay {
                name: Some("Issuer2".to_string()),
                title: Some("Download via Issuer2".to_string()),
                description: Some("Issuer2 description".to_string()),
                language: Some("en".to_string()),
                logo: Some(IssuerLogo {
                    url: Some("/logo".to_string()),
                    alt_text: Some("logo-url".to_string()),
                }),
            }],
            client_id: Some("123".to_string()),
            enabled: Some("true".to_string()),
            well_known_endpoint: Some("/.well-known".to_string()),
            authorization_endpoint: Some("/authorization_endpoint".to_string()),
            authorization_audience: Some("/authorization_audience".to_string()),
            token_endpoint: Some("/token_endpoint".to_string()),
            proxy_token_endpoint: Some("/proxy_token_endpoint".to_string()),
            credential_endpoint: Some("/credential_endpoint".to_string()),
            credential_audience: Some("/credential_audience".to_string()),
            redirect_uri: Some("/redirection".to_string()),
            additional_headers: Some(hashmap! {
                "Content-Type".to_string() => "application/json".to_string(),
            }),
            ..Issuer::new("Issuer2id")
        }
    }

    #[test]
    fn test_config_fields_are_the_eight_configuration_keys() {
        let names: Vec<String> = IssuerConfigField::iter().map(|f| f.to_string()).collect();

        assert_eq!(
            names,
            vec![
                "authorization_endpoint",
                "authorization_audience",
                "token_endpoint",
                "proxy_token_endpoint",
                "credential_endpoint",
                "credential_audience",
                "redirect_uri",
                "additional_headers",
            ]
        );
    }

    #[test]
    fn test_redacted_clears_every_config_field_and_keeps_public_fields() {
        let issuer = issuer_with_all_fields();
        assert!(IssuerConfigField::iter().all(|field| issuer.has_config_field(field)));

        let redacted = issuer.clone().into_redacted();

        for field in IssuerConfigField::iter() {
            assert!(!redacted.has_config_field(field), "{field} still set");
        }
        assert_eq!(redacted.id, issuer.id);
        assert_eq!(redacted.display, issuer.display);
        assert_eq!(redacted.client_id, issuer.client_id);
        assert_eq!(redacted.enabled, issuer.enabled);
        assert_eq!(redacted.well_known_endpoint, issuer.well_known_endpoint);
    }

    #[test]
    fn test_redacted_issuer_serializes_without_config_keys() {
        let redacted = issuer_with_all_fields().into_redacted();

        let value = serde_json::to_value(&redacted).unwrap();
        let object = value.as_object().unwrap();

        for field in IssuerConfigField::iter() {
            assert!(!object.contains_key(field.as_ref()), "{field} serialized");
        }
        assert_eq!(object["credential_issuer"], json!("Issuer2id"));
        assert_eq!(object["wellKnownEndpoint"], json!("/.well-known"));
    }

    #[rstest]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    #[case(Some("TRUE"), false)]
    #[case(Some("True"), false)]
    #[case(Some(""), false)]
    #[case(None, false)]
    fn test_is_enabled_requires_exact_true(#[case] enabled: Option<&str>, #[case] expected: bool) {
        let issuer = Issuer {
            enabled: enabled.map(ToString::to_string),
            ..Issuer::new("id")
        };

        assert_eq!(issuer.is_enabled(), expected);
    }

    #[test]
    fn test_well_known_endpoint_accepts_dot_well_known_alias() {
        let issuer: Issuer = serde_json::from_value(json!({
            "credential_issuer": "Issuer1id",
            ".well-known": "/.well-known"
        }))
        .unwrap();

        assert_eq!(issuer.well_known_endpoint.as_deref(), Some("/.well-known"));
    }

    #[rstest]
    #[case(json!("true"), Some("true"))]
    #[case(json!(true), Some("true"))]
    #[case(json!(false), Some("false"))]
    #[case(json!(1), Some("1"))]
    #[case(json!(null), None)]
    fn test_enabled_accepts_boolean_and_number(
        #[case] enabled: serde_json::Value,
        #[case] expected: Option<&str>,
    ) {
        let issuer: Issuer = serde_json::from_value(json!({
            "credential_issuer": "Issuer1id",
            "enabled": enabled
        }))
        .unwrap();

        assert_eq!(issuer.enabled.as_deref(), expected);
    }

    #[test]
    fn test_enabled_boolean_true_enables_issuer() {
        let issuer: Issuer =
            serde_json::from_str(r#"{"credential_issuer": "Issuer1id", "enabled": true}"#).unwrap();

        assert!(issuer.is_enabled());
    }

    #[test]
    fn test_enabled_rejects_structured_value() {
        let result = serde_json::from_value::<Issuer>(json!({
            "credential_issuer": "Issuer1id",
            "enabled": ["true"]
        }));

        assert!(result.is_err());
    }
}
