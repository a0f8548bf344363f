use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::macros::{impl_display, impl_from, impl_into};

/// Identifier of a credential issuer, as configured in the issuer catalog
/// (`credential_issuer`). Compared case-sensitively.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct IssuerId(String);

impl IssuerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for IssuerId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl AsRef<str> for IssuerId {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<&str> for IssuerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl_display!(IssuerId);
impl_from!(IssuerId; String);
impl_into!(IssuerId; String);
