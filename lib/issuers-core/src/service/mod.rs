pub mod error;
pub mod issuer;
