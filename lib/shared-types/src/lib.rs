mod issuer_id;
mod macros;

pub use issuer_id::IssuerId;
