pub mod envelope;
pub mod locale;
pub mod pagination;
pub mod query;
pub mod serde_helpers;
pub mod translation;
pub mod validation;
