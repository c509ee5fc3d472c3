//! Common types and traits for all entities

pub mod entity;
pub mod entity_dto;
pub mod entity_metadata;

pub use entity::{Entity, NoTranslation};
pub use entity_dto::EntityDto;
pub use entity_metadata::{parse_timestamp, EntityMetadata};
