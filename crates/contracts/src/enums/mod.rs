pub mod contact_status;
pub mod entity_kind;
pub mod project_type;
pub mod user_role;

pub use contact_status::ContactStatus;
pub use entity_kind::EntityKind;
pub use project_type::ProjectType;
pub use user_role::UserRole;
