use serde::Serialize;
use validator::{Validate, ValidationErrors};

/// Form payload for create/update of an entity.
///
/// `id == None` means create; `Some(id)` means update of that record.
pub trait EntityDto: Serialize + Validate + Clone {
    fn id(&self) -> Option<&str>;

    /// Drop blank translation drafts and trim free text before sending
    fn prepared(self) -> Self {
        self
    }

    /// Field-level validation, including rules that depend on create vs update
    fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }

    fn is_create(&self) -> bool {
        self.id().map(|id| id.trim().is_empty()).unwrap_or(true)
    }
}
