use crate::shared::locale::Locale;
use serde::{Deserialize, Serialize};

/// Processing state of an incoming contact request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
            ContactStatus::Archived => "archived",
        }
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ContactStatus::New, Locale::En) => "New",
            (ContactStatus::New, Locale::Ar) => "جديد",
            (ContactStatus::Read, Locale::En) => "Read",
            (ContactStatus::Read, Locale::Ar) => "مقروء",
            (ContactStatus::Replied, Locale::En) => "Replied",
            (ContactStatus::Replied, Locale::Ar) => "تم الرد",
            (ContactStatus::Archived, Locale::En) => "Archived",
            (ContactStatus::Archived, Locale::Ar) => "مؤرشف",
        }
    }

    pub fn all() -> Vec<ContactStatus> {
        vec![
            ContactStatus::New,
            ContactStatus::Read,
            ContactStatus::Replied,
            ContactStatus::Archived,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ContactStatus::all().into_iter().find(|s| s.code() == code)
    }
}
