use crate::shared::locale::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Editor,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
        }
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (UserRole::Admin, Locale::En) => "Administrator",
            (UserRole::Admin, Locale::Ar) => "مسؤول",
            (UserRole::Editor, Locale::En) => "Editor",
            (UserRole::Editor, Locale::Ar) => "محرر",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Editor]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        UserRole::all().into_iter().find(|r| r.code() == code)
    }
}
