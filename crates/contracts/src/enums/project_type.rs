use crate::shared::locale::Locale;
use serde::{Deserialize, Serialize};

/// Kind of delivered project shown in the portfolio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Web,
    Mobile,
    Desktop,
    Design,
    Other,
}

impl ProjectType {
    pub fn code(&self) -> &'static str {
        match self {
            ProjectType::Web => "web",
            ProjectType::Mobile => "mobile",
            ProjectType::Desktop => "desktop",
            ProjectType::Design => "design",
            ProjectType::Other => "other",
        }
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ProjectType::Web, Locale::En) => "Web",
            (ProjectType::Web, Locale::Ar) => "ويب",
            (ProjectType::Mobile, Locale::En) => "Mobile",
            (ProjectType::Mobile, Locale::Ar) => "جوال",
            (ProjectType::Desktop, Locale::En) => "Desktop",
            (ProjectType::Desktop, Locale::Ar) => "سطح المكتب",
            (ProjectType::Design, Locale::En) => "Design",
            (ProjectType::Design, Locale::Ar) => "تصميم",
            (ProjectType::Other, Locale::En) => "Other",
            (ProjectType::Other, Locale::Ar) => "أخرى",
        }
    }

    pub fn all() -> Vec<ProjectType> {
        vec![
            ProjectType::Web,
            ProjectType::Mobile,
            ProjectType::Desktop,
            ProjectType::Design,
            ProjectType::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ProjectType::all().into_iter().find(|t| t.code() == code)
    }
}
