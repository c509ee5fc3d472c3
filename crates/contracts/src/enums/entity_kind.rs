use crate::shared::locale::Locale;
use serde::{Deserialize, Serialize};

/// Every backend-managed collection the admin works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Category,
    Technology,
    Service,
    Testimonial,
    InquiryType,
    Project,
    Contact,
    User,
}

impl EntityKind {
    /// Key used in cache keys and section ids
    pub fn code(&self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Technology => "technology",
            EntityKind::Service => "service",
            EntityKind::Testimonial => "testimonial",
            EntityKind::InquiryType => "inquiry_type",
            EntityKind::Project => "project",
            EntityKind::Contact => "contact",
            EntityKind::User => "user",
        }
    }

    /// REST collection segment, `/api/{collection}`
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Category => "categories",
            EntityKind::Technology => "technologies",
            EntityKind::Service => "services",
            EntityKind::Testimonial => "testimonials",
            EntityKind::InquiryType => "inquiry-types",
            EntityKind::Project => "projects",
            EntityKind::Contact => "contacts",
            EntityKind::User => "users",
        }
    }

    /// Singular UI name
    pub fn element_name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (EntityKind::Category, Locale::En) => "Category",
            (EntityKind::Category, Locale::Ar) => "تصنيف",
            (EntityKind::Technology, Locale::En) => "Technology",
            (EntityKind::Technology, Locale::Ar) => "تقنية",
            (EntityKind::Service, Locale::En) => "Service",
            (EntityKind::Service, Locale::Ar) => "خدمة",
            (EntityKind::Testimonial, Locale::En) => "Testimonial",
            (EntityKind::Testimonial, Locale::Ar) => "شهادة",
            (EntityKind::InquiryType, Locale::En) => "Inquiry type",
            (EntityKind::InquiryType, Locale::Ar) => "نوع الاستفسار",
            (EntityKind::Project, Locale::En) => "Project",
            (EntityKind::Project, Locale::Ar) => "مشروع",
            (EntityKind::Contact, Locale::En) => "Contact",
            (EntityKind::Contact, Locale::Ar) => "رسالة تواصل",
            (EntityKind::User, Locale::En) => "User",
            (EntityKind::User, Locale::Ar) => "مستخدم",
        }
    }

    /// Plural UI name
    pub fn list_name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (EntityKind::Category, Locale::En) => "Categories",
            (EntityKind::Category, Locale::Ar) => "التصنيفات",
            (EntityKind::Technology, Locale::En) => "Technologies",
            (EntityKind::Technology, Locale::Ar) => "التقنيات",
            (EntityKind::Service, Locale::En) => "Services",
            (EntityKind::Service, Locale::Ar) => "الخدمات",
            (EntityKind::Testimonial, Locale::En) => "Testimonials",
            (EntityKind::Testimonial, Locale::Ar) => "الشهادات",
            (EntityKind::InquiryType, Locale::En) => "Inquiry types",
            (EntityKind::InquiryType, Locale::Ar) => "أنواع الاستفسارات",
            (EntityKind::Project, Locale::En) => "Projects",
            (EntityKind::Project, Locale::Ar) => "المشاريع",
            (EntityKind::Contact, Locale::En) => "Contacts",
            (EntityKind::Contact, Locale::Ar) => "رسائل التواصل",
            (EntityKind::User, Locale::En) => "Users",
            (EntityKind::User, Locale::Ar) => "المستخدمون",
        }
    }

    pub fn all() -> Vec<EntityKind> {
        vec![
            EntityKind::Category,
            EntityKind::Technology,
            EntityKind::Service,
            EntityKind::Testimonial,
            EntityKind::InquiryType,
            EntityKind::Project,
            EntityKind::Contact,
            EntityKind::User,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        EntityKind::all().into_iter().find(|k| k.code() == code)
    }
}
