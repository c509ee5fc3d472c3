//! UI strings in English and Arabic.
//!
//! Entity names live on `EntityKind`; this module covers the chrome around
//! them: navigation, tables, forms, notifications and validation messages.

use contracts::shared::locale::Locale;
use contracts::shared::validation::{
    CODE_LOCALE_DUPLICATE, CODE_LOCALE_UNSUPPORTED, CODE_REQUIRED, CODE_SLUG,
    CODE_TRANSLATION_MISSING,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    // Chrome
    AppTitle,
    Dashboard,
    Language,
    SignIn,
    SignOut,
    Email,
    Password,
    SignInTitle,
    // List pages
    Search,
    New,
    Edit,
    Delete,
    Refresh,
    Actions,
    Loading,
    NoRecords,
    ConfirmDelete,
    Showing,
    Of,
    PerPage,
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    Filters,
    ClearFilters,
    All,
    Yes,
    No,
    // Columns / fields
    Name,
    Title,
    Slug,
    Description,
    Summary,
    Icon,
    Category,
    Status,
    Active,
    Inactive,
    Featured,
    Order,
    Created,
    Updated,
    Rating,
    Company,
    ClientName,
    Position,
    Content,
    AvatarUrl,
    ProjectType,
    Technologies,
    CoverUrl,
    LiveUrl,
    RepoUrl,
    CompletedAt,
    Phone,
    Subject,
    Message,
    InquiryType,
    Role,
    LastLogin,
    Translations,
    // Form actions
    Save,
    Create,
    Cancel,
    FixErrors,
    // Contacts
    MarkRead,
    MarkReplied,
    Archive,
    // Notifications
    CreatedSuccess,
    UpdatedSuccess,
    DeletedSuccess,
    StatusUpdated,
    RequestFailed,
    NetworkError,
    SessionExpired,
    SignInRequired,
    // Public site
    HeroTitle,
    HeroSubtitle,
    OurServices,
    Testimonials,
    FeaturedProjects,
    ContactUs,
    SendMessage,
    MessageSent,
    ViewLive,
    SourceCode,
    Total,
    View,
    Close,
    Admin,
    VisitSite,
    Welcome,
    PasswordHint,
    EditTitle,
    NewTitle,
    Received,
    SigningIn,
    AccessDenied,
}

impl Msg {
    fn pair(&self) -> (&'static str, &'static str) {
        match self {
            Msg::AppTitle => ("Portfolio Admin", "لوحة إدارة المعرض"),
            Msg::Dashboard => ("Dashboard", "لوحة التحكم"),
            Msg::Language => ("Language", "اللغة"),
            Msg::SignIn => ("Sign in", "تسجيل الدخول"),
            Msg::SignOut => ("Sign out", "تسجيل الخروج"),
            Msg::Email => ("Email", "البريد الإلكتروني"),
            Msg::Password => ("Password", "كلمة المرور"),
            Msg::SignInTitle => ("Sign in to the dashboard", "تسجيل الدخول إلى لوحة التحكم"),
            Msg::Search => ("Search...", "بحث..."),
            Msg::New => ("New", "جديد"),
            Msg::Edit => ("Edit", "تعديل"),
            Msg::Delete => ("Delete", "حذف"),
            Msg::Refresh => ("Refresh", "تحديث"),
            Msg::Actions => ("Actions", "الإجراءات"),
            Msg::Loading => ("Loading...", "جار التحميل..."),
            Msg::NoRecords => ("No records found", "لا توجد سجلات"),
            Msg::ConfirmDelete => (
                "Delete this record? This cannot be undone.",
                "حذف هذا السجل؟ لا يمكن التراجع عن ذلك.",
            ),
            Msg::Showing => ("Showing", "عرض"),
            Msg::Of => ("of", "من"),
            Msg::PerPage => ("Per page", "لكل صفحة"),
            Msg::FirstPage => ("First page", "الصفحة الأولى"),
            Msg::PrevPage => ("Previous page", "الصفحة السابقة"),
            Msg::NextPage => ("Next page", "الصفحة التالية"),
            Msg::LastPage => ("Last page", "الصفحة الأخيرة"),
            Msg::Filters => ("Filters", "عوامل التصفية"),
            Msg::ClearFilters => ("Clear filters", "مسح عوامل التصفية"),
            Msg::All => ("All", "الكل"),
            Msg::Yes => ("Yes", "نعم"),
            Msg::No => ("No", "لا"),
            Msg::Name => ("Name", "الاسم"),
            Msg::Title => ("Title", "العنوان"),
            Msg::Slug => ("Slug", "المعرّف"),
            Msg::Description => ("Description", "الوصف"),
            Msg::Summary => ("Summary", "الملخص"),
            Msg::Icon => ("Icon", "الأيقونة"),
            Msg::Category => ("Category", "التصنيف"),
            Msg::Status => ("Status", "الحالة"),
            Msg::Active => ("Active", "نشط"),
            Msg::Inactive => ("Inactive", "غير نشط"),
            Msg::Featured => ("Featured", "مميز"),
            Msg::Order => ("Order", "الترتيب"),
            Msg::Created => ("Created", "تاريخ الإنشاء"),
            Msg::Updated => ("Updated", "تاريخ التحديث"),
            Msg::Rating => ("Rating", "التقييم"),
            Msg::Company => ("Company", "الشركة"),
            Msg::ClientName => ("Client name", "اسم العميل"),
            Msg::Position => ("Position", "المنصب"),
            Msg::Content => ("Content", "المحتوى"),
            Msg::AvatarUrl => ("Avatar URL", "رابط الصورة"),
            Msg::ProjectType => ("Project type", "نوع المشروع"),
            Msg::Technologies => ("Technologies", "التقنيات"),
            Msg::CoverUrl => ("Cover image URL", "رابط صورة الغلاف"),
            Msg::LiveUrl => ("Live URL", "رابط المشروع"),
            Msg::RepoUrl => ("Repository URL", "رابط المستودع"),
            Msg::CompletedAt => ("Completed", "تاريخ الإنجاز"),
            Msg::Phone => ("Phone", "الهاتف"),
            Msg::Subject => ("Subject", "الموضوع"),
            Msg::Message => ("Message", "الرسالة"),
            Msg::InquiryType => ("Inquiry type", "نوع الاستفسار"),
            Msg::Role => ("Role", "الدور"),
            Msg::LastLogin => ("Last login", "آخر دخول"),
            Msg::Translations => ("Translations", "الترجمات"),
            Msg::Save => ("Save", "حفظ"),
            Msg::Create => ("Create", "إنشاء"),
            Msg::Cancel => ("Cancel", "إلغاء"),
            Msg::FixErrors => ("Please fix the highlighted fields", "يرجى تصحيح الحقول المحددة"),
            Msg::MarkRead => ("Mark as read", "تعليم كمقروء"),
            Msg::MarkReplied => ("Mark as replied", "تعليم كتم الرد"),
            Msg::Archive => ("Archive", "أرشفة"),
            Msg::CreatedSuccess => ("{} created successfully", "تم إنشاء {} بنجاح"),
            Msg::UpdatedSuccess => ("{} updated successfully", "تم تحديث {} بنجاح"),
            Msg::DeletedSuccess => ("{} deleted successfully", "تم حذف {} بنجاح"),
            Msg::StatusUpdated => ("Status updated", "تم تحديث الحالة"),
            Msg::RequestFailed => ("Request failed", "فشل الطلب"),
            Msg::NetworkError => (
                "Network error, check your connection",
                "خطأ في الشبكة، تحقق من الاتصال",
            ),
            Msg::SessionExpired => (
                "Your session has expired, please sign in again",
                "انتهت الجلسة، يرجى تسجيل الدخول مجددًا",
            ),
            Msg::SignInRequired => ("Please sign in", "يرجى تسجيل الدخول"),
            Msg::HeroTitle => (
                "We design and build digital products",
                "نصمم ونبني المنتجات الرقمية",
            ),
            Msg::HeroSubtitle => (
                "Websites, mobile apps and platforms crafted for your business",
                "مواقع وتطبيقات ومنصات مصممة لأعمالك",
            ),
            Msg::OurServices => ("Our services", "خدماتنا"),
            Msg::Testimonials => ("What clients say", "آراء العملاء"),
            Msg::FeaturedProjects => ("Featured projects", "مشاريع مميزة"),
            Msg::ContactUs => ("Contact us", "تواصل معنا"),
            Msg::SendMessage => ("Send message", "إرسال الرسالة"),
            Msg::MessageSent => (
                "Thank you! We will get back to you soon.",
                "شكرًا لك! سنتواصل معك قريبًا.",
            ),
            Msg::ViewLive => ("View live", "عرض المشروع"),
            Msg::SourceCode => ("Source code", "الشيفرة المصدرية"),
            Msg::Total => ("Total", "الإجمالي"),
            Msg::View => ("View", "عرض"),
            Msg::Close => ("Close", "إغلاق"),
            Msg::Admin => ("Admin", "الإدارة"),
            Msg::VisitSite => ("Visit site", "زيارة الموقع"),
            Msg::Welcome => ("Welcome, {}", "مرحبًا، {}"),
            Msg::PasswordHint => (
                "Leave blank to keep the current password",
                "اتركه فارغًا للإبقاء على كلمة المرور الحالية",
            ),
            Msg::EditTitle => ("Edit {}", "تعديل {}"),
            Msg::NewTitle => ("New {}", "{} جديد"),
            Msg::Received => ("Received", "تاريخ الاستلام"),
            Msg::SigningIn => ("Signing in...", "جار تسجيل الدخول..."),
            Msg::AccessDenied => (
                "Access denied. Administrator role required.",
                "تم رفض الوصول. يتطلب ذلك دور المسؤول.",
            ),
        }
    }

    pub fn text(&self, locale: Locale) -> &'static str {
        let (en, ar) = self.pair();
        match locale {
            Locale::En => en,
            Locale::Ar => ar,
        }
    }

    /// Substitute `{}` in the message with `arg`
    pub fn format(&self, locale: Locale, arg: &str) -> String {
        self.text(locale).replacen("{}", arg, 1)
    }
}

/// Localized message for a validation error code
pub fn validation_message(code: &str, locale: Locale) -> &'static str {
    let (en, ar) = match code {
        CODE_REQUIRED => ("This field is required", "هذا الحقل مطلوب"),
        CODE_SLUG => (
            "Use lowercase letters, digits and single dashes",
            "استخدم أحرفًا صغيرة وأرقامًا وشرطات مفردة",
        ),
        CODE_TRANSLATION_MISSING => (
            "Add at least one translation",
            "أضف ترجمة واحدة على الأقل",
        ),
        CODE_LOCALE_UNSUPPORTED => ("Unsupported language", "لغة غير مدعومة"),
        CODE_LOCALE_DUPLICATE => ("Duplicate language", "لغة مكررة"),
        "email" => ("Enter a valid email address", "أدخل بريدًا إلكترونيًا صالحًا"),
        "url" => ("Enter a valid URL", "أدخل رابطًا صالحًا"),
        "range" => ("Value is out of range", "القيمة خارج النطاق"),
        "rating" => ("Rating must be between 1 and 5", "يجب أن يكون التقييم بين 1 و 5"),
        "too_long" => ("Value is too long", "القيمة طويلة جدًا"),
        "phone" => ("Enter a valid phone number", "أدخل رقم هاتف صالحًا"),
        "message_length" => (
            "Message must be between 10 and 5000 characters",
            "يجب أن تكون الرسالة بين 10 و 5000 حرف",
        ),
        "password_length" => (
            "Password must be at least 8 characters",
            "يجب ألا تقل كلمة المرور عن 8 أحرف",
        ),
        _ => ("Invalid value", "قيمة غير صالحة"),
    };
    match locale {
        Locale::En => en,
        Locale::Ar => ar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inserts_element_name() {
        assert_eq!(
            Msg::DeletedSuccess.format(Locale::En, "Category"),
            "Category deleted successfully"
        );
        assert_eq!(Msg::CreatedSuccess.format(Locale::Ar, "تصنيف"), "تم إنشاء تصنيف بنجاح");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(validation_message(CODE_REQUIRED, Locale::En), "This field is required");
        assert_eq!(validation_message("unknown", Locale::Ar), "قيمة غير صالحة");
    }
}
