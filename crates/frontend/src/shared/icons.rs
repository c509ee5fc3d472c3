use leptos::prelude::*;

const CIRCLE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z";

/// Every icon the UI can draw. Names coming from the backend (service and
/// technology icons) resolve through [`IconName::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Home,
    Check,
    AlertCircle,
    Info,
    X,
    Plus,
    Edit,
    Trash,
    Refresh,
    Search,
    ChevronLeft,
    ChevronRight,
    ChevronsLeft,
    ChevronsRight,
    Save,
    LogOut,
    Globe,
    Menu,
    Folder,
    Cpu,
    Briefcase,
    MessageSquare,
    HelpCircle,
    Layers,
    Mail,
    Users,
    Star,
    ExternalLink,
    Github,
    Code,
    Smartphone,
    Monitor,
    PenTool,
    Database,
    Server,
    Cloud,
    Unknown,
}

impl IconName {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "home" | "dashboard" => IconName::Home,
            "check" => IconName::Check,
            "alert-circle" | "alert" => IconName::AlertCircle,
            "info" => IconName::Info,
            "x" | "close" => IconName::X,
            "plus" | "add" => IconName::Plus,
            "edit" | "pencil" => IconName::Edit,
            "trash" | "delete" => IconName::Trash,
            "refresh" => IconName::Refresh,
            "search" => IconName::Search,
            "chevron-left" => IconName::ChevronLeft,
            "chevron-right" => IconName::ChevronRight,
            "chevrons-left" => IconName::ChevronsLeft,
            "chevrons-right" => IconName::ChevronsRight,
            "save" => IconName::Save,
            "log-out" | "logout" => IconName::LogOut,
            "globe" | "web" => IconName::Globe,
            "menu" => IconName::Menu,
            "folder" => IconName::Folder,
            "cpu" => IconName::Cpu,
            "briefcase" => IconName::Briefcase,
            "message-square" | "message" => IconName::MessageSquare,
            "help-circle" | "help" => IconName::HelpCircle,
            "layers" => IconName::Layers,
            "mail" | "email" => IconName::Mail,
            "users" => IconName::Users,
            "star" => IconName::Star,
            "external-link" => IconName::ExternalLink,
            "github" => IconName::Github,
            "code" => IconName::Code,
            "smartphone" | "mobile" => IconName::Smartphone,
            "monitor" | "desktop" => IconName::Monitor,
            "pen-tool" | "design" => IconName::PenTool,
            "database" => IconName::Database,
            "server" => IconName::Server,
            "cloud" => IconName::Cloud,
            _ => IconName::Unknown,
        }
    }

    fn paths(&self) -> &'static [&'static str] {
        match self {
            IconName::Home => &["M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            IconName::Check => &["M20 6 9 17l-5-5"],
            IconName::AlertCircle => &[CIRCLE, "M12 8v4", "M12 16h.01"],
            IconName::Info => &[CIRCLE, "M12 16v-4", "M12 8h.01"],
            IconName::X => &["M18 6 6 18", "M6 6l12 12"],
            IconName::Plus => &["M12 5v14", "M5 12h14"],
            IconName::Edit => &["M12 20h9", "M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"],
            IconName::Trash => &[
                "M3 6h18",
                "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
                "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
            ],
            IconName::Refresh => &["M21 12a9 9 0 1 1-3-6.7L21 8", "M21 3v5h-5"],
            IconName::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
            IconName::ChevronLeft => &["M15 18l-6-6 6-6"],
            IconName::ChevronRight => &["M9 18l6-6-6-6"],
            IconName::ChevronsLeft => &["M11 17l-5-5 5-5", "M18 17l-5-5 5-5"],
            IconName::ChevronsRight => &["M13 17l5-5-5-5", "M6 17l5-5-5-5"],
            IconName::Save => &[
                "M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z",
                "M17 21v-8H7v8",
                "M7 3v5h8",
            ],
            IconName::LogOut => &[
                "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
                "M16 17l5-5-5-5",
                "M21 12H9",
            ],
            IconName::Globe => &[
                CIRCLE,
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            IconName::Menu => &["M3 12h18", "M3 6h18", "M3 18h18"],
            IconName::Folder => &[
                "M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z",
            ],
            IconName::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3",
            ],
            IconName::Briefcase => &[
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            IconName::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            IconName::HelpCircle => &[CIRCLE, "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3", "M12 17h.01"],
            IconName::Layers => &["M12 2 2 7l10 5 10-5-10-5z", "M2 17l10 5 10-5", "M2 12l10 5 10-5"],
            IconName::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M22 6l-10 7L2 6",
            ],
            IconName::Users => &[
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M23 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconName::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z",
            ],
            IconName::ExternalLink => &[
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
                "M15 3h6v6",
                "M10 14 21 3",
            ],
            IconName::Github => &[
                "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22",
            ],
            IconName::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            IconName::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            IconName::Monitor => &[
                "M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M8 21h8",
                "M12 17v4",
            ],
            IconName::PenTool => &[
                "M12 19l7-7 3 3-7 7-3-3z",
                "M18 13l-1.5-7.5L2 2l3.5 14.5L13 18l5-5z",
                "M2 2l7.586 7.586",
                "M11 13a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            ],
            IconName::Database => &[
                "M12 8c4.97 0 9-1.34 9-3s-4.03-3-9-3-9 1.34-9 3 4.03 3 9 3z",
                "M21 12c0 1.66-4 3-9 3s-9-1.34-9-3",
                "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
            ],
            IconName::Server => &[
                "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
                "M6 6h.01",
                "M6 18h.01",
            ],
            IconName::Cloud => &["M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z"],
            IconName::Unknown => &[CIRCLE, "M12 8v4l3 3"],
        }
    }

    /// Chevrons point the other way in right-to-left layouts
    pub fn mirrored(&self) -> bool {
        matches!(
            self,
            IconName::ChevronLeft
                | IconName::ChevronRight
                | IconName::ChevronsLeft
                | IconName::ChevronsRight
        )
    }
}

pub fn icon(name: IconName) -> AnyView {
    let class = if name.mirrored() { "icon icon--mirror-rtl" } else { "icon" };
    view! {
        <svg class=class width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {name.paths().iter().map(|d| view! { <path d={*d}/> }).collect_view()}
        </svg>
    }
    .into_any()
}

/// Icon named by the backend, e.g. a service's `icon` field
pub fn icon_by_name(name: &str) -> AnyView {
    icon(IconName::from_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_and_aliases() {
        assert_eq!(IconName::from_name("code"), IconName::Code);
        assert_eq!(IconName::from_name(" Smartphone "), IconName::Smartphone);
        assert_eq!(IconName::from_name("pen_tool"), IconName::PenTool);
        assert_eq!(IconName::from_name("logout"), IconName::LogOut);
    }

    #[test]
    fn test_unknown_names_fall_back() {
        assert_eq!(IconName::from_name("rocket-ship"), IconName::Unknown);
        assert_eq!(IconName::from_name(""), IconName::Unknown);
        assert!(!IconName::Unknown.paths().is_empty());
    }
}
