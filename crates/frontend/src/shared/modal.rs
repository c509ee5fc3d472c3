use contracts::enums::EntityKind;
use contracts::shared::locale::Locale;
use leptos::prelude::*;

use crate::shared::i18n::Msg;
use crate::shared::icons::{icon, IconName};

/// What the entity editor of a list is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(String),
}

impl EditTarget {
    pub fn id(&self) -> Option<String> {
        match self {
            EditTarget::New => None,
            EditTarget::Existing(id) => Some(id.clone()),
        }
    }
}

/// "Edit Category" / "New Category" heading of the editor modal
pub fn editor_title(target: &EditTarget, kind: EntityKind, locale: Locale) -> String {
    let element = kind.element_name(locale);
    match target {
        EditTarget::New => Msg::NewTitle.format(locale, element),
        EditTarget::Existing(_) => Msg::EditTitle.format(locale, element),
    }
}

/// Open/close state of a list's editor modal
#[derive(Clone, Copy)]
pub struct EditorState {
    target: RwSignal<Option<EditTarget>>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            target: RwSignal::new(None),
        }
    }

    pub fn open_new(&self) {
        self.target.set(Some(EditTarget::New));
    }

    pub fn open(&self, id: &str) {
        self.target.set(Some(EditTarget::Existing(id.to_string())));
    }

    pub fn close(&self) {
        self.target.set(None);
    }

    pub fn target(&self) -> Option<EditTarget> {
        self.target.get()
    }

    pub fn is_open(&self) -> bool {
        self.target.with(|t| t.is_some())
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay with a title bar; clicking the backdrop closes it
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" role="dialog" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        {icon(IconName::X)}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_editor_state_transitions() {
        Owner::new().with(|| {
            let editor = EditorState::new();
            assert!(!editor.is_open());
            editor.open("42");
            assert_eq!(editor.target().and_then(|t| t.id()), Some("42".to_string()));
            editor.open_new();
            assert_eq!(editor.target(), Some(EditTarget::New));
            editor.close();
            assert!(!editor.is_open());
        });
    }

    #[test]
    fn test_editor_title() {
        assert_eq!(
            editor_title(&EditTarget::Existing("1".into()), EntityKind::Category, Locale::En),
            "Edit Category"
        );
        assert!(editor_title(&EditTarget::New, EntityKind::Category, Locale::Ar).ends_with("جديد"));
    }
}
