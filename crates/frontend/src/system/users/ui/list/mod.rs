use contracts::enums::EntityKind;
use contracts::shared::query::SortOrder;
use contracts::system::users::User;
use leptos::prelude::*;

use super::details::{role_options, UserDetails};
use crate::layout::global_context::use_global_context;
use crate::shared::collection::RemoteCollection;
use crate::shared::components::collection_page::CollectionPage;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::i18n::Msg;
use crate::shared::list_state::create_state;
use crate::shared::modal::{editor_title, EditorState, Modal};
use crate::shared::projection::{active_badge, date_cell, text_cell, BadgeVariant, Cell, ColumnDef};
use crate::shared::services::use_services;
use crate::system::auth::guard::RequireAdmin;

pub fn columns() -> Vec<ColumnDef<User>> {
    vec![
        ColumnDef::new("name", Msg::Name, |u: &User, _| text_cell(&u.name)).sortable("name"),
        ColumnDef::new("email", Msg::Email, |u: &User, _| text_cell(&u.email)).sortable("email"),
        ColumnDef::new("role", Msg::Role, |u: &User, l| Cell::Badge {
            label: u.role.display_name(l).to_string(),
            variant: BadgeVariant::Primary,
        })
        .sortable("role"),
        ColumnDef::new("status", Msg::Status, |u: &User, l| active_badge(u.is_active, l))
            .sortable("isActive"),
        ColumnDef::new("last_login", Msg::LastLogin, |u: &User, _| {
            date_cell(u.last_login_at.as_deref())
        })
        .sortable("lastLoginAt"),
    ]
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let locale = use_global_context().locale_signal();
    let state = create_state("name", SortOrder::Asc);
    let collection = RemoteCollection::<User>::new(use_services(), state, locale);
    let editor = EditorState::new();

    let on_saved = Callback::new(move |_| {
        editor.close();
        collection.reload();
    });
    let on_cancel = Callback::new(move |_| editor.close());

    view! {
        <CollectionPage collection=collection columns=columns() editor=editor>
            <FilterSelect
                state=state
                filter_key="role"
                label=Msg::Role
                options=Signal::derive(move || role_options(locale.get()))
                locale=locale
            />
            <FilterSelect
                state=state
                filter_key="isActive"
                label=Msg::Status
                options=Signal::derive(move || bool_options(Msg::Active, Msg::Inactive, locale.get()))
                locale=locale
            />
        </CollectionPage>
        {move || editor.target().map(|target| {
            let title = editor_title(&target, EntityKind::User, locale.get_untracked());
            view! {
                <Modal title=title on_close=on_cancel>
                    <UserDetails id=target.id() on_saved=on_saved on_cancel=on_cancel />
                </Modal>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::projection::project_row;
    use contracts::shared::locale::Locale;

    #[test]
    fn test_user_row_projection() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"name":"Admin","email":"admin@example.com","role":"admin","isActive":true}"#,
        )
        .unwrap();
        let cells = project_row(&columns(), &user, Locale::En);
        assert_eq!(cells[1].text(), "admin@example.com");
        assert_eq!(cells[2].text(), "Administrator");
        assert_eq!(cells[4].text(), "—");
    }

    #[test]
    fn test_role_options() {
        let options = role_options(Locale::Ar);
        assert_eq!(options[0], ("admin".to_string(), "مسؤول".to_string()));
    }
}
