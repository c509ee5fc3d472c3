use contracts::domain::a001_category::Category;
use contracts::domain::a002_technology::Technology;
use contracts::domain::a006_project::{Project, ProjectDto, ProjectTranslation};
use contracts::domain::common::Entity;
use contracts::enums::{EntityKind, ProjectType};
use contracts::shared::locale::Locale;
use contracts::shared::translation::{find_translation, MISSING_LABEL};
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::shared::collection::{load_options, option_pairs, options_query};
use crate::shared::components::form_actions::FormActions;
use crate::shared::components::translation_tabs::TranslationTabs;
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::date_utils::to_input_date;
use crate::shared::details::{edit_translation, DetailsViewModel};
use crate::shared::i18n::Msg;
use crate::shared::notifications::use_notifications;
use crate::shared::services::use_services;

/// Add or remove `id` keeping the original order of the others
fn set_membership(ids: &mut Vec<String>, id: &str, member: bool) {
    let present = ids.iter().any(|i| i == id);
    if member && !present {
        ids.push(id.to_string());
    } else if !member {
        ids.retain(|i| i != id);
    }
}

fn project_type_options(locale: Locale) -> Vec<(String, String)> {
    ProjectType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name(locale).to_string()))
        .collect()
}

#[component]
pub fn ProjectDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let services = use_services();
    let notifier = use_notifications();
    let locale = use_global_context().locale_signal();
    let vm = DetailsViewModel::<ProjectDto>::new(EntityKind::Project);
    let tab = RwSignal::new(locale.get_untracked());
    vm.load_if_needed::<Project>(services.clone(), id, locale.get_untracked());

    let categories = load_options::<Category>(services.clone(), options_query("orderIndex"));
    let technologies = load_options::<Technology>(services.clone(), options_query("orderIndex"));

    let label = move |msg: Msg| Signal::derive(move || Some(msg.text(locale.get()).to_string()));
    let translated = move |f: fn(&ProjectTranslation) -> String| {
        Signal::derive(move || {
            vm.form
                .with(|form| find_translation(&form.translations, tab.get()).map(f).unwrap_or_default())
        })
    };
    let tab_dir = Signal::derive(move || Some(tab.get().dir().to_string()));
    let category_options = Signal::derive(move || {
        let mut options = vec![(String::new(), MISSING_LABEL.to_string())];
        options.extend(categories.with(|c| option_pairs(c, locale.get())));
        options
    });

    let technology_checkboxes = move || {
        let locale = locale.get();
        technologies.with(|all| {
            all.iter()
                .map(|technology| {
                    let name = technology.display_name(locale);
                    let id = technology.id.clone();
                    let toggle_id = id.clone();
                    view! {
                        <Checkbox
                            label=name
                            checked=Signal::derive(move || vm.form.with(|f| f.technology_ids.contains(&id)))
                            on_change=Callback::new(move |on: bool| {
                                vm.update(|f| set_membership(&mut f.technology_ids, &toggle_id, on))
                            })
                        />
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="details-container">
            {move || vm.loading.get().then(|| view! { <div class="details-loading">{Msg::Loading.text(locale.get())}</div> })}
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-form">
                <Input
                    label=label(Msg::Slug)
                    value=Signal::derive(move || vm.form.with(|f| f.slug.clone()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.slug = v))
                    placeholder="shop-redesign"
                    error=vm.field_error("slug", locale)
                    dir="ltr"
                />
                <div class="form__row">
                    <Select
                        label=label(Msg::Category)
                        value=Signal::derive(move || vm.form.with(|f| f.category_id.clone().unwrap_or_default()))
                        options=category_options
                        on_change=Callback::new(move |v: String| vm.update(|f| f.category_id = Some(v)))
                    />
                    <Select
                        label=label(Msg::ProjectType)
                        value=Signal::derive(move || vm.form.with(|f| f.project_type.code().to_string()))
                        options=Signal::derive(move || project_type_options(locale.get()))
                        on_change=Callback::new(move |v: String| {
                            if let Some(kind) = ProjectType::from_code(&v) {
                                vm.update(|f| f.project_type = kind);
                            }
                        })
                    />
                </div>
                <Input
                    label=label(Msg::CoverUrl)
                    input_type="url"
                    value=Signal::derive(move || vm.form.with(|f| f.cover_url.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.cover_url = Some(v)))
                    placeholder="https://"
                    error=vm.field_error("cover_url", locale)
                    dir="ltr"
                />
                <div class="form__row">
                    <Input
                        label=label(Msg::LiveUrl)
                        input_type="url"
                        value=Signal::derive(move || vm.form.with(|f| f.live_url.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v: String| vm.update(|f| f.live_url = Some(v)))
                        placeholder="https://"
                        error=vm.field_error("live_url", locale)
                        dir="ltr"
                    />
                    <Input
                        label=label(Msg::RepoUrl)
                        input_type="url"
                        value=Signal::derive(move || vm.form.with(|f| f.repo_url.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v: String| vm.update(|f| f.repo_url = Some(v)))
                        placeholder="https://github.com/"
                        error=vm.field_error("repo_url", locale)
                        dir="ltr"
                    />
                </div>
                <div class="form__row">
                    <Input
                        label=label(Msg::CompletedAt)
                        input_type="date"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.completed_at.as_deref().map(to_input_date).unwrap_or_default())
                        })
                        on_input=Callback::new(move |v: String| vm.update(|f| f.completed_at = Some(v)))
                    />
                    <Input
                        label=label(Msg::Order)
                        input_type="number"
                        value=Signal::derive(move || vm.form.with(|f| f.order_index.to_string()))
                        on_input=Callback::new(move |v: String| {
                            if let Ok(n) = v.trim().parse() {
                                vm.update(|f| f.order_index = n);
                            }
                        })
                        error=vm.field_error("order_index", locale)
                    />
                </div>
                <Checkbox
                    label=Signal::derive(move || Msg::Active.text(locale.get()).to_string())
                    checked=Signal::derive(move || vm.form.with(|f| f.is_active))
                    on_change=Callback::new(move |v: bool| vm.update(|f| f.is_active = v))
                />
                <Checkbox
                    label=Signal::derive(move || Msg::Featured.text(locale.get()).to_string())
                    checked=Signal::derive(move || vm.form.with(|f| f.is_featured))
                    on_change=Callback::new(move |v: bool| vm.update(|f| f.is_featured = v))
                />

                <h3 class="details-form__section">{move || Msg::Technologies.text(locale.get())}</h3>
                <div class="details-form__checklist">{technology_checkboxes}</div>

                <h3 class="details-form__section">{move || Msg::Translations.text(locale.get())}</h3>
                <TranslationTabs active=tab error=vm.field_error("translations", locale) />
                <Input
                    label=label(Msg::Title)
                    value=translated(|tr| tr.title.clone())
                    on_input=Callback::new(move |v: String| {
                        vm.update(|f| edit_translation(&mut f.translations, tab.get_untracked(), |tr| tr.title = v))
                    })
                    dir=tab_dir
                />
                <Textarea
                    label=label(Msg::Summary)
                    value=translated(|tr| tr.summary.clone().unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        vm.update(|f| {
                            edit_translation(&mut f.translations, tab.get_untracked(), |tr| tr.summary = Some(v))
                        })
                    })
                    dir=tab_dir
                    rows=2
                />
                <Textarea
                    label=label(Msg::Description)
                    value=translated(|tr| tr.description.clone().unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        vm.update(|f| {
                            edit_translation(&mut f.translations, tab.get_untracked(), |tr| tr.description = Some(v))
                        })
                    })
                    dir=tab_dir
                    rows=6
                />
            </div>
            <FormActions
                locale=locale
                saving=vm.saving
                disabled=vm.save_disabled()
                is_create=Signal::derive(move || !vm.is_edit_mode())
                on_save=Callback::new(move |_| {
                    vm.save_command(services.clone(), notifier, locale.get_untracked(), on_saved)
                })
                on_cancel=on_cancel
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_membership() {
        let mut ids = vec!["1".to_string(), "2".to_string()];
        set_membership(&mut ids, "3", true);
        set_membership(&mut ids, "1", true);
        assert_eq!(ids, vec!["1", "2", "3"]);
        set_membership(&mut ids, "2", false);
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_project_type_options() {
        let options = project_type_options(Locale::Ar);
        assert_eq!(options.len(), ProjectType::all().len());
        assert_eq!(options[0], ("web".to_string(), "ويب".to_string()));
    }
}
