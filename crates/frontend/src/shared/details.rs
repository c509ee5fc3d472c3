//! Form state shared by every entity editor: the DTO being edited, its
//! field errors and the save command.
//!
//! The record being edited is identified by `target`, set before its data
//! arrives. Saving stays blocked until that data has loaded, so an edit can
//! never fall through to a create.

use contracts::domain::common::{Entity, EntityDto};
use contracts::enums::EntityKind;
use contracts::shared::locale::Locale;
use contracts::shared::translation::Translation;
use contracts::shared::validation::field_codes;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::shared::api_client::ApiError;
use crate::shared::i18n::{validation_message, Msg};
use crate::shared::mutation::{dispatch, Mutation};
use crate::shared::notifications::{NotificationService, Notifier, ToastIntent};
use crate::shared::resource_adapter::fetch_one;
use crate::shared::services::AppServices;

/// Apply `f` to the translation draft of `locale`, if the form has one
pub fn edit_translation<T: Translation>(translations: &mut [T], locale: Locale, f: impl FnOnce(&mut T)) {
    if let Some(t) = translations.iter_mut().find(|t| t.locale() == Some(locale)) {
        f(t);
    }
}

/// `field -> error code`
pub type FieldErrors = BTreeMap<String, String>;

/// Trim the draft and run field validation without touching the network
pub fn validate_form<D: EntityDto>(draft: D) -> Result<D, FieldErrors> {
    let prepared = draft.prepared();
    match prepared.check() {
        Ok(()) => Ok(prepared),
        Err(errors) => Err(field_codes(&errors)),
    }
}

/// Why the save button is unavailable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveBlocked {
    Saving,
    Loading,
    LoadFailed,
}

fn save_blocked(saving: bool, loading: bool, load_failed: bool) -> Option<SaveBlocked> {
    if saving {
        Some(SaveBlocked::Saving)
    } else if loading {
        Some(SaveBlocked::Loading)
    } else if load_failed {
        Some(SaveBlocked::LoadFailed)
    } else {
        None
    }
}

pub struct DetailsViewModel<D: Send + Sync + 'static> {
    pub kind: EntityKind,
    pub form: RwSignal<D>,
    pub errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    /// Id of the record being edited; `None` in create mode
    pub target: RwSignal<Option<String>>,
    load_failed: RwSignal<bool>,
}

impl<D: Send + Sync + 'static> Clone for DetailsViewModel<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for DetailsViewModel<D> {}

impl<D> DetailsViewModel<D>
where
    D: EntityDto + Default + Send + Sync + 'static,
{
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            form: RwSignal::new(D::default()),
            errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            target: RwSignal::new(None),
            load_failed: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.target.with(Option::is_some)
    }

    /// Reason the form cannot be submitted right now, if any
    pub fn blocked(&self) -> Option<SaveBlocked> {
        save_blocked(self.saving.get(), self.loading.get(), self.load_failed.get())
    }

    /// True while loading or after a failed load; drives the save button
    pub fn save_disabled(&self) -> Signal<bool> {
        let this = *self;
        Signal::derive(move || this.blocked().is_some())
    }

    /// Mark `id` as the record under edit and start waiting for its data
    pub fn begin_load(&self, id: String) {
        self.target.set(Some(id));
        self.load_failed.set(false);
        self.loading.set(true);
    }

    /// Fill the form from the loaded record, or block saving on failure
    pub fn finish_load<E>(&self, result: Result<E, ApiError>, locale: Locale)
    where
        E: Entity,
        for<'a> D: From<&'a E>,
    {
        match result {
            Ok(record) => self.form.set(D::from(&record)),
            Err(e) => {
                log::error!(
                    "loading {} {} failed: {}",
                    E::KIND.code(),
                    self.target.get_untracked().unwrap_or_default(),
                    e
                );
                self.load_failed.set(true);
                self.error.set(Some(e.user_message(locale)));
            }
        }
        self.loading.set(false);
    }

    /// Create or update, decided by the edit target rather than the form
    pub fn mutation_for(&self, dto: &D) -> Result<Mutation, ApiError> {
        match self.target.get_untracked() {
            Some(id) => Mutation::update(self.kind, &id, dto),
            None => Mutation::create(self.kind, dto),
        }
    }

    /// Load the record into the form when editing
    pub fn load_if_needed<E>(&self, services: AppServices, id: Option<String>, locale: Locale)
    where
        E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
        for<'a> D: From<&'a E>,
    {
        let Some(existing_id) = id else {
            return;
        };
        let this = *self;
        this.begin_load(existing_id.clone());
        spawn_local(async move {
            let client = services.client();
            let result = fetch_one::<E, _, _>(&client, &services.cache, &existing_id).await;
            this.finish_load(result, locale);
        });
    }

    pub fn update(&self, f: impl FnOnce(&mut D)) {
        self.form.update(f);
    }

    /// Localized message for `field`, if its last validation failed
    pub fn field_error(&self, field: &'static str, locale: Signal<Locale>) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || {
            errors.with(|e| {
                e.get(field)
                    .map(|code| validation_message(code, locale.get()).to_string())
            })
        })
    }

    /// Validate, then create or update through the mutation dispatcher
    pub fn save_command(
        &self,
        services: AppServices,
        notifier: NotificationService,
        locale: Locale,
        on_saved: Callback<()>,
    ) {
        let blocked = save_blocked(
            self.saving.get_untracked(),
            self.loading.get_untracked(),
            self.load_failed.get_untracked(),
        );
        if let Some(reason) = blocked {
            log::debug!("{} save ignored: {:?}", self.kind.code(), reason);
            return;
        }

        let draft = self.form.get_untracked();
        let dto = match validate_form(draft) {
            Ok(dto) => dto,
            Err(errors) => {
                log::debug!("{} form invalid: {:?}", self.kind.code(), errors);
                self.errors.set(errors);
                notifier.notify(ToastIntent::Error, Msg::FixErrors.text(locale).to_string());
                return;
            }
        };
        self.errors.set(FieldErrors::new());

        let mutation = match self.mutation_for(&dto) {
            Ok(m) => m,
            Err(e) => {
                self.error.set(Some(e.user_message(locale)));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            let client = services.client();
            let result = dispatch(&client, &services.cache, &notifier, mutation).await;
            this.saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => this.error.set(Some(e.user_message(locale))),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mutation::MutationKind;
    use contracts::domain::a001_category::{Category, CategoryDto};
    use contracts::system::users::UserDto;
    use leptos::prelude::Owner;

    fn category(id: &str) -> Category {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "slug": "web",
            "translations": [{"locale": "en", "name": "Web"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_save_waits_for_the_record() {
        Owner::new().with(|| {
            let vm = DetailsViewModel::<CategoryDto>::new(EntityKind::Category);
            vm.begin_load("7".into());
            assert!(vm.is_edit_mode());
            assert_eq!(vm.blocked(), Some(SaveBlocked::Loading));

            // Even before the data arrives the target decides the method
            let early = vm.mutation_for(&CategoryDto::default()).unwrap();
            assert_eq!(early.kind, MutationKind::Update);
            assert_eq!(early.id.as_deref(), Some("7"));

            vm.finish_load(Ok(category("7")), Locale::En);
            assert_eq!(vm.blocked(), None);
            assert_eq!(vm.form.get_untracked().slug, "web");
        });
    }

    #[test]
    fn test_failed_load_blocks_save() {
        Owner::new().with(|| {
            let vm = DetailsViewModel::<CategoryDto>::new(EntityKind::Category);
            vm.begin_load("7".into());
            vm.finish_load::<Category>(Err(ApiError::Network("offline".into())), Locale::En);
            assert_eq!(vm.blocked(), Some(SaveBlocked::LoadFailed));
            assert!(vm.error.get_untracked().is_some());
            assert!(vm.form.get_untracked().is_create());
        });
    }

    #[test]
    fn test_create_mode_posts() {
        Owner::new().with(|| {
            let vm = DetailsViewModel::<CategoryDto>::new(EntityKind::Category);
            assert!(!vm.is_edit_mode());
            assert_eq!(vm.blocked(), None);
            let mutation = vm.mutation_for(&CategoryDto::default()).unwrap();
            assert_eq!(mutation.kind, MutationKind::Create);
        });
    }

    #[test]
    fn test_validate_form_trims_before_checking() {
        let mut draft = CategoryDto::default();
        draft.slug = "  branding ".into();
        draft.translations[1].name = " هوية ".into();
        let dto = validate_form(draft).unwrap();
        assert_eq!(dto.slug, "branding");
        assert_eq!(dto.translations.len(), 1);
        assert_eq!(dto.translations[0].name, "هوية");
    }

    #[test]
    fn test_validate_form_reports_field_codes() {
        let errors = validate_form(CategoryDto::default()).unwrap_err();
        assert_eq!(errors.get("slug").map(String::as_str), Some("required"));
        assert_eq!(
            errors.get("translations").map(String::as_str),
            Some("translation_missing")
        );
    }

    #[test]
    fn test_edit_translation_targets_locale() {
        let mut dto = CategoryDto::default();
        edit_translation(&mut dto.translations, Locale::Ar, |t| t.name = "تصميم".into());
        assert_eq!(dto.translations[0].name, "");
        assert_eq!(dto.translations[1].name, "تصميم");
    }

    #[test]
    fn test_new_user_needs_password() {
        let draft = UserDto {
            name: "Admin".into(),
            email: "Admin@Example.com".into(),
            ..UserDto::default()
        };
        let errors = validate_form(draft).unwrap_err();
        assert_eq!(errors.get("password").map(String::as_str), Some("required"));
    }
}
