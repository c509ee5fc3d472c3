//! Toast notifications.
//!
//! `NotificationService` is provided through context like the modal
//! service; mutations only see it as a [`Notifier`].

use leptos::prelude::*;

use crate::shared::icons::{icon, IconName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIntent {
    Success,
    Error,
    Info,
}

impl ToastIntent {
    fn class(&self) -> &'static str {
        match self {
            ToastIntent::Success => "toast toast--success",
            ToastIntent::Error => "toast toast--error",
            ToastIntent::Info => "toast toast--info",
        }
    }

    fn icon(&self) -> IconName {
        match self {
            ToastIntent::Success => IconName::Check,
            ToastIntent::Error => IconName::AlertCircle,
            ToastIntent::Info => IconName::Info,
        }
    }
}

pub trait Notifier {
    fn notify(&self, intent: ToastIntent, message: String);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub intent: ToastIntent,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            timeout_ms,
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastIntent::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastIntent::Error, message.into());
    }
}

impl Notifier for NotificationService {
    fn notify(&self, intent: ToastIntent, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, intent, message }));

        let service = *self;
        gloo_timers::callback::Timeout::new(self.timeout_ms, move || service.dismiss(id)).forget();
    }
}

/// Records notifications instead of showing them
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: std::sync::Mutex<Vec<(ToastIntent, String)>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn events(&self) -> Vec<(ToastIntent, String)> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, intent: ToastIntent, message: String) {
        if let Ok(mut events) = self.events.lock() {
            events.push((intent, message));
        }
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || service.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.intent.class() role="status">
                            {icon(toast.intent.icon())}
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon(IconName::X)}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
