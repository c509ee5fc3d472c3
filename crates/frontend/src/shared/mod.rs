pub mod api_client;
pub mod api_utils;
pub mod collection;
pub mod components;
pub mod date_utils;
pub mod details;
pub mod i18n;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod modal;
pub mod mutation;
pub mod notifications;
pub mod pagination;
pub mod projection;
pub mod query_cache;
pub mod resource_adapter;
pub mod retry;
pub mod services;

#[cfg(test)]
pub mod test_support;
