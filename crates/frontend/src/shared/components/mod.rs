pub mod collection_page;
pub mod filter_panel;
pub mod filter_select;
pub mod form_actions;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod translation_tabs;
pub mod ui;
