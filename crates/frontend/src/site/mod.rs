//! Public landing page rendered from the same collections the admin edits.

pub mod api;
pub mod contact_form;
pub mod landing;

pub use landing::LandingPage;
