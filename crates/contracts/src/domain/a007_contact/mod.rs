pub mod aggregate;

pub use aggregate::{Contact, ContactDto, ContactStatusDto};
