//! Types shared between the portfolio admin frontend and its tests:
//! backend records, create/update payloads, list queries and pagination.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
