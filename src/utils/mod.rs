//! Helper functions shared by services and handlers.
//!
//! - [`pagination`] - Fixed-size page slicing
//! - [`search`] - Search term matching

pub mod pagination;
pub mod search;
