//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Numeric ids in
//! request bodies accept either JSON numbers or numeric strings via
//! `serde_with`.

pub mod category;
pub mod health;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod search;
