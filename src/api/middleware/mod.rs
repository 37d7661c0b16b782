//! HTTP middleware for request processing.
//!
//! Provides observability, cross-origin headers, and panic recovery.

pub mod cors;
pub mod panic;
pub mod tracing;
