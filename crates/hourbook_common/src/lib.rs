// --- File: crates/hourbook_common/src/lib.rs ---
//! Shared plumbing for the hourbook workspace: transport status mapping,
//! the boxed-future alias used by object-safe async traits, and tracing
//! initialization.

pub mod error;
pub mod logging;
pub mod services;

pub use error::HttpStatusCode;
pub use services::BoxFuture;
