// --- File: crates/hourbook_common/src/services.rs ---
//! Service abstractions.
//!
//! Async traits that need to be held as `Arc<dyn …>` cannot use
//! return-position `impl Future`; they return a boxed future instead.

use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result.
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;
