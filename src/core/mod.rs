//! Core components of the `qtquote-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`QtClient`] and its builder.
//! - The primary [`QtError`] type.
//! - The response tokenizer, the GBK decoder and the positional column schemas
//!   shared by the market and quote services.

/// The HTTP client (`QtClient`), builder, and default endpoints.
pub mod client;
/// GBK → UTF-8 conversion.
pub mod encoding;
/// The primary error type (`QtError`) for the crate.
pub mod error;
/// Positional `field → column` schemas and the generic projector.
pub mod schema;
/// Record/column tokenizer for the `;`/`~` wire format.
pub mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::QtClient`
pub use client::{QtClient, QtClientBuilder};
pub use error::QtError;
pub use schema::{NOT_AVAILABLE, Row, Schema};
