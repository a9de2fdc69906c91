// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the hashscan library.
//!
//! Failures are modeled as a closed set of tagged variants rather than an
//! open exception hierarchy: every error carries a structured kind tag that
//! the status classifier ([`crate::status`]) consumes exhaustively. Free-text
//! messages exist for diagnostics only and never participate in routing.
//!
//! - [`ClientError`] - retrieval-client failures (configuration, request,
//!   protocol), the only fallible surface of the core.
//! - [`HashscanError`] - unified error type for callers that do not need to
//!   distinguish sources.

mod client;

pub use client::ClientError;

use crate::metrics::StoreError;

/// Unified error type for all hashscan operations.
///
/// Module-specific error types convert to `HashscanError` via `From`
/// implementations, so `?` propagates naturally.
#[derive(Debug, thiserror::Error)]
pub enum HashscanError {
    /// Error from a retrieval client call.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// Error from a pluggable metric store implementation.
    #[error("metric store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for HashscanError {
    fn from(err: StoreError) -> Self {
        HashscanError::Store(err)
    }
}
