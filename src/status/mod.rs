// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Failure classification onto the protocol status vocabulary.
//!
//! Every failure the retrieval clients surface carries a [`FailureKind`] tag.
//! This module maps that tag (never the free-text message) onto a
//! `tonic::Code` plus a decision on whether the failure merits error-level
//! logging. Expected client-input failures (bad arguments, missing
//! resources) are high-volume and low-signal, so they are not loggable;
//! broken invariants and unrecognized faults are.
//!
//! The mapping is total: every kind resolves to exactly one outcome, and an
//! unrecognized kind resolves to `(UNKNOWN, loggable)`.

use tonic::Code;

/// Internal failure kinds recognized by the classifier.
///
/// Kinds are mutually exclusive by construction; the producer of a failure
/// picks exactly one tag at the point the failure is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Caller supplied invalid input.
    InvalidArgument,
    /// A stream or payload could not be parsed.
    MalformedStream,
    /// The requested resource does not exist.
    NotFound,
    /// An internal invariant was violated.
    IllegalState,
    /// Anything unrecognized.
    Unknown,
}

/// The classified result for one failure: a protocol status code and
/// whether the failure should be logged at error level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOutcome {
    /// Protocol-level status code for the caller-facing response.
    pub code: Code,
    /// Whether the failure is operationally significant enough to log
    /// at error level.
    pub loggable: bool,
}

/// Classify a failure kind into its protocol status and loggability.
///
/// # Examples
///
/// ```
/// use hashscan::{classify, FailureKind};
/// use tonic::Code;
///
/// let outcome = classify(FailureKind::NotFound);
/// assert_eq!(outcome.code, Code::NotFound);
/// assert!(!outcome.loggable);
///
/// let outcome = classify(FailureKind::IllegalState);
/// assert_eq!(outcome.code, Code::Internal);
/// assert!(outcome.loggable);
/// ```
pub fn classify(kind: FailureKind) -> StatusOutcome {
    StatusOutcome {
        code: kind.code(),
        loggable: kind.is_loggable(),
    }
}

impl FailureKind {
    /// The protocol status code this kind maps to.
    pub fn code(self) -> Code {
        match self {
            FailureKind::InvalidArgument => Code::InvalidArgument,
            FailureKind::MalformedStream => Code::InvalidArgument,
            FailureKind::NotFound => Code::NotFound,
            FailureKind::IllegalState => Code::Internal,
            FailureKind::Unknown => Code::Unknown,
        }
    }

    /// Whether failures of this kind warrant error-level logging.
    ///
    /// Invalid-argument and not-found failures are expected client input
    /// and stay quiet; everything else is loggable.
    pub fn is_loggable(self) -> bool {
        !matches!(
            self.code(),
            Code::InvalidArgument | Code::NotFound
        )
    }
}
