// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The closed failure set for the retrieval clients.

use tonic::{Code, Status};

use crate::status::{classify, FailureKind, StatusOutcome};

/// Errors produced by the retrieval clients.
///
/// The three variants partition the failure space:
///
/// - [`Configuration`] - the endpoint itself is unusable (unsupported
///   scheme, missing port). Fatal, raised at connect time, never retried.
/// - [`Request`] - the remote understood the call and rejected it, or the
///   requested resource does not exist. Recoverable by the caller and never
///   logged at error level by the client.
/// - [`Protocol`] - a transport-level fault (deadline exceeded, connection
///   refused, remote internal error). Carries the remote status, the method
///   that was in flight, the endpoint, and any diagnostic body text.
///
/// Every variant exposes a [`FailureKind`] tag via [`failure_kind`], which
/// is the only input the status classifier consumes.
///
/// [`Configuration`]: ClientError::Configuration
/// [`Request`]: ClientError::Request
/// [`Protocol`]: ClientError::Protocol
/// [`failure_kind`]: ClientError::failure_kind
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The endpoint URI cannot be turned into a channel.
    #[error("invalid channel configuration for {uri}: {detail}")]
    Configuration {
        /// The offending endpoint URI.
        uri: String,
        /// What made it unusable.
        detail: String,
    },

    /// The call was rejected for reasons the caller can act on.
    #[error("{message}")]
    Request {
        /// The failure tag consumed by the status classifier.
        kind: FailureKind,
        /// Diagnostic message; never used for routing.
        message: String,
    },

    /// A transport-level fault while the call was in flight.
    #[error("{method} against {url} failed with {code:?}")]
    Protocol {
        /// The status the remote (or the transport) signaled.
        code: Code,
        /// The gRPC method that was in flight.
        method: &'static str,
        /// The endpoint the channel points at.
        url: String,
        /// Diagnostic body text, when the remote supplied any.
        body: Option<String>,
    },
}

impl ClientError {
    /// Create a `Configuration` error for an unusable endpoint.
    pub fn configuration(uri: impl Into<String>, detail: impl Into<String>) -> Self {
        ClientError::Configuration {
            uri: uri.into(),
            detail: detail.into(),
        }
    }

    /// Create a not-found `Request` error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ClientError::Request {
            kind: FailureKind::NotFound,
            message: message.into(),
        }
    }

    /// Create an invalid-argument `Request` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ClientError::Request {
            kind: FailureKind::InvalidArgument,
            message: message.into(),
        }
    }

    /// Create a malformed-payload `Request` error.
    pub fn malformed(message: impl Into<String>) -> Self {
        ClientError::Request {
            kind: FailureKind::MalformedStream,
            message: message.into(),
        }
    }

    /// Translate a remote `tonic::Status` into the closed failure set.
    ///
    /// Remote NOT_FOUND and INVALID_ARGUMENT become `Request` failures the
    /// caller can act on; everything else is a `Protocol` failure carrying
    /// the remote status and message body for diagnosis.
    pub fn from_status(status: Status, method: &'static str, url: &str) -> Self {
        match status.code() {
            Code::NotFound => ClientError::not_found(format!(
                "{method}: {}",
                status.message()
            )),
            Code::InvalidArgument => ClientError::invalid_argument(format!(
                "{method}: {}",
                status.message()
            )),
            code => {
                let message = status.message();
                ClientError::Protocol {
                    code,
                    method,
                    url: url.to_owned(),
                    body: (!message.is_empty()).then(|| message.to_owned()),
                }
            }
        }
    }

    /// The failure tag this error classifies under.
    ///
    /// Configuration errors are broken deployment state; protocol faults
    /// classify as illegal state when the remote explicitly signaled a
    /// deadline or internal fault, and as unknown otherwise.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            ClientError::Configuration { .. } => FailureKind::IllegalState,
            ClientError::Request { kind, .. } => *kind,
            ClientError::Protocol { code, .. } => match code {
                Code::DeadlineExceeded | Code::Internal => FailureKind::IllegalState,
                _ => FailureKind::Unknown,
            },
        }
    }

    /// Classify this error: protocol status code plus loggability.
    pub fn outcome(&self) -> StatusOutcome {
        classify(self.failure_kind())
    }
}
