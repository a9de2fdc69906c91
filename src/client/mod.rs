// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Retrieval clients for remote blockchain and valuation services.
//!
//! Three clients share one lazily-connected, cached channel model:
//!
//! - [`BlockClient`] - blocks by height and the chain tip
//! - [`TransactionClient`] - transaction results by height or hash
//! - [`NavClient`] - NAV valuation events from the external service
//!
//! Calls are synchronous in contract: one call, one deterministic outcome.
//! No retries are performed here; callers that want retry/backoff compose it
//! around these methods. Every call is bounded by the configured deadline,
//! and every failure is routed through the status classifier exactly once
//! before it is surfaced.
//!
//! # Examples
//!
//! ```rust,ignore
//! use hashscan::{ChannelFactory, HashscanConfig, TransactionClient};
//!
//! let factory = ChannelFactory::new(HashscanConfig::default());
//! let mut txs = TransactionClient::connect(&factory, "grpc://rpc.provenance.io:9090")?;
//! let results = txs.get_txs_by_height(19_203_441, 3).await?;
//! assert_eq!(results.len(), 3);
//! ```

mod block;
mod channel;
mod nav;
mod tx;

pub use block::{BlockClient, BlockSummary};
pub use channel::ChannelFactory;
pub use nav::NavClient;
pub use tx::TransactionClient;

use prost::Message;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::{Code, Request};
use tracing::{debug, error};

use crate::errors::ClientError;

/// Issue one unary call and translate any failure into the closed error set.
///
/// Transport-not-ready is surfaced as a protocol failure with the
/// `Unavailable` code; remote statuses go through
/// [`ClientError::from_status`].
pub(crate) async fn unary_call<Req, Resp>(
    grpc: &mut Grpc<Channel>,
    path: PathAndQuery,
    method: &'static str,
    endpoint: &str,
    message: Req,
) -> Result<Resp, ClientError>
where
    Req: Message + 'static,
    Resp: Message + Default + 'static,
{
    debug!(method, endpoint, "issuing unary call");
    grpc.ready().await.map_err(|e| {
        surface(
            ClientError::Protocol {
                code: Code::Unavailable,
                method,
                url: endpoint.to_owned(),
                body: Some(e.to_string()),
            },
            method,
        )
    })?;

    let codec: ProstCodec<Req, Resp> = ProstCodec::default();
    let response = grpc
        .unary(Request::new(message), path, codec)
        .await
        .map_err(|status| surface(ClientError::from_status(status, method, endpoint), method))?;
    Ok(response.into_inner())
}

/// Log a failure according to its classified loggability, then hand it back.
///
/// Request-class failures are expected client input and stay at debug;
/// configuration and protocol faults log at error level.
pub(crate) fn surface(err: ClientError, method: &'static str) -> ClientError {
    if err.outcome().loggable {
        error!(method, error = %err, "remote call failed");
    } else {
        debug!(method, error = %err, "remote call rejected");
    }
    err
}
