// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction retrieval.

use tonic::client::Grpc;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tracing::debug;

use crate::client::{surface, unary_call, ChannelFactory};
use crate::errors::ClientError;
use crate::proto::{
    GetTxRequest, GetTxResponse, GetTxsEventRequest, GetTxsEventResponse, PageRequest, TxResponse,
};

/// Page size used when walking a block height's transactions.
const TX_PAGE_LIMIT: u64 = 100;

/// Client for the remote transaction service.
#[derive(Clone)]
pub struct TransactionClient {
    grpc: Grpc<Channel>,
    endpoint: String,
}

impl TransactionClient {
    /// Wrap an already-built channel.
    pub fn new(channel: Channel, endpoint: impl Into<String>) -> Self {
        Self {
            grpc: Grpc::new(channel),
            endpoint: endpoint.into(),
        }
    }

    /// Build a client over the factory's cached channel for `uri`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unusable endpoint URI.
    pub fn connect(factory: &ChannelFactory, uri: &str) -> Result<Self, ClientError> {
        Ok(Self::new(
            factory.connect(uri).map_err(|e| surface(e, "connect"))?,
            uri,
        ))
    }

    /// Fetch all transaction results at `height`.
    ///
    /// Pages through the remote result set until `expected_count` results
    /// are collected. An empty page before reaching the count, or any final
    /// length mismatch, is a not-found failure rather than a silent short
    /// sequence.
    ///
    /// # Errors
    ///
    /// Not-found on a count mismatch; protocol failures for transport
    /// faults, carrying the remote status and diagnostic body.
    pub async fn get_txs_by_height(
        &mut self,
        height: u64,
        expected_count: usize,
    ) -> Result<Vec<TxResponse>, ClientError> {
        let mut collected: Vec<TxResponse> = Vec::with_capacity(expected_count);
        let mut offset = 0u64;

        while collected.len() < expected_count {
            let request = GetTxsEventRequest {
                events: vec![format!("tx.height={height}")],
                pagination: Some(PageRequest {
                    offset,
                    limit: TX_PAGE_LIMIT,
                    ..Default::default()
                }),
            };
            let response: GetTxsEventResponse = unary_call(
                &mut self.grpc,
                PathAndQuery::from_static("/cosmos.tx.v1beta1.Service/GetTxsEvent"),
                "GetTxsEvent",
                &self.endpoint,
                request,
            )
            .await?;

            if response.tx_responses.is_empty() {
                break;
            }
            collected.extend(response.tx_responses);
            offset += TX_PAGE_LIMIT;
        }

        ensure_expected_count(height, expected_count, collected.len())
            .map_err(|e| surface(e, "GetTxsEvent"))?;

        debug!(height, count = collected.len(), "fetched transactions at height");
        Ok(collected)
    }

    /// Fetch one transaction result by its hash.
    ///
    /// # Errors
    ///
    /// Not-found when the remote does not know the hash or returns an empty
    /// response; protocol failures for transport faults.
    pub async fn get_tx_by_hash(&mut self, hash: &str) -> Result<TxResponse, ClientError> {
        let response: GetTxResponse = unary_call(
            &mut self.grpc,
            PathAndQuery::from_static("/cosmos.tx.v1beta1.Service/GetTx"),
            "GetTx",
            &self.endpoint,
            GetTxRequest {
                hash: hash.to_owned(),
            },
        )
        .await?;

        response.tx_response.ok_or_else(|| {
            surface(
                ClientError::not_found(format!("no transaction result for hash {hash}")),
                "GetTx",
            )
        })
    }
}

/// A height walk must end with exactly the expected number of results;
/// anything else, an over-count included, is a not-found failure rather
/// than a silently wrong sequence.
fn ensure_expected_count(height: u64, expected: usize, found: usize) -> Result<(), ClientError> {
    if found == expected {
        Ok(())
    } else {
        Err(ClientError::not_found(format!(
            "expected {expected} transactions at height {height}, found {found}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::FailureKind;

    #[test]
    fn test_exact_count_passes() {
        assert!(ensure_expected_count(100, 3, 3).is_ok());
        assert!(ensure_expected_count(100, 0, 0).is_ok());
    }

    #[test]
    fn test_short_count_is_not_found() {
        let err = ensure_expected_count(100, 3, 2).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Request {
                kind: FailureKind::NotFound,
                ..
            }
        ));
        assert!(!err.outcome().loggable);
    }

    #[test]
    fn test_over_count_is_not_found() {
        let err = ensure_expected_count(100, 3, 5).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Request {
                kind: FailureKind::NotFound,
                ..
            }
        ));
    }
}
