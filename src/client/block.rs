// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Block retrieval and normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tonic::client::Grpc;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

use crate::client::{surface, unary_call, ChannelFactory};
use crate::errors::ClientError;
use crate::proto::{
    Block, BlockId, GetBlockByHeightRequest, GetBlockByHeightResponse, GetLatestBlockRequest,
    GetLatestBlockResponse,
};

/// Client for the remote tendermint block service.
#[derive(Clone)]
pub struct BlockClient {
    grpc: Grpc<Channel>,
    endpoint: String,
}

/// Normalized view of a retrieved block.
///
/// Immutable once retrieved; identity is `height` + `hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub height: i64,
    /// Block hash, upper-case hex.
    pub hash: String,
    pub time: DateTime<Utc>,
    /// Hash of the parent block, upper-case hex.
    pub parent_hash: String,
    /// Number of transactions carried by the block.
    pub tx_count: usize,
    /// Aggregate size of the raw transaction payloads, in bytes.
    pub size_bytes: usize,
}

impl BlockClient {
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

    /// Fetch and normalize the block at `height`.
    ///
    /// # Errors
    ///
    /// Not-found when the remote does not have the height; malformed when
    /// the response is missing its header, hash, or timestamp; protocol
    /// failures for transport faults.
    pub async fn get_block_at_height(&mut self, height: i64) -> Result<BlockSummary, ClientError> {
        let response: GetBlockByHeightResponse = unary_call(
            &mut self.grpc,
            PathAndQuery::from_static(
                "/cosmos.base.tendermint.v1beta1.Service/GetBlockByHeight",
            ),
            "GetBlockByHeight",
            &self.endpoint,
            GetBlockByHeightRequest { height },
        )
        .await?;

        summarize(response.block_id.as_ref(), response.block.as_ref())
            .map_err(|e| surface(e, "GetBlockByHeight"))
    }

    /// Fetch and normalize the chain-tip block.
    ///
    /// # Errors
    ///
    /// Malformed when the response is missing its header, hash, or
    /// timestamp; protocol failures for transport faults.
    pub async fn get_latest_block(&mut self) -> Result<BlockSummary, ClientError> {
        let response: GetLatestBlockResponse = unary_call(
            &mut self.grpc,
            PathAndQuery::from_static("/cosmos.base.tendermint.v1beta1.Service/GetLatestBlock"),
            "GetLatestBlock",
            &self.endpoint,
            GetLatestBlockRequest {},
        )
        .await?;

        summarize(response.block_id.as_ref(), response.block.as_ref())
            .map_err(|e| surface(e, "GetLatestBlock"))
    }
}

/// Collapse a raw block response into a [`BlockSummary`].
fn summarize(block_id: Option<&BlockId>, block: Option<&Block>) -> Result<BlockSummary, ClientError> {
    let block = block.ok_or_else(|| ClientError::malformed("block response missing block"))?;
    let header = block
        .header
        .as_ref()
        .ok_or_else(|| ClientError::malformed("block response missing header"))?;
    let hash = block_id
        .map(|id| hex::encode_upper(&id.hash))
        .ok_or_else(|| ClientError::malformed("block response missing block id"))?;
    let time = header
        .time
        .as_ref()
        .and_then(|t| DateTime::from_timestamp(t.seconds, t.nanos as u32))
        .ok_or_else(|| ClientError::malformed("block header missing or invalid timestamp"))?;
    let parent_hash = header
        .last_block_id
        .as_ref()
        .map(|id| hex::encode_upper(&id.hash))
        .unwrap_or_default();
    let (tx_count, size_bytes) = block
        .data
        .as_ref()
        .map(|data| (data.txs.len(), data.txs.iter().map(Vec::len).sum()))
        .unwrap_or((0, 0));

    Ok(BlockSummary {
        height: header.height,
        hash,
        time,
        parent_hash,
        tx_count,
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{BlockData, Header};
    use prost_types::Timestamp;

    fn block_response() -> (Option<BlockId>, Option<Block>) {
        (
            Some(BlockId {
                hash: vec![0xAB, 0xCD],
            }),
            Some(Block {
                header: Some(Header {
                    chain_id: "pio-mainnet-1".to_owned(),
                    height: 19_203_441,
                    time: Some(Timestamp {
                        seconds: 1_700_000_000,
                        nanos: 0,
                    }),
                    last_block_id: Some(BlockId {
                        hash: vec![0x01, 0x02],
                    }),
                }),
                data: Some(BlockData {
                    txs: vec![vec![0u8; 120], vec![0u8; 80]],
                }),
            }),
        )
    }

    #[test]
    fn test_summarize_normalizes_block() {
        let (block_id, block) = block_response();
        let summary = summarize(block_id.as_ref(), block.as_ref()).unwrap();
        assert_eq!(summary.height, 19_203_441);
        assert_eq!(summary.hash, "ABCD");
        assert_eq!(summary.parent_hash, "0102");
        assert_eq!(summary.tx_count, 2);
        assert_eq!(summary.size_bytes, 200);
        assert_eq!(summary.time.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_summarize_missing_header_is_malformed() {
        let (block_id, _) = block_response();
        let err = summarize(
            block_id.as_ref(),
            Some(&Block {
                header: None,
                data: None,
            }),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Request { .. }));
        assert!(!err.outcome().loggable);
    }

    #[test]
    fn test_summarize_empty_data_counts_zero() {
        let (block_id, mut block) = block_response();
        block.as_mut().unwrap().data = None;
        let summary = summarize(block_id.as_ref(), block.as_ref()).unwrap();
        assert_eq!(summary.tx_count, 0);
        assert_eq!(summary.size_bytes, 0);
    }
}
