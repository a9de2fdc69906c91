// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Hand-maintained prost mirrors of the remote protocol surface.
//!
//! These messages mirror only the fields this core reads or writes from the
//! Cosmos SDK tx/tendermint services and the NAV valuation service. Field
//! tags match the upstream protobuf definitions, so messages interoperate on
//! the wire; fields the core never touches are simply omitted (protobuf
//! decoders skip unknown tags). Keeping the mirrors in-tree avoids a
//! build-time protoc dependency while staying wire-compatible.

pub mod abci;
pub mod block;
pub mod nav;
pub mod tx;

pub use abci::{AbciMessageLog, Attribute, Event, EventAttribute, StringEvent, TxResponse};
pub use block::{
    Block, BlockData, BlockId, GetBlockByHeightRequest, GetBlockByHeightResponse,
    GetLatestBlockRequest, GetLatestBlockResponse, Header,
};
pub use nav::{
    LatestNavEventRequest, NavEvent, NavEventRequest, NavEventResponse, PaginationRequest,
    PaginationResponse,
};
pub use tx::{
    GetTxRequest, GetTxResponse, GetTxsEventRequest, GetTxsEventResponse, PageRequest,
    PageResponse,
};
