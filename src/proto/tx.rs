// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction queries (`cosmos.tx.v1beta1`).

use super::abci::TxResponse;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxRequest {
    /// Transaction hash, upper-case hex.
    #[prost(string, tag = "1")]
    pub hash: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxResponse {
    #[prost(message, optional, tag = "2")]
    pub tx_response: ::core::option::Option<TxResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxsEventRequest {
    /// Event filters, e.g. `tx.height=12345`.
    #[prost(string, repeated, tag = "1")]
    pub events: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxsEventResponse {
    #[prost(message, repeated, tag = "2")]
    pub tx_responses: ::prost::alloc::vec::Vec<TxResponse>,
    #[prost(message, optional, tag = "3")]
    pub pagination: ::core::option::Option<PageResponse>,
}

/// Offset-based pagination (`cosmos.base.query.v1beta1.PageRequest`).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PageRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub key: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub offset: u64,
    #[prost(uint64, tag = "3")]
    pub limit: u64,
    #[prost(bool, tag = "4")]
    pub count_total: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PageResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub next_key: ::prost::alloc::vec::Vec<u8>,
    /// Total result count; populated when `count_total` was requested.
    #[prost(uint64, tag = "2")]
    pub total: u64,
}
