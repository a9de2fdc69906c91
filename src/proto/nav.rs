// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! NAV valuation events (`provlabs.flow.api.NavService`).

/// A recorded valuation observation for an asset, sourced from markers or
/// scopes in the external valuation service. Read-only to this core.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NavEvent {
    /// Height of the block the valuation was observed at.
    #[prost(int64, tag = "1")]
    pub block_height: i64,
    /// Block timestamp in RFC 3339 format.
    #[prost(string, tag = "2")]
    pub block_time: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub tx_hash: ::prost::alloc::string::String,
    /// Position of the event within its transaction.
    #[prost(int32, tag = "4")]
    pub event_order: i32,
    #[prost(string, tag = "5")]
    pub event_type: ::prost::alloc::string::String,
    /// Scope identifier when the valuation is scope-sourced.
    #[prost(string, tag = "6")]
    pub scope_id: ::prost::alloc::string::String,
    /// Denomination of the valued asset.
    #[prost(string, tag = "7")]
    pub denom: ::prost::alloc::string::String,
    /// Price in the smallest unit of `price_denom`.
    #[prost(int64, tag = "8")]
    pub price_amount: i64,
    /// Denomination the price is quoted in, e.g. `usd` or `uusd.trading`.
    #[prost(string, tag = "9")]
    pub price_denom: ::prost::alloc::string::String,
    /// Volume of the valued asset in its smallest unit.
    #[prost(int64, tag = "10")]
    pub volume: i64,
    /// Where the valuation came from, e.g. `x/exchange market 1`.
    #[prost(string, tag = "11")]
    pub source: ::prost::alloc::string::String,
}

/// Marker NAV history query.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NavEventRequest {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub price_denoms: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Inclusive lower bound, `yyyy-MM-dd`; empty means unbounded.
    #[prost(string, tag = "3")]
    pub from_date: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub pagination: ::core::option::Option<PaginationRequest>,
}

/// Latest-NAV query, optionally restricted by valuation source.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LatestNavEventRequest {
    #[prost(string, tag = "1")]
    pub price_denom: ::prost::alloc::string::String,
    #[prost(bool, tag = "2")]
    pub include_markers: bool,
    #[prost(bool, tag = "3")]
    pub include_scope: bool,
    /// Inclusive lower bound, `yyyy-MM-dd`; empty means unbounded.
    #[prost(string, tag = "4")]
    pub from_date: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "5")]
    pub pagination: ::core::option::Option<PaginationRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NavEventResponse {
    #[prost(message, repeated, tag = "1")]
    pub nav_events: ::prost::alloc::vec::Vec<NavEvent>,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<PaginationResponse>,
}

/// Page-number pagination used by the NAV service.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaginationRequest {
    #[prost(int32, tag = "1")]
    pub page: i32,
    #[prost(int32, tag = "2")]
    pub page_size: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaginationResponse {
    #[prost(int32, tag = "1")]
    pub current_page: i32,
    #[prost(int32, tag = "2")]
    pub total_pages: i32,
}
