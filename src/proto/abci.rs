// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction execution results (`cosmos.base.abci.v1beta1`).

/// The result of executing one transaction, as returned by the tx service.
///
/// `logs` carries the structured per-message execution logs; `events` is the
/// flat response-level event list that remains populated even when `logs` is
/// absent (failed transactions). `raw_log` is the untyped fallback body.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxResponse {
    /// Block height the transaction was included at.
    #[prost(int64, tag = "1")]
    pub height: i64,
    /// Transaction hash, upper-case hex.
    #[prost(string, tag = "2")]
    pub txhash: ::prost::alloc::string::String,
    /// Namespace for the `code` value.
    #[prost(string, tag = "3")]
    pub codespace: ::prost::alloc::string::String,
    /// Execution result code; zero means success.
    #[prost(uint32, tag = "4")]
    pub code: u32,
    /// Raw result bytes, hex-encoded.
    #[prost(string, tag = "5")]
    pub data: ::prost::alloc::string::String,
    /// Raw log output; fallback when structured logs are absent.
    #[prost(string, tag = "6")]
    pub raw_log: ::prost::alloc::string::String,
    /// Structured per-message execution logs.
    #[prost(message, repeated, tag = "7")]
    pub logs: ::prost::alloc::vec::Vec<AbciMessageLog>,
    #[prost(string, tag = "8")]
    pub info: ::prost::alloc::string::String,
    #[prost(int64, tag = "9")]
    pub gas_wanted: i64,
    #[prost(int64, tag = "10")]
    pub gas_used: i64,
    /// Block timestamp in RFC 3339 format.
    #[prost(string, tag = "12")]
    pub timestamp: ::prost::alloc::string::String,
    /// Flat response-level events, tagged with `msg_index` attributes.
    #[prost(message, repeated, tag = "13")]
    pub events: ::prost::alloc::vec::Vec<Event>,
}

/// Structured execution log for a single message within a transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AbciMessageLog {
    /// Index of the message this log belongs to; unique within one
    /// transaction result.
    #[prost(uint32, tag = "1")]
    pub msg_index: u32,
    #[prost(string, tag = "2")]
    pub log: ::prost::alloc::string::String,
    /// Events emitted by the message, in emission order.
    #[prost(message, repeated, tag = "3")]
    pub events: ::prost::alloc::vec::Vec<StringEvent>,
}

/// A typed event inside a structured message log.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringEvent {
    /// Event type name; compared case-sensitively.
    #[prost(string, tag = "1")]
    pub r#type: ::prost::alloc::string::String,
    /// Ordered attributes; duplicate keys may occur.
    #[prost(message, repeated, tag = "2")]
    pub attributes: ::prost::alloc::vec::Vec<Attribute>,
}

/// A key/value attribute of a [`StringEvent`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Attribute {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}

/// A response-level event from the flat event list.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Event {
    /// Event type name; compared case-sensitively.
    #[prost(string, tag = "1")]
    pub r#type: ::prost::alloc::string::String,
    /// Ordered attributes; duplicate keys may occur.
    #[prost(message, repeated, tag = "2")]
    pub attributes: ::prost::alloc::vec::Vec<EventAttribute>,
}

/// A key/value attribute of a flat [`Event`].
///
/// Values are always textual; numeric interpretation is the caller's
/// responsibility.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EventAttribute {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub index: bool,
}
