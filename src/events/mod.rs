// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Attribute extraction from transaction execution logs.
//!
//! A transaction result carries event data in two places: the structured
//! per-message `logs` list, and the flat response-level `events` list that
//! stays populated even when structured logs are absent (failed
//! transactions). This module recovers `key -> value` maps from either
//! representation through two pure strategies sharing one matching
//! primitive:
//!
//! - [`extract_from_logs`] - the log entry whose message index equals the
//!   request, then the first event of the target type within it;
//! - [`extract_by_msg_index`] - the flat event list, filtered by a
//!   `msg_index` attribute equal to the request and the target type.
//!
//! Given equivalent well-formed input the two strategies yield identical
//! maps; that equivalence is a correctness property pinned by a property
//! test, not an implementation accident. Within one event a duplicated
//! attribute key resolves to its first occurrence, deterministically. A
//! missing log entry, message index, or event type yields an empty map,
//! never an error; callers that require a value decide what an empty
//! result means.

use std::collections::{BTreeMap, HashMap};

use crate::proto::{Attribute, Event, StringEvent, TxResponse};

/// Attribute key the flat event list uses to tag the producing message.
const MSG_INDEX_KEY: &str = "msg_index";

/// Recover attribute values for `event_type` at `msg_index`, choosing the
/// structured logs when they cover the index and the flat event list
/// otherwise.
///
/// # Examples
///
/// ```
/// use hashscan::events::extract_event_attrs;
/// use hashscan::proto::{AbciMessageLog, Attribute, StringEvent, TxResponse};
///
/// let tx = TxResponse {
///     logs: vec![AbciMessageLog {
///         msg_index: 0,
///         log: String::new(),
///         events: vec![StringEvent {
///             r#type: "provenance.marker.v1.EventMarkerTransfer".to_owned(),
///             attributes: vec![Attribute {
///                 key: "denom".to_owned(),
///                 value: "\"nhash\"".to_owned(),
///             }],
///         }],
///     }],
///     ..Default::default()
/// };
///
/// let attrs = extract_event_attrs(
///     &tx,
///     0,
///     "provenance.marker.v1.EventMarkerTransfer",
///     &["denom", "amount"],
/// );
/// assert_eq!(attrs.get("denom").map(String::as_str), Some("nhash"));
/// assert!(!attrs.contains_key("amount"));
/// ```
pub fn extract_event_attrs(
    tx: &TxResponse,
    msg_index: u32,
    event_type: &str,
    keys: &[&str],
) -> HashMap<String, String> {
    if tx.logs.len() <= msg_index as usize {
        extract_by_msg_index(tx, msg_index, event_type, keys)
    } else {
        extract_from_logs(tx, msg_index, event_type, keys)
    }
}

/// Recover attribute values from the structured per-message logs.
///
/// Selects the log entry whose `msg_index` equals the request, scans its
/// events in order for the first one of the target type, and takes the
/// first occurrence of each requested key. Requested keys absent from the
/// matched event are simply absent from the result.
pub fn extract_from_logs(
    tx: &TxResponse,
    msg_index: u32,
    event_type: &str,
    keys: &[&str],
) -> HashMap<String, String> {
    tx.logs
        .iter()
        .find(|log| log.msg_index == msg_index)
        .and_then(|log| log.events.iter().find(|event| event.r#type == event_type))
        .map(|event| {
            collect_first_occurrences(
                event.attributes.iter().map(|a| (a.key.as_str(), a.value.as_str())),
                keys,
            )
        })
        .unwrap_or_default()
}

/// Recover attribute values from the flat response-level event list.
///
/// Selects the first event of the target type tagged with a `msg_index`
/// attribute equal to the request, then applies the same
/// first-occurrence-wins rule as [`extract_from_logs`].
pub fn extract_by_msg_index(
    tx: &TxResponse,
    msg_index: u32,
    event_type: &str,
    keys: &[&str],
) -> HashMap<String, String> {
    let needle = msg_index.to_string();
    tx.events
        .iter()
        .find(|event| {
            event.r#type == event_type
                && event
                    .attributes
                    .iter()
                    .any(|a| a.key == MSG_INDEX_KEY && a.value == needle)
        })
        .map(|event| {
            collect_first_occurrences(
                event.attributes.iter().map(|a| (a.key.as_str(), a.value.as_str())),
                keys,
            )
        })
        .unwrap_or_default()
}

/// The events belonging to one message index, from whichever representation
/// is populated.
///
/// When structured logs cover the index their event list is returned as-is;
/// otherwise the flat events tagged with the index are converted into the
/// structured shape (dropping the `index` flag, which has no structured
/// counterpart).
pub fn events_at_index(tx: &TxResponse, msg_index: u32) -> Vec<StringEvent> {
    if tx.logs.len() <= msg_index as usize {
        let needle = msg_index.to_string();
        tx.events
            .iter()
            .filter(|event| {
                event
                    .attributes
                    .iter()
                    .any(|a| a.key == MSG_INDEX_KEY && a.value == needle)
            })
            .map(|event| StringEvent {
                r#type: event.r#type.clone(),
                attributes: event
                    .attributes
                    .iter()
                    .map(|a| Attribute {
                        key: a.key.clone(),
                        value: a.value.clone(),
                    })
                    .collect(),
            })
            .collect()
    } else {
        tx.logs
            .iter()
            .find(|log| log.msg_index == msg_index)
            .map(|log| log.events.clone())
            .unwrap_or_default()
    }
}

/// All flat events whose type is in `event_types`, in response order.
pub fn find_all_matching_events<'a>(
    tx: &'a TxResponse,
    event_types: &[&str],
) -> Vec<&'a Event> {
    tx.events
        .iter()
        .filter(|event| event_types.contains(&event.r#type.as_str()))
        .collect()
}

/// Scan every flat event of `event_type` carrying `attr_key`, mapping each
/// occurrence index to the key's first value within that event.
pub fn map_tx_event_attr_values(
    tx: &TxResponse,
    event_type: &str,
    attr_key: &str,
) -> BTreeMap<usize, String> {
    tx.events
        .iter()
        .filter(|event| {
            event.r#type == event_type && event.attributes.iter().any(|a| a.key == attr_key)
        })
        .enumerate()
        .filter_map(|(idx, event)| {
            event
                .attributes
                .iter()
                .find(|a| a.key == attr_key)
                .map(|a| (idx, a.value.clone()))
        })
        .collect()
}

/// Strip one pair of wrapping double quotes, if present.
///
/// Attribute values frequently arrive JSON-quoted; comparison and numeric
/// parsing want the bare text.
pub fn scrub_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// First-occurrence-wins collection over ordered `(key, value)` pairs.
///
/// The single matching primitive both strategies share: for each requested
/// key, the first pair with that key contributes its (quote-scrubbed)
/// value; later duplicates never override it.
fn collect_first_occurrences<'a, I>(pairs: I, keys: &[&str]) -> HashMap<String, String>
where
    I: Iterator<Item = (&'a str, &'a str)> + Clone,
{
    keys.iter()
        .filter_map(|key| {
            pairs
                .clone()
                .find(|(k, _)| k == key)
                .map(|(_, v)| ((*key).to_owned(), scrub_quotes(v).to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{AbciMessageLog, EventAttribute};

    const TRANSFER: &str = "transfer";

    fn string_event(event_type: &str, attrs: &[(&str, &str)]) -> StringEvent {
        StringEvent {
            r#type: event_type.to_owned(),
            attributes: attrs
                .iter()
                .map(|(k, v)| Attribute {
                    key: (*k).to_owned(),
                    value: (*v).to_owned(),
                })
                .collect(),
        }
    }

    fn flat_event(event_type: &str, msg_index: u32, attrs: &[(&str, &str)]) -> Event {
        let mut attributes: Vec<EventAttribute> = attrs
            .iter()
            .map(|(k, v)| EventAttribute {
                key: (*k).to_owned(),
                value: (*v).to_owned(),
                index: false,
            })
            .collect();
        attributes.push(EventAttribute {
            key: MSG_INDEX_KEY.to_owned(),
            value: msg_index.to_string(),
            index: false,
        });
        Event {
            r#type: event_type.to_owned(),
            attributes,
        }
    }

    fn tx_with_logs() -> TxResponse {
        TxResponse {
            logs: vec![
                AbciMessageLog {
                    msg_index: 0,
                    log: String::new(),
                    events: vec![string_event(TRANSFER, &[("recipient", "addr1"), ("amount", "5nhash")])],
                },
                AbciMessageLog {
                    msg_index: 1,
                    log: String::new(),
                    events: vec![string_event(TRANSFER, &[("recipient", "addr2"), ("amount", "7nhash")])],
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_extract_from_logs_selects_by_msg_index() {
        let tx = tx_with_logs();
        let attrs = extract_from_logs(&tx, 1, TRANSFER, &["recipient", "amount"]);
        assert_eq!(attrs.get("recipient").map(String::as_str), Some("addr2"));
        assert_eq!(attrs.get("amount").map(String::as_str), Some("7nhash"));
    }

    #[test]
    fn test_first_occurrence_wins_on_duplicate_keys() {
        let tx = TxResponse {
            logs: vec![AbciMessageLog {
                msg_index: 0,
                log: String::new(),
                events: vec![string_event(
                    TRANSFER,
                    &[("amount", "first"), ("amount", "second")],
                )],
            }],
            ..Default::default()
        };
        let attrs = extract_from_logs(&tx, 0, TRANSFER, &["amount"]);
        assert_eq!(attrs.get("amount").map(String::as_str), Some("first"));
    }

    #[test]
    fn test_missing_msg_index_yields_empty_map() {
        let tx = tx_with_logs();
        assert!(extract_from_logs(&tx, 9, TRANSFER, &["recipient"]).is_empty());
        assert!(extract_by_msg_index(&tx, 9, TRANSFER, &["recipient"]).is_empty());
    }

    #[test]
    fn test_missing_event_type_yields_empty_map() {
        let tx = tx_with_logs();
        assert!(extract_from_logs(&tx, 0, "mint", &["recipient"]).is_empty());
    }

    #[test]
    fn test_absent_key_is_absent_not_error() {
        let tx = tx_with_logs();
        let attrs = extract_from_logs(&tx, 0, TRANSFER, &["recipient", "sender"]);
        assert_eq!(attrs.len(), 1);
        assert!(!attrs.contains_key("sender"));
    }

    #[test]
    fn test_event_type_comparison_is_case_sensitive() {
        let tx = tx_with_logs();
        assert!(extract_from_logs(&tx, 0, "Transfer", &["recipient"]).is_empty());
    }

    #[test]
    fn test_dispatch_falls_back_to_flat_events() {
        // Failed transactions carry no structured logs but keep flat events.
        let tx = TxResponse {
            events: vec![flat_event(TRANSFER, 0, &[("recipient", "addr9")])],
            ..Default::default()
        };
        let attrs = extract_event_attrs(&tx, 0, TRANSFER, &["recipient"]);
        assert_eq!(attrs.get("recipient").map(String::as_str), Some("addr9"));
    }

    #[test]
    fn test_extract_by_msg_index_matches_tagged_event_only() {
        let tx = TxResponse {
            events: vec![
                flat_event(TRANSFER, 0, &[("recipient", "addr1")]),
                flat_event(TRANSFER, 1, &[("recipient", "addr2")]),
            ],
            ..Default::default()
        };
        let attrs = extract_by_msg_index(&tx, 1, TRANSFER, &["recipient"]);
        assert_eq!(attrs.get("recipient").map(String::as_str), Some("addr2"));
    }

    #[test]
    fn test_scrub_quotes() {
        assert_eq!(scrub_quotes("\"nhash\""), "nhash");
        assert_eq!(scrub_quotes("nhash"), "nhash");
        assert_eq!(scrub_quotes("\"unbalanced"), "\"unbalanced");
        assert_eq!(scrub_quotes("\"\""), "");
    }

    #[test]
    fn test_events_at_index_prefers_structured_logs() {
        let tx = tx_with_logs();
        let events = events_at_index(&tx, 1);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].r#type, TRANSFER);
    }

    #[test]
    fn test_events_at_index_converts_flat_events() {
        let tx = TxResponse {
            events: vec![
                flat_event(TRANSFER, 0, &[("recipient", "addr1")]),
                flat_event("mint", 0, &[("amount", "1nhash")]),
                flat_event(TRANSFER, 1, &[("recipient", "addr2")]),
            ],
            ..Default::default()
        };
        let events = events_at_index(&tx, 0);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].r#type, TRANSFER);
        assert_eq!(events[1].r#type, "mint");
    }

    #[test]
    fn test_find_all_matching_events() {
        let tx = TxResponse {
            events: vec![
                flat_event(TRANSFER, 0, &[]),
                flat_event("mint", 0, &[]),
                flat_event(TRANSFER, 1, &[]),
            ],
            ..Default::default()
        };
        let matched = find_all_matching_events(&tx, &[TRANSFER]);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_map_tx_event_attr_values_indexes_occurrences() {
        let tx = TxResponse {
            events: vec![
                flat_event(TRANSFER, 0, &[("amount", "1nhash")]),
                flat_event(TRANSFER, 1, &[("recipient", "addr2")]),
                flat_event(TRANSFER, 2, &[("amount", "3nhash")]),
            ],
            ..Default::default()
        };
        let map = map_tx_event_attr_values(&tx, TRANSFER, "amount");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&0).map(String::as_str), Some("1nhash"));
        assert_eq!(map.get(&1).map(String::as_str), Some("3nhash"));
    }
}
