// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! NAV valuation event retrieval.

use chrono::{DateTime, Utc};
use tonic::client::Grpc;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tracing::debug;

use crate::client::{surface, unary_call, ChannelFactory};
use crate::errors::ClientError;
use crate::proto::{
    LatestNavEventRequest, NavEvent, NavEventRequest, NavEventResponse, PaginationRequest,
};

/// Page size used when draining all pages of a NAV query.
const NAV_DRAIN_PAGE_SIZE: i32 = 10_000;

/// Client for the external NAV valuation service.
#[derive(Clone)]
pub struct NavClient {
    grpc: Grpc<Channel>,
    endpoint: String,
}

impl NavClient {
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

    /// Fetch up to `limit` most-recent NAV events priced in `price_denom`.
    ///
    /// `include_markers` / `include_scopes` restrict the valuation source;
    /// `from_time` is an inclusive day-granularity lower bound. The result
    /// is ordered newest-first and never exceeds `limit`. Every returned
    /// event is priced in the requested denom; a violation of that is a bug
    /// in this client or the remote, not a caller error.
    ///
    /// # Errors
    ///
    /// Protocol failures for transport faults; invalid-argument when the
    /// remote rejects the filter combination.
    pub async fn get_latest_nav_prices(
        &mut self,
        price_denom: &str,
        include_markers: bool,
        include_scopes: bool,
        from_time: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<NavEvent>, ClientError> {
        let request = LatestNavEventRequest {
            price_denom: price_denom.to_owned(),
            include_markers,
            include_scope: include_scopes,
            from_date: format_from_date(from_time),
            pagination: Some(PaginationRequest {
                page: 0,
                page_size: limit as i32,
            }),
        };
        let response: NavEventResponse = unary_call(
            &mut self.grpc,
            PathAndQuery::from_static("/provlabs.flow.api.NavService/GetLatestNavEvents"),
            "GetLatestNavEvents",
            &self.endpoint,
            request,
        )
        .await?;

        debug_assert!(
            response.nav_events.iter().all(|e| e.price_denom == price_denom),
            "remote returned NAV events priced in a foreign denom"
        );
        let events = newest_first_capped(response.nav_events, limit);
        debug!(price_denom, count = events.len(), "fetched latest NAV events");
        Ok(events)
    }

    /// Drain every page of the latest-NAV query.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`get_latest_nav_prices`]; a failure on any
    /// page fails the whole walk.
    ///
    /// [`get_latest_nav_prices`]: NavClient::get_latest_nav_prices
    pub async fn get_all_latest_nav_prices(
        &mut self,
        price_denom: &str,
        include_markers: bool,
        include_scopes: bool,
        from_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<NavEvent>, ClientError> {
        let from_date = format_from_date(from_time);
        let mut all_events = Vec::new();
        let mut current_page = 0;
        let mut total_pages = 1;

        while current_page < total_pages {
            let request = LatestNavEventRequest {
                price_denom: price_denom.to_owned(),
                include_markers,
                include_scope: include_scopes,
                from_date: from_date.clone(),
                pagination: Some(PaginationRequest {
                    page: current_page,
                    page_size: NAV_DRAIN_PAGE_SIZE,
                }),
            };
            let response: NavEventResponse = unary_call(
                &mut self.grpc,
                PathAndQuery::from_static("/provlabs.flow.api.NavService/GetLatestNavEvents"),
                "GetLatestNavEvents",
                &self.endpoint,
                request,
            )
            .await?;

            all_events.extend(response.nav_events);
            total_pages = response.pagination.map_or(0, |p| p.total_pages);
            current_page += 1;
        }

        debug!(
            price_denom,
            pages = current_page,
            count = all_events.len(),
            "drained latest NAV events"
        );
        Ok(all_events)
    }

    /// Fetch one page of marker NAV history for `denom`, restricted to the
    /// given price denoms.
    ///
    /// # Errors
    ///
    /// Protocol failures for transport faults; invalid-argument when the
    /// remote rejects the filter combination.
    pub async fn get_marker_nav_by_price_denoms(
        &mut self,
        denom: &str,
        price_denoms: &[&str],
        from_time: Option<DateTime<Utc>>,
        page: i32,
        page_size: i32,
    ) -> Result<Vec<NavEvent>, ClientError> {
        let request = NavEventRequest {
            denom: denom.to_owned(),
            price_denoms: price_denoms.iter().map(|d| (*d).to_owned()).collect(),
            from_date: format_from_date(from_time),
            pagination: Some(PaginationRequest { page, page_size }),
        };
        let response: NavEventResponse = unary_call(
            &mut self.grpc,
            PathAndQuery::from_static("/provlabs.flow.api.NavService/GetNavEvents"),
            "GetNavEvents",
            &self.endpoint,
            request,
        )
        .await?;

        Ok(response.nav_events)
    }

    /// Drain every page of marker NAV history for `denom`.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`get_marker_nav_by_price_denoms`]; a
    /// failure on any page fails the whole walk.
    ///
    /// [`get_marker_nav_by_price_denoms`]: NavClient::get_marker_nav_by_price_denoms
    pub async fn get_all_marker_nav_by_price_denoms(
        &mut self,
        denom: &str,
        price_denoms: &[&str],
        from_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<NavEvent>, ClientError> {
        let from_date = format_from_date(from_time);
        let mut all_events = Vec::new();
        let mut current_page = 0;
        let mut total_pages = 1;

        while current_page < total_pages {
            let request = NavEventRequest {
                denom: denom.to_owned(),
                price_denoms: price_denoms.iter().map(|d| (*d).to_owned()).collect(),
                from_date: from_date.clone(),
                pagination: Some(PaginationRequest {
                    page: current_page,
                    page_size: NAV_DRAIN_PAGE_SIZE,
                }),
            };
            let response: NavEventResponse = unary_call(
                &mut self.grpc,
                PathAndQuery::from_static("/provlabs.flow.api.NavService/GetNavEvents"),
                "GetNavEvents",
                &self.endpoint,
                request,
            )
            .await?;

            all_events.extend(response.nav_events);
            total_pages = response.pagination.map_or(0, |p| p.total_pages);
            current_page += 1;
        }

        Ok(all_events)
    }
}

/// Render the optional lower bound the way the NAV service expects it.
fn format_from_date(from_time: Option<DateTime<Utc>>) -> String {
    from_time
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Order events newest-first and cap the result at `limit`.
///
/// The sort is stable, so events sharing a block height keep their remote
/// emission order.
fn newest_first_capped(mut events: Vec<NavEvent>, limit: usize) -> Vec<NavEvent> {
    events.sort_by(|a, b| b.block_height.cmp(&a.block_height));
    events.truncate(limit);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn nav_at_height(block_height: i64) -> NavEvent {
        NavEvent {
            block_height,
            price_denom: "uusd.trading".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_date_formats_day_granularity() {
        let time = Utc.with_ymd_and_hms(2025, 3, 9, 17, 45, 12).unwrap();
        assert_eq!(format_from_date(Some(time)), "2025-03-09");
    }

    #[test]
    fn test_from_date_empty_when_unbounded() {
        assert_eq!(format_from_date(None), "");
    }

    #[test]
    fn test_events_ordered_newest_first() {
        let events = newest_first_capped(
            vec![nav_at_height(5), nav_at_height(9), nav_at_height(7)],
            10,
        );
        let heights: Vec<i64> = events.iter().map(|e| e.block_height).collect();
        assert_eq!(heights, vec![9, 7, 5]);
    }

    #[test]
    fn test_result_never_exceeds_limit() {
        let events = newest_first_capped(
            vec![nav_at_height(1), nav_at_height(2), nav_at_height(3)],
            2,
        );
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].block_height, 3);
    }

    #[test]
    fn test_zero_limit_yields_empty() {
        let events = newest_first_capped(vec![nav_at_height(1)], 0);
        assert!(events.is_empty());
    }
}
