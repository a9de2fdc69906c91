// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The metric registry and time-series surface.
//!
//! [`METRIC_REGISTRY`] is a compiled-in, immutable table mapping each
//! tracked metric to its per-network external series identifiers and
//! sampling cadence. Lookup is O(1) in both directions: by identity, and by
//! `(network, external id)` when ingesting externally-keyed series back
//! into the internal model. Adding a metric is a compile-time change; the
//! table never mutates at runtime and is safe for unsynchronized concurrent
//! reads.
//!
//! Persistence is a seam, not a dependency: the core writes and reads
//! series through the [`MetricStore`] trait and leaves retention to the
//! implementation. [`MemoryMetricStore`] is the in-memory reference used by
//! tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Which network an external series identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
}

/// Sampling cadence of a tracked metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplingInterval {
    Hourly,
    Daily,
}

/// Canonical identity of a tracked time-series metric.
///
/// Discriminants index into [`METRIC_REGISTRY`]; the registry test pins the
/// correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricIdentity {
    HashPriceUsd,
    HashMarketCapUsd,
    HashVolumeUsd,
    HashTvlUsd,
    UniqueWalletsCount,
    DailyTransactionsCount,
}

/// One registry row: a metric with its external series ids and cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSeries {
    pub metric: MetricIdentity,
    pub mainnet_id: &'static str,
    pub testnet_id: &'static str,
    pub interval: SamplingInterval,
}

/// The static metric table. Never mutated at runtime.
pub const METRIC_REGISTRY: [MetricSeries; 6] = [
    MetricSeries {
        metric: MetricIdentity::HashPriceUsd,
        mainnet_id: "67e6f842f796f89f6a62e41d",
        testnet_id: "681e6c7423218c8540e51e9b",
        interval: SamplingInterval::Hourly,
    },
    MetricSeries {
        metric: MetricIdentity::HashMarketCapUsd,
        mainnet_id: "67e6f842f796f89f6a62e41e",
        testnet_id: "681e6c8b23218c8540e51e9c",
        interval: SamplingInterval::Hourly,
    },
    MetricSeries {
        metric: MetricIdentity::HashVolumeUsd,
        mainnet_id: "67e6f842f796f89f6a62e41f",
        testnet_id: "681e6cb323218c8540e51e9e",
        interval: SamplingInterval::Hourly,
    },
    MetricSeries {
        metric: MetricIdentity::HashTvlUsd,
        mainnet_id: "67e6f842f796f89f6a62e420",
        testnet_id: "681e6c9623218c8540e51e9d",
        interval: SamplingInterval::Hourly,
    },
    MetricSeries {
        metric: MetricIdentity::UniqueWalletsCount,
        mainnet_id: "67e6f842b1c3c1935b3b80a6",
        testnet_id: "681cc340b8f899cb92ae6edd",
        interval: SamplingInterval::Daily,
    },
    MetricSeries {
        metric: MetricIdentity::DailyTransactionsCount,
        mainnet_id: "67e6f842b1c3c1935b3b80a7",
        testnet_id: "681cc340b8f899cb92ae6edf",
        interval: SamplingInterval::Daily,
    },
];

impl MetricIdentity {
    /// The registry row for this metric.
    #[must_use]
    pub fn series(self) -> &'static MetricSeries {
        &METRIC_REGISTRY[self as usize]
    }

    /// The external series identifier for this metric on `network`.
    #[must_use]
    pub fn external_id(self, network: Network) -> &'static str {
        let series = self.series();
        match network {
            Network::Mainnet => series.mainnet_id,
            Network::Testnet => series.testnet_id,
        }
    }

    /// The sampling cadence of this metric.
    #[must_use]
    pub fn interval(self) -> SamplingInterval {
        self.series().interval
    }

    /// Resolve an external series identifier back to its metric.
    ///
    /// Used when ingesting externally-keyed time series into the internal
    /// model. Returns `None` for identifiers the registry does not know.
    pub fn from_external_id(network: Network, external_id: &str) -> Option<Self> {
        METRIC_REGISTRY
            .iter()
            .find(|series| series.metric.external_id(network) == external_id)
            .map(|series| series.metric)
    }
}

/// One observation in a metric's time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    /// Unix timestamp of the observation.
    pub timestamp: i64,
    /// Observed value, rendered as text by the producer.
    pub value: String,
}

/// A batch of records under one external series identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesData {
    /// External series identifier the records belong to.
    pub ts_id: String,
    pub records: Vec<TimeSeriesRecord>,
}

/// Boxed error type for pluggable store implementations.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Pluggable persistence for metric time series.
///
/// The core appends records and reads them back; retention, schema, and
/// durability belong to the implementation. Series are append-only from the
/// core's perspective and ordered by timestamp.
#[async_trait]
pub trait MetricStore: Send + Sync {
    /// Append records to a metric's series.
    async fn append(
        &self,
        metric: MetricIdentity,
        records: Vec<TimeSeriesRecord>,
    ) -> Result<(), StoreError>;

    /// The most recent record of a metric's series, if any.
    async fn latest(&self, metric: MetricIdentity) -> Result<Option<TimeSeriesRecord>, StoreError>;

    /// The full series for a metric, ordered by timestamp ascending.
    async fn series(&self, metric: MetricIdentity) -> Result<Vec<TimeSeriesRecord>, StoreError>;
}

/// In-memory [`MetricStore`] reference implementation.
#[derive(Debug, Default)]
pub struct MemoryMetricStore {
    inner: RwLock<HashMap<MetricIdentity, Vec<TimeSeriesRecord>>>,
}

impl MemoryMetricStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetricStore for MemoryMetricStore {
    async fn append(
        &self,
        metric: MetricIdentity,
        records: Vec<TimeSeriesRecord>,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let series = inner.entry(metric).or_default();
        series.extend(records);
        series.sort_by_key(|record| record.timestamp);
        Ok(())
    }

    async fn latest(&self, metric: MetricIdentity) -> Result<Option<TimeSeriesRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.get(&metric).and_then(|series| series.last().cloned()))
    }

    async fn series(&self, metric: MetricIdentity) -> Result<Vec<TimeSeriesRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.get(&metric).cloned().unwrap_or_default())
    }
}
