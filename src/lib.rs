pub mod client;
pub mod config;
pub mod errors;
pub mod events;
pub mod metrics;
pub mod pricing;
pub mod proto;
pub mod status;

pub use client::{BlockClient, BlockSummary, ChannelFactory, NavClient, TransactionClient};
pub use config::{HashscanConfig, HashscanConfigBuilder};
pub use errors::{ClientError, HashscanError};
pub use metrics::{
    MemoryMetricStore, MetricIdentity, MetricSeries, MetricStore, Network, SamplingInterval,
    TimeSeriesData, TimeSeriesRecord, METRIC_REGISTRY,
};
pub use status::{classify, FailureKind, StatusOutcome};
