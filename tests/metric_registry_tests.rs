//! Registry round-trips and metric store behavior through the public API.

mod helpers;

use anyhow::Result;

use hashscan::{
    MemoryMetricStore, MetricIdentity, MetricStore, Network, SamplingInterval, TimeSeriesData,
    TimeSeriesRecord, METRIC_REGISTRY,
};

#[test]
fn registry_covers_every_metric_exactly_once() {
    assert_eq!(METRIC_REGISTRY.len(), 6);
    for series in &METRIC_REGISTRY {
        assert_eq!(series.metric.series(), series);
        assert_eq!(series.metric.interval(), series.interval);
    }
}

#[test]
fn external_id_round_trips_on_both_networks() {
    for series in &METRIC_REGISTRY {
        assert_eq!(
            MetricIdentity::from_external_id(Network::Mainnet, series.mainnet_id),
            Some(series.metric)
        );
        assert_eq!(
            MetricIdentity::from_external_id(Network::Testnet, series.testnet_id),
            Some(series.metric)
        );
    }
}

#[test]
fn wallet_and_transaction_counts_sample_daily() {
    assert_eq!(
        MetricIdentity::UniqueWalletsCount.interval(),
        SamplingInterval::Daily
    );
    assert_eq!(
        MetricIdentity::DailyTransactionsCount.interval(),
        SamplingInterval::Daily
    );
    assert_eq!(
        MetricIdentity::HashPriceUsd.interval(),
        SamplingInterval::Hourly
    );
}

#[test]
fn time_series_data_serde_round_trip() -> Result<()> {
    let data = TimeSeriesData {
        ts_id: MetricIdentity::HashPriceUsd
            .external_id(Network::Mainnet)
            .to_owned(),
        records: vec![
            TimeSeriesRecord {
                timestamp: 1_700_000_000,
                value: "0.016".to_owned(),
            },
            TimeSeriesRecord {
                timestamp: 1_700_003_600,
                value: "0.017".to_owned(),
            },
        ],
    };

    let json = serde_json::to_string(&data)?;
    let parsed: TimeSeriesData = serde_json::from_str(&json)?;
    assert_eq!(parsed, data);
    Ok(())
}

#[tokio::test]
async fn store_appends_and_reads_back_ordered() -> Result<()> {
    helpers::init_tracing();
    let store = MemoryMetricStore::new();

    store
        .append(
            MetricIdentity::HashVolumeUsd,
            vec![
                TimeSeriesRecord {
                    timestamp: 1_700_003_600,
                    value: "120000".to_owned(),
                },
                TimeSeriesRecord {
                    timestamp: 1_700_000_000,
                    value: "80000".to_owned(),
                },
            ],
        )
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    let series = store
        .series(MetricIdentity::HashVolumeUsd)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    assert_eq!(series.len(), 2);
    assert!(series[0].timestamp < series[1].timestamp);

    let latest = store
        .latest(MetricIdentity::HashVolumeUsd)
        .await
        .map_err(|e| anyhow::anyhow!(e))?
        .expect("series is non-empty");
    assert_eq!(latest.value, "120000");

    // Other metrics stay untouched.
    assert!(store
        .latest(MetricIdentity::HashTvlUsd)
        .await
        .map_err(|e| anyhow::anyhow!(e))?
        .is_none());
    Ok(())
}
