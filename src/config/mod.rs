// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for hashscan's remote channels.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use hashscan::HashscanConfig;
//!
//! // 30s call deadline, 10s keep-alive
//! let config = HashscanConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use hashscan::HashscanConfigBuilder;
//! use std::time::Duration;
//!
//! let config = HashscanConfigBuilder::with_defaults()
//!     .rpc_timeout(Duration::from_secs(10))
//!     .keep_alive_interval(Duration::from_secs(15))
//!     .build();
//! ```

use std::time::Duration;

/// Configuration for remote channel construction and call deadlines.
///
/// Every remote call is bounded by `rpc_timeout`; exceeding it surfaces as
/// a protocol failure, never as a silent hang. Use
/// [`HashscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct HashscanConfig {
    /// Deadline applied to each remote call.
    /// Default: 30 seconds.
    pub rpc_timeout: Duration,

    /// Deadline for establishing the underlying connection.
    /// Default: 10 seconds.
    pub connect_timeout: Duration,

    /// HTTP/2 keep-alive ping interval.
    /// Default: 10 seconds.
    pub keep_alive_interval: Duration,

    /// How long to wait for a keep-alive ping acknowledgement.
    /// Default: 10 seconds.
    pub keep_alive_timeout: Duration,

    /// TCP-level keep-alive probe interval for idle connections.
    /// Default: 60 seconds.
    pub tcp_keepalive: Duration,
}

impl Default for HashscanConfig {
    fn default() -> Self {
        Self {
            rpc_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            keep_alive_interval: Duration::from_secs(10),
            keep_alive_timeout: Duration::from_secs(10),
            tcp_keepalive: Duration::from_secs(60),
        }
    }
}

/// Fluent builder for [`HashscanConfig`].
#[derive(Debug, Clone, Default)]
pub struct HashscanConfigBuilder {
    config: HashscanConfig,
}

impl HashscanConfigBuilder {
    /// Start from the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the per-call deadline.
    #[must_use]
    pub fn rpc_timeout(mut self, timeout: Duration) -> Self {
        self.config.rpc_timeout = timeout;
        self
    }

    /// Set the connection-establishment deadline.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the HTTP/2 keep-alive ping interval.
    #[must_use]
    pub fn keep_alive_interval(mut self, interval: Duration) -> Self {
        self.config.keep_alive_interval = interval;
        self
    }

    /// Set the keep-alive acknowledgement deadline.
    #[must_use]
    pub fn keep_alive_timeout(mut self, timeout: Duration) -> Self {
        self.config.keep_alive_timeout = timeout;
        self
    }

    /// Set the TCP keep-alive probe interval.
    #[must_use]
    pub fn tcp_keepalive(mut self, interval: Duration) -> Self {
        self.config.tcp_keepalive = interval;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> HashscanConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel_settings() {
        let config = HashscanConfig::default();
        assert_eq!(config.rpc_timeout, Duration::from_secs(30));
        assert_eq!(config.keep_alive_interval, Duration::from_secs(10));
        assert_eq!(config.keep_alive_timeout, Duration::from_secs(10));
        assert_eq!(config.tcp_keepalive, Duration::from_secs(60));
    }

    #[test]
    fn test_builder_overrides() {
        let config = HashscanConfigBuilder::with_defaults()
            .rpc_timeout(Duration::from_secs(5))
            .keep_alive_interval(Duration::from_secs(15))
            .keep_alive_timeout(Duration::from_secs(15))
            .build();
        assert_eq!(config.rpc_timeout, Duration::from_secs(5));
        assert_eq!(config.keep_alive_interval, Duration::from_secs(15));
        assert_eq!(config.keep_alive_timeout, Duration::from_secs(15));
        // Untouched fields keep their defaults.
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }
}
