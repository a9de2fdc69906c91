// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Channel construction and caching.
//!
//! Endpoint URIs use the `grpc` scheme for plaintext transport and `grpcs`
//! for TLS with native roots; any other scheme is a configuration error,
//! fatal and never retried. Channels are built lazily (no I/O at connect
//! time) and cached by URI, so establishing one is idempotent and cheap to
//! repeat.

use std::collections::HashMap;
use std::sync::Mutex;

use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use url::Url;

use crate::config::HashscanConfig;
use crate::errors::ClientError;

/// Recognized plaintext scheme.
const SCHEME_PLAIN: &str = "grpc";
/// Recognized TLS scheme.
const SCHEME_TLS: &str = "grpcs";

/// Builds and caches channels keyed by endpoint URI.
///
/// Cloned [`Channel`]s share the underlying connection, so handing the same
/// cached channel to several clients multiplexes their calls over one
/// transport.
pub struct ChannelFactory {
    config: HashscanConfig,
    channels: Mutex<HashMap<String, Channel>>,
}

impl ChannelFactory {
    /// Create a factory with the given channel configuration.
    pub fn new(config: HashscanConfig) -> Self {
        Self {
            config,
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Obtain the channel for `uri`, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when the URI does not parse,
    /// carries an unrecognized scheme, or omits host or port.
    pub fn connect(&self, uri: &str) -> Result<Channel, ClientError> {
        if let Some(channel) = self.channels.lock().expect("channel cache poisoned").get(uri) {
            return Ok(channel.clone());
        }

        let channel = self.build(uri)?;
        self.channels
            .lock()
            .expect("channel cache poisoned")
            .insert(uri.to_owned(), channel.clone());
        Ok(channel)
    }

    fn build(&self, uri: &str) -> Result<Channel, ClientError> {
        let parsed = Url::parse(uri)
            .map_err(|e| ClientError::configuration(uri, format!("unparseable uri: {e}")))?;

        let tls = match parsed.scheme() {
            SCHEME_PLAIN => false,
            SCHEME_TLS => true,
            other => {
                return Err(ClientError::configuration(
                    uri,
                    format!("unsupported scheme {other:?}, expected {SCHEME_PLAIN:?} or {SCHEME_TLS:?}"),
                ))
            }
        };

        let host = parsed
            .host_str()
            .ok_or_else(|| ClientError::configuration(uri, "endpoint host is required"))?;
        let port = parsed
            .port()
            .ok_or_else(|| ClientError::configuration(uri, "endpoint port is required"))?;

        let transport_scheme = if tls { "https" } else { "http" };
        let mut endpoint = Endpoint::from_shared(format!("{transport_scheme}://{host}:{port}"))
            .map_err(|e| ClientError::configuration(uri, format!("invalid endpoint: {e}")))?
            .timeout(self.config.rpc_timeout)
            .connect_timeout(self.config.connect_timeout)
            .http2_keep_alive_interval(self.config.keep_alive_interval)
            .keep_alive_timeout(self.config.keep_alive_timeout)
            .keep_alive_while_idle(true)
            .tcp_keepalive(Some(self.config.tcp_keepalive));

        if tls {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(|e| ClientError::configuration(uri, format!("tls setup failed: {e}")))?;
        }

        Ok(endpoint.connect_lazy())
    }

    /// The configuration channels are built with.
    #[must_use]
    pub fn config(&self) -> &HashscanConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory() -> ChannelFactory {
        ChannelFactory::new(HashscanConfig::default())
    }

    #[tokio::test]
    async fn test_plaintext_scheme_accepted() {
        assert!(factory().connect("grpc://localhost:9090").is_ok());
    }

    #[tokio::test]
    async fn test_tls_scheme_accepted() {
        assert!(factory().connect("grpcs://rpc.example.com:443").is_ok());
    }

    #[test]
    fn test_unrecognized_scheme_is_configuration_error() {
        let err = factory().connect("https://localhost:9090").unwrap_err();
        match err {
            ClientError::Configuration { uri, detail } => {
                assert_eq!(uri, "https://localhost:9090");
                assert!(detail.contains("unsupported scheme"), "detail: {detail}");
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_port_is_configuration_error() {
        let err = factory().connect("grpc://localhost").unwrap_err();
        assert!(matches!(err, ClientError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_connect_is_idempotent() {
        let factory = factory();
        factory.connect("grpc://localhost:9090").unwrap();
        factory.connect("grpc://localhost:9090").unwrap();
        assert_eq!(factory.channels.lock().unwrap().len(), 1);
    }
}
