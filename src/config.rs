//! Configuration management for the spout.

use crate::{
    ConnectorError, ConnectorResult, InitialStreamPosition, PassThroughDecoder, RecordDecoder,
    Region,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default maximum number of records per fetch call
pub const DEFAULT_MAX_RECORDS_PER_FETCH: i64 = 10000;
/// Default checkpoint cadence
pub const DEFAULT_CHECKPOINT_INTERVAL_MILLIS: i64 = 60000;
/// Default path prefix for spout state in the checkpoint store
pub const DEFAULT_CHECKPOINT_STORE_PATH_PREFIX: &str = "kinesis_storm_spout";
/// Default checkpoint store session timeout
pub const DEFAULT_CHECKPOINT_STORE_SESSION_TIMEOUT_MILLIS: i64 = 10000;
/// Topology name used until the runtime reports its own
pub const DEFAULT_TOPOLOGY_NAME: &str = "UNNAMED_TOPOLOGY";

/// Spout configuration
///
/// # Structure
/// - **Fixed at construction**: `stream_name`, `checkpoint_store_connection_string`
/// - **Fluent, validated**: every `with_*` method, chainable with `?`
/// - **Late-bound**: `owning_topology_name`, set by the runtime via
///   [`set_owning_topology_name`](Self::set_owning_topology_name)
///
/// Build and tune it on one thread, then share it read-only (e.g. in an `Arc`).
///
/// # Example
///
/// ```rust
/// use kinesis_spout_core::{ConnectorConfig, InitialStreamPosition};
///
/// # fn main() -> kinesis_spout_core::ConnectorResult<()> {
/// let mut config = ConnectorConfig::new("clickstream", "localhost:2181");
/// config
///     .with_max_records_per_fetch(500)?
///     .with_checkpoint_interval_millis(30000)?
///     .with_initial_stream_position(InitialStreamPosition::TrimHorizon)?;
///
/// assert_eq!(config.max_records_per_fetch(), 500);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    stream_name: String,
    region: Region,
    max_records_per_fetch: i64,
    initial_position: InitialStreamPosition,
    checkpoint_interval_millis: i64,

    checkpoint_store_connection_string: String,
    checkpoint_store_path_prefix: String,
    checkpoint_store_session_timeout_millis: i64,

    record_decoder: Arc<dyn RecordDecoder>,

    // Set by the runtime once it knows which topology owns it.
    owning_topology_name: String,
}

impl ConnectorConfig {
    /// Create a configuration with every tunable field at its default
    ///
    /// Neither argument is checked; an empty stream name or connection string is
    /// accepted here and only surfaces when the runtime uses it.
    pub fn new(
        stream_name: impl Into<String>,
        checkpoint_store_connection_string: impl Into<String>,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            region: Region::DEFAULT,
            max_records_per_fetch: DEFAULT_MAX_RECORDS_PER_FETCH,
            initial_position: InitialStreamPosition::Latest,
            checkpoint_interval_millis: DEFAULT_CHECKPOINT_INTERVAL_MILLIS,
            checkpoint_store_connection_string: checkpoint_store_connection_string.into(),
            checkpoint_store_path_prefix: DEFAULT_CHECKPOINT_STORE_PATH_PREFIX.to_string(),
            checkpoint_store_session_timeout_millis:
                DEFAULT_CHECKPOINT_STORE_SESSION_TIMEOUT_MILLIS,
            record_decoder: Arc::new(PassThroughDecoder),
            owning_topology_name: DEFAULT_TOPOLOGY_NAME.to_string(),
        }
    }

    /// Create a configuration with every tunable field supplied
    ///
    /// # Arguments
    ///
    /// * `stream_name` - Name of the stream to read
    /// * `max_records_per_fetch` - Max records returned by a single fetch call
    /// * `initial_position` - Where to read from when a shard has no checkpoint
    /// * `checkpoint_store_path_prefix` - Path prefix for spout state in the store
    /// * `checkpoint_store_connection_string` - Store endpoint (e.g. `localhost:2181`)
    /// * `checkpoint_store_session_timeout_millis` - Store session timeout
    /// * `checkpoint_interval_millis` - Save checkpoints this often
    /// * `record_decoder` - Converts a raw record into tuples
    ///
    /// # Errors
    ///
    /// `ConnectorError::InvalidArgument` if any of the numeric arguments is not positive.
    #[allow(clippy::too_many_arguments)]
    pub fn with_settings(
        stream_name: impl Into<String>,
        max_records_per_fetch: i64,
        initial_position: InitialStreamPosition,
        checkpoint_store_path_prefix: impl Into<String>,
        checkpoint_store_connection_string: impl Into<String>,
        checkpoint_store_session_timeout_millis: i64,
        checkpoint_interval_millis: i64,
        record_decoder: Arc<dyn RecordDecoder>,
    ) -> ConnectorResult<Self> {
        check_value_is_positive(max_records_per_fetch, "maxRecordsPerFetch")?;
        check_value_is_positive(
            checkpoint_store_session_timeout_millis,
            "checkpointStoreSessionTimeoutMillis",
        )?;
        check_value_is_positive(checkpoint_interval_millis, "checkpointIntervalMillis")?;

        let config = Self {
            stream_name: stream_name.into(),
            region: Region::DEFAULT,
            max_records_per_fetch,
            initial_position,
            checkpoint_interval_millis,
            checkpoint_store_connection_string: checkpoint_store_connection_string.into(),
            checkpoint_store_path_prefix: checkpoint_store_path_prefix.into(),
            checkpoint_store_session_timeout_millis,
            record_decoder,
            owning_topology_name: DEFAULT_TOPOLOGY_NAME.to_string(),
        };
        debug!(
            stream = %config.stream_name,
            max_records_per_fetch,
            checkpoint_interval_millis,
            "built spout configuration"
        );
        Ok(config)
    }

    /// Build a configuration from a settings snapshot
    ///
    /// Goes through [`with_settings`](Self::with_settings), so the same positivity
    /// checks apply. The decoder is the default pass-through decoder.
    pub fn from_settings(settings: ConnectorSettings) -> ConnectorResult<Self> {
        if settings.stream_name.is_empty() {
            warn!("stream_name is empty");
        }
        if settings.checkpoint_store_connection_string.is_empty() {
            warn!("checkpoint_store_connection_string is empty");
        }

        let mut config = Self::with_settings(
            settings.stream_name,
            settings.max_records_per_fetch,
            settings.initial_position,
            settings.checkpoint_store_path_prefix,
            settings.checkpoint_store_connection_string,
            settings.checkpoint_store_session_timeout_millis,
            settings.checkpoint_interval_millis,
            Arc::new(PassThroughDecoder),
        )?;
        config.region = settings.region;
        config.owning_topology_name = settings.owning_topology_name;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ConnectorResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConnectorError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: ConnectorSettings = toml::from_str(&content).map_err(|e| {
            ConnectorError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_settings(settings)
    }

    /// Snapshot of every plain-data field (the decoder is not included)
    pub fn settings(&self) -> ConnectorSettings {
        ConnectorSettings {
            stream_name: self.stream_name.clone(),
            region: self.region,
            max_records_per_fetch: self.max_records_per_fetch,
            initial_position: self.initial_position,
            checkpoint_interval_millis: self.checkpoint_interval_millis,
            checkpoint_store_connection_string: self.checkpoint_store_connection_string.clone(),
            checkpoint_store_path_prefix: self.checkpoint_store_path_prefix.clone(),
            checkpoint_store_session_timeout_millis: self.checkpoint_store_session_timeout_millis,
            owning_topology_name: self.owning_topology_name.clone(),
        }
    }

    /// Validate the positivity invariants
    ///
    /// [`new`](Self::new) performs no checks at construction; call this after it
    /// when an explicit confirmation is wanted.
    pub fn validate(&self) -> ConnectorResult<()> {
        check_value_is_positive(self.max_records_per_fetch, "maxRecordsPerFetch")?;
        check_value_is_positive(
            self.checkpoint_store_session_timeout_millis,
            "checkpointStoreSessionTimeoutMillis",
        )?;
        check_value_is_positive(self.checkpoint_interval_millis, "checkpointIntervalMillis")
    }

    /// Decoder used to convert a stream record into tuples
    pub fn record_decoder(&self) -> &Arc<dyn RecordDecoder> {
        &self.record_decoder
    }

    /// Set the decoder used to convert a stream record into tuples
    pub fn with_record_decoder(
        &mut self,
        record_decoder: Arc<dyn RecordDecoder>,
    ) -> ConnectorResult<&mut Self> {
        debug!(decoder = ?record_decoder, "record decoder updated");
        self.record_decoder = record_decoder;
        Ok(self)
    }

    /// Path prefix used when storing spout state in the checkpoint store
    pub fn checkpoint_store_path_prefix(&self) -> &str {
        &self.checkpoint_store_path_prefix
    }

    /// Set the path prefix used when storing spout state
    pub fn with_checkpoint_store_path_prefix(
        &mut self,
        prefix: impl Into<String>,
    ) -> ConnectorResult<&mut Self> {
        self.checkpoint_store_path_prefix = prefix.into();
        debug!(
            prefix = %self.checkpoint_store_path_prefix,
            "checkpoint store path prefix updated"
        );
        Ok(self)
    }

    /// Checkpoint store endpoint
    pub fn checkpoint_store_connection_string(&self) -> &str {
        &self.checkpoint_store_connection_string
    }

    /// Checkpoint store session timeout in milliseconds
    pub fn checkpoint_store_session_timeout_millis(&self) -> i64 {
        self.checkpoint_store_session_timeout_millis
    }

    /// Checkpoint store session timeout
    pub fn checkpoint_store_session_timeout(&self) -> Duration {
        Duration::from_millis(self.checkpoint_store_session_timeout_millis.unsigned_abs())
    }

    /// Set the checkpoint store session timeout
    pub fn with_checkpoint_store_session_timeout_millis(
        &mut self,
        timeout_millis: i64,
    ) -> ConnectorResult<&mut Self> {
        check_value_is_positive(timeout_millis, "checkpointStoreSessionTimeoutMillis")?;
        self.checkpoint_store_session_timeout_millis = timeout_millis;
        debug!(timeout_millis, "checkpoint store session timeout updated");
        Ok(self)
    }

    /// Checkpoint interval in milliseconds (e.g. checkpoint every 30 seconds)
    pub fn checkpoint_interval_millis(&self) -> i64 {
        self.checkpoint_interval_millis
    }

    /// Checkpoint interval
    pub fn checkpoint_interval(&self) -> Duration {
        Duration::from_millis(self.checkpoint_interval_millis.unsigned_abs())
    }

    /// Save checkpoints this often
    pub fn with_checkpoint_interval_millis(
        &mut self,
        interval_millis: i64,
    ) -> ConnectorResult<&mut Self> {
        check_value_is_positive(interval_millis, "checkpointIntervalMillis")?;
        self.checkpoint_interval_millis = interval_millis;
        debug!(interval_millis, "checkpoint interval updated");
        Ok(self)
    }

    /// Name of the stream
    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }

    /// Name of the owning topology
    pub fn owning_topology_name(&self) -> &str {
        &self.owning_topology_name
    }

    /// Record the owning topology's name
    ///
    /// Called by the runtime once it learns its topology, before processing
    /// starts. No validation is applied.
    pub fn set_owning_topology_name(&mut self, topology_name: impl Into<String>) {
        self.owning_topology_name = topology_name.into();
        info!(
            topology = %self.owning_topology_name,
            stream = %self.stream_name,
            "owning topology set"
        );
    }

    /// Where reading starts when a shard has no checkpoint
    pub fn initial_position(&self) -> InitialStreamPosition {
        self.initial_position
    }

    /// Set where reading starts when a shard has no checkpoint
    pub fn with_initial_stream_position(
        &mut self,
        position: InitialStreamPosition,
    ) -> ConnectorResult<&mut Self> {
        self.initial_position = position;
        debug!(%position, "initial stream position updated");
        Ok(self)
    }

    /// Max records returned by a single fetch call
    pub fn max_records_per_fetch(&self) -> i64 {
        self.max_records_per_fetch
    }

    /// Set the max records returned by a single fetch call
    pub fn with_max_records_per_fetch(
        &mut self,
        max_records_per_fetch: i64,
    ) -> ConnectorResult<&mut Self> {
        check_value_is_positive(max_records_per_fetch, "maxRecordsPerFetch")?;
        self.max_records_per_fetch = max_records_per_fetch;
        debug!(max_records_per_fetch, "max records per fetch updated");
        Ok(self)
    }

    /// Region hosting the stream
    pub fn region(&self) -> Region {
        self.region
    }

    /// Set the region hosting the stream, defaults to [`Region::DEFAULT`]
    pub fn with_region(&mut self, region: Region) -> ConnectorResult<&mut Self> {
        self.region = region;
        debug!(%region, "region updated");
        Ok(self)
    }

    /// Set the region by name, e.g. `"eu-west-1"`
    ///
    /// # Errors
    ///
    /// `ConnectorError::InvalidArgument` for an empty or unknown name; the
    /// current region is kept.
    pub fn with_region_name(&mut self, name: &str) -> ConnectorResult<&mut Self> {
        let region = name.parse::<Region>()?;
        self.with_region(region)
    }
}

fn check_value_is_positive(value: i64, name: &str) -> ConnectorResult<()> {
    if value <= 0 {
        return Err(ConnectorError::invalid_argument(format!(
            "Value of {} must be positive, but was {}",
            name, value
        )));
    }
    Ok(())
}

/// Plain-data view of a [`ConnectorConfig`]
///
/// Used to load a configuration from TOML and to export the current values.
/// Only `stream_name` and `checkpoint_store_connection_string` are mandatory
/// in a file; everything else falls back to the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorSettings {
    /// Name of the stream (mandatory)
    pub stream_name: String,

    /// Checkpoint store endpoint (mandatory)
    pub checkpoint_store_connection_string: String,

    /// Region hosting the stream
    #[serde(default)]
    pub region: Region,

    /// Max records returned by a single fetch call
    #[serde(default = "default_max_records_per_fetch")]
    pub max_records_per_fetch: i64,

    /// Checkpoint cadence in milliseconds
    #[serde(default = "default_checkpoint_interval_millis")]
    pub checkpoint_interval_millis: i64,

    /// Path prefix for spout state in the checkpoint store
    #[serde(default = "default_checkpoint_store_path_prefix")]
    pub checkpoint_store_path_prefix: String,

    /// Checkpoint store session timeout in milliseconds
    #[serde(default = "default_checkpoint_store_session_timeout_millis")]
    pub checkpoint_store_session_timeout_millis: i64,

    /// Name of the owning topology
    #[serde(default = "default_owning_topology_name")]
    pub owning_topology_name: String,

    /// Where reading starts when a shard has no checkpoint
    #[serde(default)]
    pub initial_position: InitialStreamPosition,
}

fn default_max_records_per_fetch() -> i64 {
    DEFAULT_MAX_RECORDS_PER_FETCH
}
fn default_checkpoint_interval_millis() -> i64 {
    DEFAULT_CHECKPOINT_INTERVAL_MILLIS
}
fn default_checkpoint_store_path_prefix() -> String {
    DEFAULT_CHECKPOINT_STORE_PATH_PREFIX.to_string()
}
fn default_checkpoint_store_session_timeout_millis() -> i64 {
    DEFAULT_CHECKPOINT_STORE_SESSION_TIMEOUT_MILLIS
}
fn default_owning_topology_name() -> String {
    DEFAULT_TOPOLOGY_NAME.to_string()
}

impl ConnectorSettings {
    /// Serialize to a TOML document loadable by [`ConnectorConfig::from_file`]
    pub fn to_toml(&self) -> ConnectorResult<String> {
        Ok(toml::to_string(self)?)
    }
}
