//! # Kinesis Spout Core
//!
//! Configuration core for a Kinesis stream spout.
//!
//! A spout reads records from the shards of a stream, decodes each one into
//! tuples for the processing topology that owns it, and periodically records its
//! progress per shard in a checkpoint store so it can resume after a restart.
//! This crate holds everything the spout needs to know before it starts: which
//! stream to read, how hard to fetch, where and how often to checkpoint, where to
//! start without a checkpoint, and how to decode records.
//!
//! ## Quick Start
//!
//! ```rust
//! use kinesis_spout_core::{ConnectorConfig, InitialStreamPosition, JsonRecordDecoder, Region};
//! use std::sync::Arc;
//!
//! # fn main() -> kinesis_spout_core::ConnectorResult<()> {
//! let mut config = ConnectorConfig::new("clickstream", "zk1:2181,zk2:2181");
//! config
//!     .with_region(Region::EuWest1)?
//!     .with_initial_stream_position(InitialStreamPosition::TrimHorizon)?
//!     .with_record_decoder(Arc::new(JsonRecordDecoder))?
//!     .with_checkpoint_interval_millis(30_000)?;
//!
//! // Later, once the runtime knows its topology:
//! config.set_owning_topology_name("clickstream-enrichment");
//!
//! let config = Arc::new(config); // frozen and shared from here on
//! assert_eq!(config.owning_topology_name(), "clickstream-enrichment");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Fail-fast validation**: non-positive counts and timeouts are rejected with
//!   `ConnectorError::InvalidArgument` at construction or mutation time
//! - **Fluent tuning**: `with_*` methods mutate in place and return the same instance
//! - **Pluggable decoding**: any [`RecordDecoder`] can be stored in the configuration
//! - **File-based configuration**: load the plain-data fields from TOML

mod config;
mod decoder;
mod error;
mod message;
mod position;
mod region;
mod traits;

// Re-export public API
pub use config::{
    ConnectorConfig, ConnectorSettings, DEFAULT_CHECKPOINT_INTERVAL_MILLIS,
    DEFAULT_CHECKPOINT_STORE_PATH_PREFIX, DEFAULT_CHECKPOINT_STORE_SESSION_TIMEOUT_MILLIS,
    DEFAULT_MAX_RECORDS_PER_FETCH, DEFAULT_TOPOLOGY_NAME,
};
pub use decoder::{JsonRecordDecoder, PassThroughDecoder};
pub use error::{ConnectorError, ConnectorResult};
pub use message::StreamRecord;
pub use position::InitialStreamPosition;
pub use region::Region;
pub use traits::{RecordDecoder, Tuple};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
