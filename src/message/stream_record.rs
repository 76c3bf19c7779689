//! StreamRecord - one raw record read from a shard

use crate::{ConnectorError, ConnectorResult};
use serde::Serialize;

/// Record read from a stream shard, before decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamRecord {
    /// Key the producer used to route the record to its shard
    pub partition_key: String,
    /// Shard-unique, increasing sequence number
    pub sequence_number: String,
    /// Opaque record payload
    pub data: Vec<u8>,
    /// Approximate time the stream accepted the record (epoch millis)
    pub approximate_arrival_timestamp: Option<u64>,
}

impl StreamRecord {
    /// Create a new StreamRecord
    pub fn new(
        partition_key: impl Into<String>,
        sequence_number: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            partition_key: partition_key.into(),
            sequence_number: sequence_number.into(),
            data: data.into(),
            approximate_arrival_timestamp: None,
        }
    }

    /// Set the approximate arrival timestamp
    pub fn with_arrival_timestamp(mut self, timestamp_millis: u64) -> Self {
        self.approximate_arrival_timestamp = Some(timestamp_millis);
        self
    }

    /// Get the payload as a byte slice
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the payload as UTF-8 text
    pub fn data_as_str(&self) -> ConnectorResult<&str> {
        std::str::from_utf8(&self.data).map_err(|e| {
            ConnectorError::invalid_data(
                format!("Record {} is not valid UTF-8: {}", self.sequence_number, e),
                self.data.clone(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_record_basic() {
        let record = StreamRecord::new("user-1", "49590338271490256608", b"hello".to_vec());

        assert_eq!(record.partition_key, "user-1");
        assert_eq!(record.data(), b"hello");
        assert!(record.approximate_arrival_timestamp.is_none());
        assert_eq!(record.data_as_str().unwrap(), "hello");
    }

    #[test]
    fn test_stream_record_arrival_timestamp() {
        let record = StreamRecord::new("k", "1", "v").with_arrival_timestamp(1_700_000_000_000);
        assert_eq!(record.approximate_arrival_timestamp, Some(1_700_000_000_000));
    }

    #[test]
    fn test_stream_record_invalid_utf8() {
        let record = StreamRecord::new("k", "7", vec![0xff, 0xfe]);
        let err = record.data_as_str().unwrap_err();

        assert!(err.is_invalid_data());
        if let ConnectorError::InvalidData { payload, .. } = err {
            assert_eq!(payload, vec![0xff, 0xfe]);
        }
    }
}
