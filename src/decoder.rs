//! Built-in record decoders.

use crate::traits::Tuple;
use crate::{ConnectorError, ConnectorResult, RecordDecoder, StreamRecord};
use serde_json::{json, Value};

/// Default decoder: emits the partition key and the raw payload untouched
///
/// Produces exactly one tuple per record, `[partitionKey, record]`, where
/// `record` is `{"data": <base64>, "size": <bytes>}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughDecoder;

impl PassThroughDecoder {
    pub const FIELD_PARTITION_KEY: &'static str = "partitionKey";
    pub const FIELD_RECORD: &'static str = "record";
}

impl RecordDecoder for PassThroughDecoder {
    fn decode(&self, record: &StreamRecord) -> ConnectorResult<Vec<Tuple>> {
        let encoded =
            base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &record.data);
        Ok(vec![vec![
            json!(record.partition_key),
            json!({
                "data": encoded,
                "size": record.data.len()
            }),
        ]])
    }

    fn output_fields(&self) -> Vec<String> {
        vec![
            Self::FIELD_PARTITION_KEY.to_string(),
            Self::FIELD_RECORD.to_string(),
        ]
    }
}

/// Decoder for JSON payloads: emits `[partitionKey, <parsed document>]`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordDecoder;

impl RecordDecoder for JsonRecordDecoder {
    fn decode(&self, record: &StreamRecord) -> ConnectorResult<Vec<Tuple>> {
        let value: Value = serde_json::from_slice(&record.data).map_err(|e| {
            ConnectorError::invalid_data(
                format!("Record {} is not valid JSON: {}", record.sequence_number, e),
                record.data.clone(),
            )
        })?;
        Ok(vec![vec![json!(record.partition_key), value]])
    }

    fn output_fields(&self) -> Vec<String> {
        vec!["partitionKey".to_string(), "document".to_string()]
    }
}
