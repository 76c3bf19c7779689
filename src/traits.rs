//! Record decoder trait definition.
//!
//! A spout hands every raw [`StreamRecord`] it fetches to a `RecordDecoder`, which
//! turns it into the tuples emitted downstream. The configuration only stores the
//! decoder; it never invokes it.

use crate::{ConnectorResult, StreamRecord};
use serde_json::Value;
use std::fmt::Debug;

/// One output tuple, positionally matching [`RecordDecoder::output_fields`]
pub type Tuple = Vec<Value>;

/// Trait for converting raw stream records into topology tuples
///
/// # Example
///
/// ```rust
/// use kinesis_spout_core::{ConnectorResult, RecordDecoder, StreamRecord, Tuple};
/// use serde_json::json;
///
/// #[derive(Debug)]
/// struct LineDecoder;
///
/// impl RecordDecoder for LineDecoder {
///     fn decode(&self, record: &StreamRecord) -> ConnectorResult<Vec<Tuple>> {
///         Ok(record
///             .data_as_str()?
///             .lines()
///             .map(|line| vec![json!(line)])
///             .collect())
///     }
///
///     fn output_fields(&self) -> Vec<String> {
///         vec!["line".to_string()]
///     }
/// }
/// ```
pub trait RecordDecoder: Send + Sync + Debug {
    /// Decode one raw record into zero or more tuples
    ///
    /// # Errors
    ///
    /// Return `ConnectorError::InvalidData` when the payload cannot be interpreted.
    fn decode(&self, record: &StreamRecord) -> ConnectorResult<Vec<Tuple>>;

    /// Names of the tuple positions produced by `decode`
    fn output_fields(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct SplitDecoder;

    impl RecordDecoder for SplitDecoder {
        fn decode(&self, record: &StreamRecord) -> ConnectorResult<Vec<Tuple>> {
            Ok(record
                .data_as_str()?
                .split(',')
                .filter(|part| !part.is_empty())
                .map(|part| vec![json!(record.partition_key), json!(part)])
                .collect())
        }

        fn output_fields(&self) -> Vec<String> {
            vec!["key".to_string(), "item".to_string()]
        }
    }

    #[test]
    fn test_decoder_may_emit_many_or_none() {
        let decoder = SplitDecoder;

        let tuples = decoder.decode(&StreamRecord::new("k", "1", "a,b,c")).unwrap();
        assert_eq!(tuples.len(), 3);
        assert_eq!(tuples[1], vec![json!("k"), json!("b")]);

        let tuples = decoder.decode(&StreamRecord::new("k", "2", "")).unwrap();
        assert!(tuples.is_empty());
    }

    #[test]
    fn test_decoder_as_trait_object() {
        let decoder: Box<dyn RecordDecoder> = Box::new(SplitDecoder);
        assert_eq!(decoder.output_fields(), vec!["key", "item"]);
    }
}
