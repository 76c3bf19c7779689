//! Raw stream records handed to decoders.
//!
//! The fetch loop wraps every record returned by the stream in a [`StreamRecord`]
//! before passing it to the configured [`RecordDecoder`](crate::RecordDecoder).

mod stream_record;

pub use stream_record::StreamRecord;
