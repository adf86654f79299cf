//! Test utilities for exercising operations without a network
//!
//! [`StubTransport`] records every call it receives and answers with a canned
//! envelope or a canned list of body chunks.

use crate::error::PlacesError;
use crate::types::{Envelope, Params, PhotoStream, Transport};
use std::sync::Mutex;

/// One recorded transport call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub path: String,
    pub params: Params,
    pub raw: bool,
}

/// In-memory [`Transport`] for unit tests
#[derive(Default)]
pub struct StubTransport {
    envelope: Option<Envelope>,
    chunks: Vec<&'static str>,
    fail_with_status: Option<&'static str>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    /// Answer every JSON call with `envelope`
    pub fn with_envelope(envelope: Envelope) -> Self {
        Self {
            envelope: Some(envelope),
            ..Default::default()
        }
    }

    /// Answer every raw call with these chunks, in order
    pub fn with_chunks(chunks: &[&'static str]) -> Self {
        Self {
            chunks: chunks.to_vec(),
            ..Default::default()
        }
    }

    /// Fail every call with an API error carrying `status`
    pub fn failing(status: &'static str) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The single call made so far; panics unless exactly one was made
    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn record(&self, path: &str, params: &Params, raw: bool) -> Result<(), PlacesError> {
        self.calls.lock().unwrap().push(RecordedCall {
            path: path.to_string(),
            params: params.clone(),
            raw,
        });
        match self.fail_with_status {
            Some(status) => Err(PlacesError::api(status, "stubbed failure")),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Transport for StubTransport {
    async fn get(&self, path: &str, params: &Params) -> Result<Envelope, PlacesError> {
        self.record(path, params, false)?;
        Ok(self.envelope.clone().unwrap_or(Envelope::Null))
    }

    async fn get_raw(&self, path: &str, params: &Params) -> Result<PhotoStream, PlacesError> {
        self.record(path, params, true)?;
        let chunks: Vec<Result<bytes::Bytes, PlacesError>> = self
            .chunks
            .iter()
            .map(|chunk| Ok(bytes::Bytes::from_static(chunk.as_bytes())))
            .collect();
        Ok(Box::pin(futures::stream::iter(chunks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_stub_records_calls() {
        let stub = StubTransport::with_envelope(json!({"status": "OK"}));
        let mut params = Params::new();
        params.insert("input", "pizza");

        let envelope = stub.get("/some/path", &params).await.unwrap();
        assert_eq!(envelope, json!({"status": "OK"}));

        let call = stub.only_call();
        assert_eq!(call.path, "/some/path");
        assert_eq!(call.params, params);
        assert!(!call.raw);
    }

    #[tokio::test]
    async fn test_stub_streams_chunks() {
        let stub = StubTransport::with_chunks(&["ab", "cd"]);
        let stream = stub.get_raw("/photo", &Params::new()).await.unwrap();
        let chunks: Vec<_> = stream.collect().await;

        assert_eq!(chunks.len(), 2);
        assert_eq!(&chunks[1].as_ref().unwrap()[..], b"cd");
        assert!(stub.only_call().raw);
    }

    #[tokio::test]
    async fn test_stub_failure() {
        let stub = StubTransport::failing("OVER_QUERY_LIMIT");
        let err = stub.get("/x", &Params::new()).await.unwrap_err();
        assert!(matches!(err, PlacesError::Api { status, .. } if status == "OVER_QUERY_LIMIT"));
    }
}
