use crate::error::PlacesError;
use crate::types::{Envelope, Params, PhotoStream, Transport};
use futures::Stream;
use metrics::{counter, histogram};

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

/// Photo download metrics collector
#[derive(Debug, Clone)]
pub struct TransferMetrics {
    pub start_time: Instant,
    pub first_byte_latency: Option<Duration>,
    pub total_bytes: usize,
    pub total_chunks: usize,
    pub path: String,
    finalized: bool,
}

impl TransferMetrics {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            first_byte_latency: None,
            total_bytes: 0,
            total_chunks: 0,
            path: path.into(),
            finalized: false,
        }
    }

    pub fn record_chunk(&mut self, len: usize) {
        if self.first_byte_latency.is_none() {
            let latency = self.start_time.elapsed();
            self.first_byte_latency = Some(latency);

            histogram!(
                "places_photo_first_byte_latency_ms",
                "path" => self.path.clone()
            )
            .record(latency.as_millis() as f64);

            log::debug!("First photo byte received after {:?}", latency);
        }

        self.total_bytes += len;
        self.total_chunks += 1;
    }

    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;

        let total_duration = self.start_time.elapsed();
        histogram!("places_photo_bytes", "path" => self.path.clone())
            .record(self.total_bytes as f64);
        counter!("places_photo_downloads_total", "path" => self.path.clone()).increment(1);

        log::debug!(
            "Photo transfer completed: {} bytes in {} chunks over {:?}",
            self.total_bytes,
            self.total_chunks,
            total_duration
        );
    }
}

/// Wrapper stream that records transfer metrics as chunks pass through
pub struct PhotoMetricsStream<S> {
    inner: S,
    metrics: TransferMetrics,
}

impl<S> PhotoMetricsStream<S> {
    pub fn new(inner: S, path: impl Into<String>) -> Self {
        Self {
            inner,
            metrics: TransferMetrics::new(path),
        }
    }

    pub fn metrics(&self) -> &TransferMetrics {
        &self.metrics
    }
}

impl<S> Stream for PhotoMetricsStream<S>
where
    S: Stream<Item = Result<bytes::Bytes, PlacesError>> + Unpin,
{
    type Item = Result<bytes::Bytes, PlacesError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(Ok(chunk))) => {
                self.metrics.record_chunk(chunk.len());
                Poll::Ready(Some(Ok(chunk)))
            }
            Poll::Ready(Some(Err(e))) => {
                counter!(
                    "places_photo_errors_total",
                    "path" => self.metrics.path.clone()
                )
                .increment(1);
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                self.metrics.finalize();
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Middleware configuration for a wrapped transport
#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    pub enable_logging: bool,
    pub enable_metrics: bool,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            enable_metrics: false,
        }
    }
}

/// Transport decorator that logs each request and optionally records metrics
pub struct LoggingTransport<T> {
    inner: T,
    config: MiddlewareConfig,
}

impl<T: Transport> LoggingTransport<T> {
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, MiddlewareConfig::default())
    }

    pub fn with_config(inner: T, config: MiddlewareConfig) -> Self {
        Self { inner, config }
    }

    pub fn metrics(mut self) -> Self {
        self.config.enable_metrics = true;
        self
    }

    pub fn config(&self) -> &MiddlewareConfig {
        &self.config
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    fn before(&self, path: &str, params: &Params) {
        if self.config.enable_logging {
            log::debug!("Places request {} with {} params", path, params.len());
        }
    }

    fn after<R>(&self, path: &str, start: Instant, result: &Result<R, PlacesError>) {
        let elapsed = start.elapsed();
        match result {
            Ok(_) => {
                if self.config.enable_logging {
                    log::debug!("Places request {path} completed in {elapsed:?}");
                }
            }
            Err(error) => {
                if self.config.enable_logging {
                    log::debug!("Places request {path} failed after {elapsed:?}: {error}");
                }
                if self.config.enable_metrics {
                    counter!("places_request_errors_total", "path" => path.to_string())
                        .increment(1);
                }
            }
        }

        if self.config.enable_metrics {
            counter!("places_requests_total", "path" => path.to_string()).increment(1);
            histogram!("places_request_duration_ms", "path" => path.to_string())
                .record(elapsed.as_millis() as f64);
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> Transport for LoggingTransport<T> {
    async fn get(&self, path: &str, params: &Params) -> Result<Envelope, PlacesError> {
        let start = Instant::now();
        self.before(path, params);
        let result = self.inner.get(path, params).await;
        self.after(path, start, &result);
        result
    }

    async fn get_raw(&self, path: &str, params: &Params) -> Result<PhotoStream, PlacesError> {
        let start = Instant::now();
        self.before(path, params);
        let result = self.inner.get_raw(path, params).await;
        self.after(path, start, &result);

        let stream = result?;
        if self.config.enable_metrics {
            Ok(Box::pin(PhotoMetricsStream::new(stream, path)))
        } else {
            Ok(stream)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PhotoRequest, PlacesApi, TextSearchRequest};
    use crate::utils::test_helpers::StubTransport;
    use futures::StreamExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_logging_transport_passes_through() {
        let envelope = json!({"status": "OK", "results": []});
        let transport = LoggingTransport::new(StubTransport::with_envelope(envelope.clone()));

        let result = transport
            .places(&TextSearchRequest::new("library"))
            .await
            .unwrap();
        assert_eq!(result, envelope);
        assert_eq!(transport.inner().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_logging_transport_propagates_errors() {
        let transport = LoggingTransport::new(StubTransport::failing("UNKNOWN_ERROR")).metrics();

        let err = transport
            .places(&TextSearchRequest::new("library"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::Api { .. }));
    }

    #[tokio::test]
    async fn test_metrics_stream_counts_bytes() {
        let stub = StubTransport::with_chunks(&["abc", "defg"]);
        let inner = stub.get_raw("/maps/api/place/photo", &Params::new()).await.unwrap();
        let mut stream = PhotoMetricsStream::new(inner, "/maps/api/place/photo");

        while let Some(chunk) = stream.next().await {
            chunk.unwrap();
        }

        assert_eq!(stream.metrics().total_bytes, 7);
        assert_eq!(stream.metrics().total_chunks, 2);
        assert!(stream.metrics().first_byte_latency.is_some());
    }

    #[tokio::test]
    async fn test_metrics_enabled_photo_download() {
        let transport =
            LoggingTransport::new(StubTransport::with_chunks(&["img"])).metrics();

        let chunks: Vec<_> = transport
            .places_photo(&PhotoRequest::new("ref").max_width(100))
            .await
            .unwrap()
            .collect()
            .await;
        assert_eq!(chunks.len(), 1);
    }
}
