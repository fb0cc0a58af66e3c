use std::sync::Arc;

use futures_util::StreamExt;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Request, Response};
use tokio::time::Instant;
use tracing::warn;

use crate::domain::RequestSpec;
use crate::error::HttpError;
use crate::metrics::{MetricsAggregator, RequestOutcome};

/// Performs single attempts of the run's request and records every completed
/// exchange into the shared aggregator.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    client: Client,
    request: Arc<RequestSpec>,
    aggregator: Arc<MetricsAggregator>,
    expected_status_code: u16,
    run_start: Instant,
}

impl RequestExecutor {
    #[must_use]
    pub const fn new(
        client: Client,
        request: Arc<RequestSpec>,
        aggregator: Arc<MetricsAggregator>,
        expected_status_code: u16,
        run_start: Instant,
    ) -> Self {
        Self {
            client,
            request,
            aggregator,
            expected_status_code,
            run_start,
        }
    }

    /// Sends one request and records the outcome.
    ///
    /// Any HTTP response counts as a completed exchange, whatever its status.
    /// The latency covers dispatch through the end of the response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be built or fails before a
    /// response is obtained. Nothing is recorded in that case.
    pub async fn execute(&self) -> Result<RequestOutcome, HttpError> {
        let request = self.build_request()?;

        let started = Instant::now();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| HttpError::RequestFailed {
                verb: self.request.verb().to_owned(),
                url: self.request.url().to_string(),
                source: err,
            })?;
        let status = response.status().as_u16();
        if let Err(err) = drain_body(response).await {
            warn!(
                "Failed to read response body from {} {}: {}",
                self.request.verb(),
                self.request.url(),
                err
            );
        }
        let completed_at = Instant::now();
        let latency = completed_at.saturating_duration_since(started);

        let outcome = RequestOutcome::completed(
            latency,
            status == self.expected_status_code,
            self.run_start,
            completed_at,
        );
        self.aggregator.record(outcome);
        Ok(outcome)
    }

    fn build_request(&self) -> Result<Request, HttpError> {
        let mut builder = self
            .client
            .request(self.request.method().clone(), self.request.url().clone());
        if let Some(body) = self.request.body() {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body.to_vec());
        }
        if let Some(token) = self.request.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        builder
            .build()
            .map_err(|err| HttpError::BuildRequestFailed {
                verb: self.request.verb().to_owned(),
                url: self.request.url().to_string(),
                source: err,
            })
    }
}

async fn drain_body(response: Response) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        chunk?;
    }
    Ok(())
}
