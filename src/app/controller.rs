//! Submission dispatch
//!
//! Runs the request on the app's tokio runtime and hands the result back to
//! the UI thread through a oneshot channel that is polled once per frame.

use crate::submission::SubmissionState;
use crate::transport::{self, TransportError};
use crate::types::*;
use tokio::sync::oneshot;
use tracing::{debug, info};
use url::Url;

pub struct SubmissionController {
    state: SubmissionState,
    client: reqwest::Client,
    endpoint: Url,
    pending: Option<oneshot::Receiver<Result<(), TransportError>>>,
}

impl SubmissionController {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self {
            state: SubmissionState::new(),
            client,
            endpoint,
            pending: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Backing values of the form controls
    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.state.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Validate the current fields and, if they pass, spawn the request.
    /// `on_settled` runs on the runtime once the result is ready to poll.
    /// Returns whether a request was dispatched.
    pub fn submit<F>(&mut self, runtime: &tokio::runtime::Handle, on_settled: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let Some(submission) = self.state.begin() else {
            return false;
        };

        info!(
            name_len = submission.name.len(),
            message_len = submission.message.len(),
            "Sending contact form"
        );

        let url = submission.url(&self.endpoint);
        let client = self.client.clone();
        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);

        runtime.spawn(async move {
            let result = transport::send(&client, url).await;
            // Receiver is gone only if the window closed mid-request
            let _ = tx.send(result);
            on_settled();
        });

        true
    }

    /// Apply a finished request to the state. Returns true when something changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => Err(TransportError::Abandoned),
        };

        self.pending = None;
        self.state.settle(result);
        debug!(status = ?self.state.status(), "Submission settled");
        true
    }
}
