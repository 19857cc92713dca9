//! Scripted in-memory gateway for orchestration tests.

use async_trait::async_trait;
use florarec_client::{GatewayError, RecommendRequest, RecommendationGateway};
use florarec_types::RawPlantRecord;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Gateway that replays a scripted queue of responses and records every
/// request it receives.
///
/// With [`MockGateway::held_by`], each call parks on the notify handle
/// until the test releases it, which makes in-flight submission races
/// reproducible.
pub struct MockGateway {
    responses: Mutex<VecDeque<Result<Vec<RawPlantRecord>, GatewayError>>>,
    calls: Mutex<Vec<RecommendRequest>>,
    hold: Option<Arc<Notify>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            hold: None,
        }
    }

    /// Queue one response; calls consume the queue front-first. When the
    /// queue is exhausted further calls answer with an empty result list.
    pub fn with_response(self, response: Result<Vec<RawPlantRecord>, GatewayError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Park every call on `notify` until the test fires `notify_one`.
    pub fn held_by(mut self, notify: Arc<Notify>) -> Self {
        self.hold = Some(notify);
        self
    }

    /// Requests received so far, in call order.
    pub fn calls(&self) -> Vec<RecommendRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecommendationGateway for MockGateway {
    async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> florarec_client::Result<Vec<RawPlantRecord>> {
        self.calls.lock().unwrap().push(request.clone());

        if let Some(notify) = &self.hold {
            notify.notified().await;
        }

        let scripted = self.responses.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| Ok(Vec::new()))
    }
}
