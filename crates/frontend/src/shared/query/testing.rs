//! Test doubles for the transport and the clock.

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::shared::http::{Clock, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    calls: RefCell<Vec<HttpRequest>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_string())));
    }

    /// The next request waits until the sender fires.
    pub fn gate(&self, gate: oneshot::Receiver<()>) {
        *self.gate.borrow_mut() = Some(gate);
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.url.clone()).collect()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push(request);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let next = self.responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}

/// Time only moves when told to; `sleep` advances it and returns at once.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<i64>,
    sleeps: RefCell<Vec<u32>>,
}

impl ManualClock {
    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }

    async fn sleep(&self, ms: u32) {
        self.sleeps.borrow_mut().push(ms);
        self.advance(i64::from(ms));
    }
}
