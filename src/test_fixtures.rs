//! Shared test fixtures: a scripted HTTP client and a stepping clock.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::time::Clock;

/// HTTP client that replays scripted results in call order and records
/// every request it receives.
pub struct MockHttpClient {
    results: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    pub fn new(results: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every provider answers 200 with the given bodies, in order.
    pub fn returning_bodies(bodies: &[&str]) -> Self {
        Self::new(bodies.iter().map(|b| Ok(ok(b))).collect())
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for MockHttpClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Connection("no scripted response".into())))
    }
}

/// A 200 response with the given body.
pub fn ok(body: &str) -> HttpResponse {
    HttpResponse::new(http::StatusCode::OK, body.as_bytes().to_vec())
}

/// An empty response with the given status.
pub fn status(code: u16) -> HttpResponse {
    HttpResponse::new(http::StatusCode::from_u16(code).unwrap(), Vec::new())
}

/// Clock that moves forward by a fixed step every time it is read.
pub struct StepClock {
    base: Instant,
    step_millis: u64,
    reads: AtomicU64,
}

impl StepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            base: Instant::now(),
            step_millis: u64::try_from(step.as_millis()).unwrap(),
            reads: AtomicU64::new(0),
        }
    }

    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for StepClock {
    fn now(&self) -> Instant {
        let n = self.reads.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::from_millis(n * self.step_millis)
    }
}
