#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use client_api::api::identity::{TENANT_HEADER, USER_HEADER};
use client_api::downstream::{CallTimeouts, CoreClient, CoreMethod};
use client_api::{build_app, AppState};
use http_body_util::BodyExt;
use prost::Message;
use serde_json::Value;
use tonic::{Code, Status};
use tower::ServiceExt;

pub const TENANT_ID: &str = "tenant-1";
pub const USER_ID: &str = "user-1";

/// Canned reply for one method: an encoded response or a failure status.
#[derive(Clone)]
enum Canned {
    Response(Vec<u8>),
    Failure(Code, String),
}

/// In-memory [`CoreClient`] that records every request it receives and
/// answers from canned replies keyed by method name.
#[derive(Default)]
pub struct StubCore {
    replies: Mutex<HashMap<&'static str, Canned>>,
    calls: Mutex<Vec<(&'static str, Vec<u8>)>>,
    delay: Option<Duration>,
}

impl StubCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call sleeps this long before answering.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn respond<M: CoreMethod>(&self, response: M::Response) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .insert(M::NAME, Canned::Response(response.encode_to_vec()));
        self
    }

    pub fn fail<M: CoreMethod>(&self, code: Code, message: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .insert(M::NAME, Canned::Failure(code, message.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to<M: CoreMethod>(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| *name == M::NAME)
            .count()
    }

    /// Most recent request sent to `M`, decoded.
    pub fn last_request<M: CoreMethod>(&self) -> Option<M::Request> {
        let calls = self.calls.lock().unwrap();
        calls
            .iter()
            .rev()
            .find(|(name, _)| *name == M::NAME)
            .map(|(_, bytes)| M::Request::decode(bytes.as_slice()).unwrap())
    }
}

#[async_trait::async_trait]
impl CoreClient for StubCore {
    async fn unary<M: CoreMethod>(
        &self,
        request: M::Request,
        _budget: Duration,
    ) -> Result<M::Response, Status> {
        let canned = {
            self.calls
                .lock()
                .unwrap()
                .push((M::NAME, request.encode_to_vec()));
            self.replies.lock().unwrap().get(M::NAME).cloned()
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match canned {
            Some(Canned::Response(bytes)) => M::Response::decode(bytes.as_slice())
                .map_err(|e| Status::internal(format!("stub decode failed: {}", e))),
            Some(Canned::Failure(code, message)) => Err(Status::new(code, message)),
            None => Err(Status::unimplemented(format!("no stub reply for {}", M::NAME))),
        }
    }
}

pub fn state_with(stub: StubCore) -> AppState<StubCore> {
    AppState::new(stub, CallTimeouts::default())
}

pub fn app(state: &AppState<StubCore>) -> Router {
    build_app(state.clone())
}

/// Request carrying the identity headers the resolver expects.
pub fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(TENANT_HEADER, TENANT_ID)
        .header(USER_HEADER, USER_ID);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Same as [`request`] but with a raw, possibly invalid, body.
pub fn raw_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(TENANT_HEADER, TENANT_ID)
        .header(USER_HEADER, USER_ID)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let res = router.oneshot(request).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
