#![allow(dead_code)]

use async_trait::async_trait;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use numwindow::{Category, FetchOutcome, NumberSource, NumberWindow, SourceError};
use std::collections::{HashMap, VecDeque};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::net::TcpListener;

pub fn window(capacity: usize) -> NumberWindow {
    NumberWindow::new(NonZeroUsize::new(capacity).expect("positive capacity"))
}

/// Replays queued outcomes in order; an exhausted script fetches nothing.
#[derive(Default)]
pub struct ScriptedSource {
    outcomes: Mutex<VecDeque<FetchOutcome>>,
    calls: Mutex<Vec<Category>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_numbers(self, numbers: &[i64]) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(FetchOutcome::Fetched(numbers.to_vec()));
        self
    }

    pub fn push_failure(self, category: Category, error: SourceError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(FetchOutcome::Failed { category, error });
        self
    }

    pub fn calls(&self) -> Vec<Category> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NumberSource for ScriptedSource {
    async fn fetch(&self, category: Category) -> FetchOutcome {
        self.calls.lock().unwrap().push(category);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(FetchOutcome::Fetched(Vec::new()))
    }
}

/// Hands out `batch` fresh consecutive integers per call, yielding first so
/// concurrent callers interleave.
pub struct CountingSource {
    next: AtomicI64,
    batch: i64,
    pub fetches: AtomicUsize,
}

impl CountingSource {
    pub fn new(batch: i64) -> Self {
        Self {
            next: AtomicI64::new(1),
            batch,
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl NumberSource for CountingSource {
    async fn fetch(&self, _category: Category) -> FetchOutcome {
        tokio::task::yield_now().await;
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let start = self.next.fetch_add(self.batch, Ordering::SeqCst);
        FetchOutcome::Fetched((start..start + self.batch).collect())
    }
}

/// Panics on the first call, then behaves like an empty source.
#[derive(Default)]
pub struct PanicOnceSource {
    panicked: std::sync::atomic::AtomicBool,
}

#[async_trait]
impl NumberSource for PanicOnceSource {
    async fn fetch(&self, _category: Category) -> FetchOutcome {
        if !self.panicked.swap(true, Ordering::SeqCst) {
            panic!("provider exploded");
        }
        FetchOutcome::Fetched(vec![42])
    }
}

/// Canned reply served by [`spawn_provider`]
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubReply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(body: &str, delay: Duration) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay,
        }
    }
}

/// Local provider answering by request path; unknown paths get 404.
pub async fn spawn_provider(routes: Vec<(&str, StubReply)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: std::sync::Arc<HashMap<String, StubReply>> = std::sync::Arc::new(
        routes
            .into_iter()
            .map(|(path, reply)| (path.to_string(), reply))
            .collect(),
    );

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let svc = service_fn(move |req: Request<Incoming>| {
                    let reply = routes
                        .get(req.uri().path())
                        .cloned()
                        .unwrap_or_else(|| StubReply::status(404, "not found"));
                    async move {
                        tokio::time::sleep(reply.delay).await;
                        let mut response = Response::new(Full::new(Bytes::from(reply.body)));
                        *response.status_mut() = StatusCode::from_u16(reply.status).unwrap();
                        Ok::<_, Infallible>(response)
                    }
                });
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(socket), svc)
                    .await;
            });
        }
    });

    addr
}
