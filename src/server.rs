//! HTTP front end (hyper v1)
//!
//! Routes:
//! - `GET /numbers/{id}` → [`AggregateReport`](crate::service::AggregateReport) as JSON
//!
//! Unknown ids are rejected with 400 before the service is invoked. Each
//! request runs in its own task so a panicking handler is answered with 500
//! and the accept loop keeps serving.

use crate::config::ServiceConfig;
use crate::error::ServerError;
use crate::service::WindowService;
use crate::source::{Category, HttpNumberSource};
use crate::window::NumberWindow;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde::Serialize;
use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

const NUMBERS_PREFIX: &str = "/numbers/";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Build the service from configuration, bind and serve until `shutdown` resolves.
pub async fn run<F>(config: ServiceConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()>,
{
    let source = HttpNumberSource::new(config.providers.clone(), config.fetch_timeout)?;
    let service = Arc::new(WindowService::new(
        Arc::new(source),
        NumberWindow::new(config.window_size),
    ));

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    log::info!("Server running on {}", listener.local_addr()?);

    serve(listener, service, shutdown).await
}

/// Accept loop. Connection-level errors are logged and never end the loop.
pub async fn serve<F>(
    listener: TcpListener,
    service: Arc<WindowService>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                log::info!("Shutdown requested, closing listener");
                return Ok(());
            }
            accepted = listener.accept() => {
                let (socket, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        log::warn!("Failed to accept connection: {}", e);
                        tokio::time::sleep(Duration::from_millis(100)).await;
                        continue;
                    }
                };

                let io = TokioIo::new(socket);
                let service = service.clone();
                tokio::spawn(async move {
                    let svc = service_fn(move |req| dispatch(service.clone(), req));
                    if let Err(err) = http1::Builder::new().serve_connection(io, svc).await {
                        log::debug!("Error serving connection from {}: {:?}", peer, err);
                    }
                });
            }
        }
    }
}

async fn dispatch(
    service: Arc<WindowService>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let handler_path = path.clone();
    let task = tokio::spawn(async move { route(&service, &method, &handler_path).await });

    match task.await {
        Ok(response) => Ok(response),
        Err(err) => {
            log::error!("Handler for {} failed: {}", path, err);
            Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ))
        }
    }
}

/// Resolve a request to a response without touching the network layer.
async fn route(service: &WindowService, method: &Method, path: &str) -> Response<Full<Bytes>> {
    let Some(id) = numbers_id(path) else {
        return error_response(StatusCode::NOT_FOUND, "Not Found");
    };

    if *method != Method::GET {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    }

    match Category::from_id(id) {
        Some(category) => {
            let report = service.handle(category).await;
            json_response(StatusCode::OK, &report)
        }
        None => {
            log::warn!("Invalid ID provided: {}", id);
            error_response(StatusCode::BAD_REQUEST, "Invalid ID")
        }
    }
}

/// Path segment following `/numbers/`, allowing one trailing slash.
fn numbers_id(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(NUMBERS_PREFIX)?;
    let id = rest.strip_suffix('/').unwrap_or(rest);
    if id.is_empty() || id.contains('/') {
        None
    } else {
        Some(id)
    }
}

fn error_response(status: StatusCode, error: &'static str) -> Response<Full<Bytes>> {
    json_response(status, &ErrorBody { error })
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let (status, bytes) = match serde_json::to_vec(body) {
        Ok(bytes) => (status, bytes),
        Err(e) => {
            log::error!("Failed to encode response body: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"error":"Internal Server Error"}"#.to_vec(),
            )
        }
    };

    let mut response = Response::new(Full::new(Bytes::from(bytes)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
