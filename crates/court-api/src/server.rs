//! `tiny_http` listener driving the [`Router`].
//!
//! `tiny_http` blocks on accept, so the request loop runs inside
//! `spawn_blocking` and enters the runtime with `Handle::block_on` for each
//! request. Requests are served one at a time.

use std::future::Future;
use std::io::Read;
use std::sync::Arc;

use tiny_http::{Header, Request, Response, Server};

use crate::error::ApiError;
use crate::query_string::split_target;
use crate::router::{ApiResponse, Router};

fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

fn respond(request: Request, response: &ApiResponse) {
    let text = if response.body.is_null() {
        String::new()
    } else {
        response.body.to_string()
    };
    let mut out = Response::from_string(text).with_status_code(response.status);
    let headers = [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
    ];
    for (name, value) in headers {
        if let Some(h) = header(name, value) {
            out.add_header(h);
        }
    }
    if let Err(e) = request.respond(out) {
        tracing::warn!(error = %e, "failed to write response");
    }
}

fn serve_one(router: &Router, runtime: &tokio::runtime::Handle, mut request: Request) {
    let method = request.method().as_str().to_uppercase();
    let target = request.url().to_string();
    let (path, query) = split_target(&target);

    let response = if method == "OPTIONS" {
        ApiResponse {
            status: 204,
            body: serde_json::Value::Null,
        }
    } else {
        let mut body = String::new();
        match request.as_reader().read_to_string(&mut body) {
            Ok(_) => runtime.block_on(router.handle(&method, path, query, &body)),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable request body");
                ApiResponse::error(400, &format!("Invalid note body: {e}"))
            }
        }
    };

    tracing::info!(method, path, status = response.status, "request");
    respond(request, &response);
}

/// Serve until `shutdown` resolves.
///
/// # Errors
///
/// Returns `ApiError::Bind` if the address cannot be bound, or
/// `ApiError::Server` if the accept loop panics.
pub async fn serve(
    router: Router,
    addr: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ApiError> {
    let server = Server::http(addr).map_err(|e| ApiError::Bind {
        addr: addr.to_string(),
        reason: e.to_string(),
    })?;
    let server = Arc::new(server);
    tracing::info!(addr, "courtside API listening");

    let stopper = Arc::clone(&server);
    tokio::spawn(async move {
        shutdown.await;
        tracing::info!("shutting down API server");
        stopper.unblock();
    });

    let runtime = tokio::runtime::Handle::current();
    tokio::task::spawn_blocking(move || {
        for request in server.incoming_requests() {
            serve_one(&router, &runtime, request);
        }
    })
    .await
    .map_err(|e| ApiError::Server(format!("spawn_blocking join: {e}")))
}
