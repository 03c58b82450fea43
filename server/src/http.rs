//! Blocking `tiny_http` listener driving [`route`].

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::routes::{Reply, route};

/// A running server. Dropping the handle leaves the workers running;
/// call [`ServerHandle::shutdown`] to stop them.
pub struct ServerHandle {
    server: Arc<Server>,
    addr: SocketAddr,
    stopping: Arc<AtomicBool>,
    workers: Vec<JoinHandle<()>>,
}

impl ServerHandle {
    /// Address the listener is bound to (resolves port 0).
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Unblock every worker and wait for them to exit.
    pub fn shutdown(self) {
        self.stopping.store(true, Ordering::SeqCst);
        // Each unblock releases exactly one thread waiting in `recv`.
        for _ in &self.workers {
            self.server.unblock();
        }
        self.join();
    }

    /// Block until every worker exits.
    pub fn join(self) {
        for worker in self.workers {
            if worker.join().is_err() {
                tracing::error!("server worker panicked");
            }
        }
    }
}

/// Bind the listener and start `config.workers` threads serving it.
pub fn spawn(config: &ServerConfig) -> Result<ServerHandle> {
    config.validate()?;
    let bind_addr = config.bind_addr();
    let server = Server::http(bind_addr.as_str()).map_err(|source| ServerError::Bind {
        addr: bind_addr.clone(),
        source,
    })?;
    let addr = server
        .server_addr()
        .to_ip()
        .ok_or_else(|| ServerError::NotIp {
            addr: bind_addr.clone(),
        })?;
    tracing::info!("numsign server listening on http://{addr}");

    let server = Arc::new(server);
    let stopping = Arc::new(AtomicBool::new(false));
    let workers = (0..config.workers)
        .map(|id| {
            let server = Arc::clone(&server);
            let stopping = Arc::clone(&stopping);
            std::thread::Builder::new()
                .name(format!("numsign-http-{id}"))
                .spawn(move || worker_loop(&server, &stopping))
                .map_err(|e| ServerError::Bind {
                    addr: bind_addr.clone(),
                    source: Box::new(e),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ServerHandle {
        server,
        addr,
        stopping,
        workers,
    })
}

/// Bind and serve until the process exits.
pub fn serve(config: &ServerConfig) -> Result<()> {
    spawn(config)?.join();
    Ok(())
}

/// First delay after a failed `recv`.
const ACCEPT_BACKOFF_BASE: Duration = Duration::from_millis(10);

/// Upper bound on the delay between failed `recv` calls.
const ACCEPT_BACKOFF_MAX: Duration = Duration::from_secs(1);

/// Delay before retrying after `consecutive` failed `recv` calls in a row:
/// doubling from [`ACCEPT_BACKOFF_BASE`], capped at [`ACCEPT_BACKOFF_MAX`].
pub fn accept_backoff(consecutive: u32) -> Duration {
    if consecutive == 0 {
        return Duration::ZERO;
    }
    let factor = 1u32.checked_shl(consecutive - 1).unwrap_or(u32::MAX);
    ACCEPT_BACKOFF_BASE
        .checked_mul(factor)
        .map_or(ACCEPT_BACKOFF_MAX, |d| d.min(ACCEPT_BACKOFF_MAX))
}

fn worker_loop(server: &Server, stopping: &AtomicBool) {
    let mut consecutive_errors = 0u32;
    loop {
        match server.recv() {
            Ok(request) => {
                consecutive_errors = 0;
                handle(request);
            }
            Err(_) if stopping.load(Ordering::SeqCst) => break,
            Err(e) => {
                consecutive_errors = consecutive_errors.saturating_add(1);
                let delay = accept_backoff(consecutive_errors);
                tracing::warn!(
                    consecutive_errors,
                    "accept error: {e}; retrying in {}ms",
                    delay.as_millis()
                );
                std::thread::sleep(delay);
            }
        }
    }
}

fn handle(request: Request) {
    let method = request.method().to_string();
    let reply = route(&method, request.url());
    if let Err(e) = request.respond(into_response(reply)) {
        tracing::warn!("failed to send response: {e}");
    }
}

fn into_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    let mut headers = Vec::with_capacity(2);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        headers.push(header);
    }
    if let Some(allow) = reply.allow
        && let Ok(header) = Header::from_bytes(&b"Allow"[..], allow.as_bytes())
    {
        headers.push(header);
    }
    let body = reply.body.into_bytes();
    let len = body.len();
    Response::new(
        StatusCode(reply.status),
        headers,
        Cursor::new(body),
        Some(len),
        None,
    )
}
