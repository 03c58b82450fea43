//! `numsign-server` — HTTP adapter for sign classification.
//!
//! Serves two read-only endpoints over a blocking `tiny_http` listener:
//!
//! - `GET /` returns a plain-text usage hint.
//! - `GET /check?number=VALUE` returns `{"result": "<value> is <LABEL>"}` or a
//!   400 with `{"error": ...}`.
//!
//! Routing is a pure function ([`routes::route`]) so the HTTP contract can be
//! tested without sockets; [`http`] only moves bytes.

pub mod config;
pub mod error;
pub mod http;
pub mod routes;

pub use config::{ConfigOverrides, ServerConfig};
pub use error::{Result, ServerError};
pub use http::{ServerHandle, serve, spawn};
pub use routes::{Reply, route};

/// Body served at `/`.
pub const USAGE: &str = "Use /check?number=VALUE";

/// Query parameter read by `/check`.
pub const NUMBER_PARAM: &str = "number";
