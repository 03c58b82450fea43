//! Request routing, independent of the socket layer.

use numsign_core::{ClassifyError, check_input};
use serde::Serialize;

use crate::{NUMBER_PARAM, USAGE};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// `Allow` header value for both routes.
pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Message returned when `/check` is called without `number`.
pub const MISSING_NUMBER_MESSAGE: &str = "number parameter is required";

/// A transport-neutral HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    /// Value for an `Allow` header, set on 405 replies.
    pub allow: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct CheckBody<'a> {
    result: &'a str,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl Reply {
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: CONTENT_TYPE_TEXT,
            body: body.into(),
            allow: None,
        }
    }

    fn json<T: Serialize>(status: u16, body: &T) -> Self {
        Self {
            status,
            content_type: CONTENT_TYPE_JSON,
            body: serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string()),
            allow: None,
        }
    }

    pub fn result(result: &str) -> Self {
        Self::json(200, &CheckBody { result })
    }

    pub fn error(status: u16, error: &str) -> Self {
        Self::json(status, &ErrorBody { error })
    }
}

/// Route one request.
///
/// `url` is the request target as received: path plus optional query.
pub fn route(method: &str, url: &str) -> Reply {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    };

    // HEAD replies carry the GET body; tiny_http omits it on the wire.
    let reply = match (method, path) {
        ("GET" | "HEAD", "/") => Reply::text(200, USAGE),
        ("GET" | "HEAD", "/check") => check(query),
        ("OPTIONS", "/" | "/check") => Reply {
            allow: Some(ALLOWED_METHODS),
            ..Reply::text(200, "")
        },
        (_, "/" | "/check") => Reply {
            allow: Some(ALLOWED_METHODS),
            ..Reply::error(405, "method not allowed")
        },
        _ => Reply::error(404, "not found"),
    };

    tracing::debug!(method, path, status = reply.status, "handled request");
    reply
}

/// `GET /check`.
fn check(query: &str) -> Reply {
    // The first occurrence wins when the parameter is repeated.
    let number = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == NUMBER_PARAM)
        .map(|(_, value)| value.into_owned());

    match check_input(number.as_deref()) {
        Ok(classification) => Reply::result(&classification.message()),
        Err(err) => {
            tracing::debug!(code = err.code(), "rejected /check input");
            Reply::error(400, &error_message(&err))
        }
    }
}

fn error_message(err: &ClassifyError) -> String {
    match err {
        ClassifyError::MissingInput => MISSING_NUMBER_MESSAGE.to_string(),
        ClassifyError::InvalidNumber { .. } => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn body(reply: &Reply) -> serde_json::Value {
        serde_json::from_str(&reply.body).unwrap()
    }

    #[test]
    fn root_returns_usage_text() {
        let reply = route("GET", "/");
        assert_eq!(reply, Reply::text(200, "Use /check?number=VALUE"));
        assert_eq!(reply.content_type, CONTENT_TYPE_TEXT);
    }

    #[test]
    fn root_ignores_query() {
        assert_eq!(route("GET", "/?number=5").status, 200);
    }

    #[test]
    fn check_positive_integer() {
        let reply = route("GET", "/check?number=5");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, CONTENT_TYPE_JSON);
        assert_eq!(reply.body, r#"{"result":"5.0 is POSITIVE"}"#);
    }

    #[test]
    fn check_negative_fraction() {
        let reply = route("GET", "/check?number=-3.5");
        assert_eq!(reply.status, 200);
        assert_eq!(body(&reply), serde_json::json!({ "result": "-3.5 is NEGATIVE" }));
    }

    #[test]
    fn check_zero_and_negative_zero() {
        assert_eq!(
            body(&route("GET", "/check?number=0")),
            serde_json::json!({ "result": "0.0 is ZERO" })
        );
        assert_eq!(
            body(&route("GET", "/check?number=-0")),
            serde_json::json!({ "result": "-0.0 is ZERO" })
        );
    }

    #[test]
    fn check_nan_is_zero() {
        let reply = route("GET", "/check?number=nan");
        assert_eq!(reply.status, 200);
        assert_eq!(body(&reply), serde_json::json!({ "result": "nan is ZERO" }));
    }

    #[test]
    fn check_missing_parameter() {
        for url in ["/check", "/check?", "/check?value=5"] {
            let reply = route("GET", url);
            assert_eq!(reply.status, 400, "url {url}");
            assert_eq!(
                body(&reply),
                serde_json::json!({ "error": "number parameter is required" })
            );
        }
    }

    #[test]
    fn check_invalid_number() {
        for url in ["/check?number=abc", "/check?number=", "/check?number"] {
            let reply = route("GET", url);
            assert_eq!(reply.status, 400, "url {url}");
            assert_eq!(body(&reply), serde_json::json!({ "error": "invalid number" }));
        }
    }

    #[test]
    fn check_decodes_query_values() {
        // `+` decodes to a space, which is trimmed before parsing.
        let reply = route("GET", "/check?number=%2B7.25+");
        assert_eq!(body(&reply), serde_json::json!({ "result": "7.25 is POSITIVE" }));
    }

    #[test]
    fn check_first_parameter_wins() {
        let reply = route("GET", "/check?number=-1&number=1");
        assert_eq!(body(&reply), serde_json::json!({ "result": "-1.0 is NEGATIVE" }));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let reply = route("GET", "/nope");
        assert_eq!(reply.status, 404);
        assert_eq!(body(&reply), serde_json::json!({ "error": "not found" }));
    }

    #[test]
    fn head_is_answered_like_get() {
        assert_eq!(route("HEAD", "/check?number=5"), route("GET", "/check?number=5"));
        assert_eq!(route("HEAD", "/check").status, 400);
        assert_eq!(route("HEAD", "/"), Reply::text(200, USAGE));
    }

    #[test]
    fn options_lists_allowed_methods() {
        for path in ["/", "/check"] {
            let reply = route("OPTIONS", path);
            assert_eq!(reply.status, 200, "path {path}");
            assert_eq!(reply.allow, Some("GET, HEAD, OPTIONS"));
            assert_eq!(reply.body, "");
        }
        assert_eq!(route("OPTIONS", "/nope").status, 404);
    }

    #[test]
    fn check_renders_exponents() {
        assert_eq!(
            body(&route("GET", "/check?number=1e16")),
            serde_json::json!({ "result": "1e+16 is POSITIVE" })
        );
        assert_eq!(
            body(&route("GET", "/check?number=-1e-5")),
            serde_json::json!({ "result": "-1e-05 is NEGATIVE" })
        );
    }

    #[test]
    fn check_accepts_digit_separators() {
        assert_eq!(
            body(&route("GET", "/check?number=1_000")),
            serde_json::json!({ "result": "1000.0 is POSITIVE" })
        );
    }

    #[test]
    fn non_get_is_rejected() {
        let reply = route("POST", "/check?number=5");
        assert_eq!(reply.status, 405);
        assert_eq!(reply.allow, Some("GET, HEAD, OPTIONS"));
        assert_eq!(body(&reply), serde_json::json!({ "error": "method not allowed" }));
    }
}
