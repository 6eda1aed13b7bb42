use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use thiserror::Error;

pub const INVALID_COORDINATES: &str =
    "Latitude must be between -90 and 90, and longitude must be between -180 and 180.";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Every way a weather query can fail. Handlers return this and nothing else.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("{}", INVALID_COORDINATES)]
    Validation,

    #[error("upstream returned {status}: {message}")]
    UpstreamHttp { status: StatusCode, message: String },

    #[error("transport failure: {0}")]
    Transport(String),

    /// The detail is logged but never sent to the caller.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::UpstreamHttp { status, .. } => *status,
            Self::Transport(_) | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body text returned to the caller.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation => INVALID_COORDINATES,
            Self::UpstreamHttp { message, .. } => message,
            Self::Transport(message) => message,
            Self::Unexpected(_) => INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::UpstreamHttp { .. } => "upstream_http",
            Self::Transport(_) => "transport",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.message().to_string()).into_response()
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::UpstreamHttp {
                status,
                message: error.to_string(),
            };
        }

        if error.is_connect()
            || error.is_timeout()
            || error.is_request()
            || error.is_body()
            || error.is_redirect()
        {
            Self::Transport(error_chain(&error))
        } else {
            Self::Unexpected(error.to_string())
        }
    }
}

/// Joins an error with its `source()` chain, e.g.
/// "error sending request: client error (Connect): Connection refused".
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
