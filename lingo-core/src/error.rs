use thiserror::Error;

/// Failure of a remote service call. The screen treats every variant the
/// same way: show the message once and keep the previous display state.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[error("request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status. Authentication
    /// failures surface here as 401/403.
    #[error("{service} error {status}: {message}")]
    Service {
        service: &'static str,
        status: u16,
        message: String,
    },

    /// The response arrived but did not have the shape we expect.
    #[error("unexpected {service} response: {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },
}

impl ServiceError {
    pub fn transport(service: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { service, source }
    }

    pub fn malformed(service: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed {
            service,
            message: message.into(),
        }
    }

    /// Build a `Service` error from a non-success response body. Watson
    /// services report errors as `{"error": "...", "code": ...}`; fall back
    /// to a raw body snippet when the body is not JSON.
    pub fn from_body(service: &'static str, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("error_message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.len() > 200 {
                    format!("{}...", &trimmed[..200])
                } else {
                    trimmed.to_string()
                }
            });

        Self::Service {
            service,
            status,
            message,
        }
    }
}
