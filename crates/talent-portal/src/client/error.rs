use reqwest::StatusCode;

/// Failure of a single upstream round trip.
///
/// `Transport` means no response was obtained. `Status` and `Decode` are protocol
/// failures: a response arrived but was not a usable success.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{context}: {status_text}")]
    Status {
        context: &'static str,
        status: StatusCode,
        status_text: String,
    },
    #[error("{context}: malformed response body ({source})")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("base URL '{base}' cannot carry an API path")]
    InvalidEndpoint { base: String },
}

impl ClientError {
    pub fn status(context: &'static str, status: StatusCode) -> Self {
        Self::Status {
            context,
            status,
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }

    /// HTTP status of a non-success response, if that is what failed.
    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Decode { .. })
    }
}
