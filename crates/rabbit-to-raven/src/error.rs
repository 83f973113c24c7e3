use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RelayError {
    /// The broker answered the get request with something other than 200.
    FetchFailed { status: u16, body: String },
    /// The document store rejected a message. `stored` counts the messages
    /// that were accepted before this one.
    StoreFailed {
        status: u16,
        body: String,
        stored: usize,
    },
    /// The request or its response body never made it across the wire.
    Transport {
        context: String,
        details: String,
        stored: usize,
    },
    Decode {
        context: String,
        details: String,
        stored: usize,
    },
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::FetchFailed { status, body } => write!(f, "ERROR ({status}): {body}"),
            RelayError::StoreFailed { status, body, .. } => {
                write!(f, "ERROR ({status}): {body}")
            }
            RelayError::Transport { context, details, .. } => {
                write!(f, "Request failed in {context}: {details}")
            }
            RelayError::Decode { context, details, .. } => {
                write!(f, "Invalid payload in {context}: {details}")
            }
        }
    }
}

impl std::error::Error for RelayError {}

impl RelayError {
    /// Connection, protocol and body-read failures alike. reqwest flags a
    /// truncated body as a decode error, but no payload was ever parsed.
    pub fn from_reqwest_error(e: reqwest::Error, context: &str) -> Self {
        RelayError::Transport {
            context: context.to_string(),
            details: e.to_string(),
            stored: 0,
        }
    }

    pub fn from_serialization_error(e: impl fmt::Display, context: &str) -> Self {
        RelayError::Decode {
            context: context.to_string(),
            details: e.to_string(),
            stored: 0,
        }
    }

    /// Records how many messages were written before this failure.
    pub fn with_stored(mut self, count: usize) -> Self {
        match &mut self {
            RelayError::StoreFailed { stored, .. }
            | RelayError::Transport { stored, .. }
            | RelayError::Decode { stored, .. } => *stored = count,
            RelayError::FetchFailed { .. } => {}
        }
        self
    }

    /// HTTP status of a rejected request, if the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            RelayError::FetchFailed { status, .. } | RelayError::StoreFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Messages written before the run stopped.
    pub fn stored(&self) -> usize {
        match self {
            RelayError::StoreFailed { stored, .. }
            | RelayError::Transport { stored, .. }
            | RelayError::Decode { stored, .. } => *stored,
            RelayError::FetchFailed { .. } => 0,
        }
    }
}
