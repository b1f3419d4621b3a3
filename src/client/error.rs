/// Failure of a single client interaction.
///
/// Every variant is scoped to the request (or local check) that produced
/// it; none of them is fatal to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A required field was empty; no request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("not found: {}", .0.as_deref().unwrap_or("no message"))]
    NotFound(Option<String>),

    #[error("conflict: {}", .0.as_deref().unwrap_or("no message"))]
    Conflict(Option<String>),

    #[error("server answered {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// The server could not be reached.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a body that does not match the contract.
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// Build the error for a non-success status and its optional `error` text.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => ClientError::NotFound(message),
            409 => ClientError::Conflict(message),
            _ => ClientError::Server { status, message },
        }
    }

    /// The `error` field the server sent, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::NotFound(m) | ClientError::Conflict(m) => m.as_deref(),
            ClientError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::NotFound(_) => Some(404),
            ClientError::Conflict(_) => Some(409),
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text to show the user after `action` (e.g. `"save loadout"`) failed.
    pub fn user_message(&self, action: &str) -> String {
        if let ClientError::Validation(msg) = self {
            return msg.clone();
        }
        if let Some(msg) = self.server_message() {
            return format!("Error: {msg}");
        }
        match self {
            ClientError::Network(_) => "Network Error: Could not connect to the server.".to_string(),
            ClientError::Decode(_) => {
                format!("Something went wrong while trying to {action}. Please try again.")
            }
            other => match other.status() {
                Some(status) => format!("Server Error ({status}): Could not {action}."),
                None => format!("Something went wrong while trying to {action}. Please try again."),
            },
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
