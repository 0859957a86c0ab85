use std::fmt;

// Failures that can occur while sending a response. These never reach the
// caller of the sender; they only end up in log lines.
#[derive(Debug)]
pub enum SendError {
    // The payload could not be marshaled to JSON.
    Encoding(serde_json::Error),
    // The status line or headers could not be written to the transport.
    Status(std::io::Error),
    // The body could not be written to the transport.
    Body(std::io::Error),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Encoding(err) => write!(f, "Failed JSON-encoding HTTP response: {err}"),
            SendError::Status(err) => write!(f, "Failed sending HTTP response status: {err}"),
            SendError::Body(err) => write!(f, "Failed sending HTTP response body: {err}"),
        }
    }
}

impl std::error::Error for SendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SendError::Encoding(err) => Some(err),
            SendError::Status(err) | SendError::Body(err) => Some(err),
        }
    }
}
