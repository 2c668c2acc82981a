// Error types for argument parsing and sending.
// The `Display` text of each variant is exactly what the CLI prints.

use thiserror::Error;

/// Problems with the command line, found before any I/O happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// Nothing to send.
    #[error("no arguments given")]
    NoArguments,

    /// `--photo` without a path after it.
    #[error("Error: Please provide image path")]
    MissingImagePath,
}

/// Reasons a send did not produce a JSON response.
#[derive(Debug, Error)]
pub enum SendError {
    /// The image could not be opened or read. No request was made.
    #[error("Error reading image: {0}")]
    ReadImage(#[from] std::io::Error),

    /// The server answered with a non-2xx status.
    #[error("Error {status}: {body}")]
    Http { status: u16, body: String },

    /// Anything else: connection failures, bad response bodies.
    #[error("Error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        SendError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_prints_status_and_raw_body() {
        let err = SendError::Http {
            status: 401,
            body: r#"{"error":"bad credentials"}"#.into(),
        };
        assert_eq!(err.to_string(), r#"Error 401: {"error":"bad credentials"}"#);
    }

    #[test]
    fn read_error_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SendError::from(io);
        assert_eq!(err.to_string(), "Error reading image: no such file");
    }
}
