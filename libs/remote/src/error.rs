use thiserror::Error;

/// Normalized failure from a downstream service call.
///
/// - The remote answered with a non-2xx status: `Status` carries that
///   response's body verbatim.
/// - No response arrived at all (connect failure or the 5 s timeout):
///   `NoResponse` with a fixed message.
/// - Anything else local (request building, body decoding): `Other`.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote service responded with status {status}")]
    Status {
        status: u16,
        body: serde_json::Value,
    },

    #[error("No response received from server")]
    NoResponse,

    #[error("{0}")]
    Other(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            RemoteError::NoResponse
        } else {
            RemoteError::Other(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_response_message_is_fixed() {
        assert_eq!(
            RemoteError::NoResponse.to_string(),
            "No response received from server"
        );
    }

    #[test]
    fn test_status_error_keeps_body_verbatim() {
        let err = RemoteError::Status {
            status: 422,
            body: serde_json::json!({"message": "invalid order"}),
        };
        match err {
            RemoteError::Status { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body["message"], "invalid order");
            }
            _ => panic!("expected status error"),
        }
    }
}
