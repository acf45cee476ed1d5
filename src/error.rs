//! Pipeline errors.

/// Message shown on the error banner while the input fails to parse.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format. Please check your input.";

/// Stable machine-readable code for an error, for hosts that map errors to UI.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The debounced text is not valid JSON. The parser detail is kept for
    /// logging; the user only ever sees [`INVALID_JSON_MESSAGE`].
    #[error("{}", INVALID_JSON_MESSAGE)]
    MalformedInput(#[from] serde_json::Error),
    /// The pipeline worker has stopped and no longer accepts events.
    #[error("pipeline closed")]
    Closed,
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "E_MALFORMED_INPUT",
            Self::Closed => "E_PIPELINE_CLOSED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_displays_fixed_message() {
        let parse = serde_json::from_str::<serde_json::Value>(r#"{"a": }"#).unwrap_err();
        let err = PipelineError::from(parse);
        assert_eq!(err.to_string(), INVALID_JSON_MESSAGE);
        assert_eq!(err.error_code(), "E_MALFORMED_INPUT");
    }

    #[test]
    fn closed_has_its_own_code() {
        assert_eq!(PipelineError::Closed.error_code(), "E_PIPELINE_CLOSED");
    }
}
