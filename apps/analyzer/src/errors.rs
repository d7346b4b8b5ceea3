use thiserror::Error;

/// Lowest score the aggregation model is allowed to assign.
pub const MIN_SCORE: f64 = 60.0;
/// Highest score the aggregation model is allowed to assign.
pub const MAX_SCORE: f64 = 100.0;

/// Application-level error type for the analysis pipeline.
///
/// Every failure a caller of `Analyzer::analyze_resume` can observe is a
/// variant here. `RateLimited` is the only transient class — `RetryPolicy`
/// keys on it via `is_rate_limited()`; everything else is fatal to the
/// current analysis attempt.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("API key not configured. Set OPENAI_API_KEY before running an analysis.")]
    MissingCredentials,

    #[error("Rate limit exceeded")]
    RateLimited {
        /// Retry-After hint from the service, in seconds.
        retry_after: Option<u64>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned empty content")]
    EmptyCompletion,

    #[error("Failed to parse chunk extraction: {0}")]
    MalformedExtraction(String),

    #[error("Failed to parse analysis report: {0}")]
    MalformedReport(String),

    #[error("Invalid report: missing required field '{field}'")]
    IncompleteReport { field: &'static str },

    #[error("Invalid score {score}: must be between 60 and 100")]
    ScoreOutOfRange { score: f64 },

    #[error("Validation error: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AnalysisError {
    /// Whether this failure is the transient rate-limit class that
    /// `RetryPolicy` is allowed to retry.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AnalysisError::RateLimited { .. })
    }

    /// Numeric status code associated with the failure, where one exists.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AnalysisError::RateLimited { .. } => Some(429),
            AnalysisError::Api { status, .. } => Some(*status),
            AnalysisError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_is_the_only_retryable_class() {
        assert!(AnalysisError::RateLimited { retry_after: None }.is_rate_limited());
        assert!(!AnalysisError::MissingCredentials.is_rate_limited());
        assert!(!AnalysisError::EmptyCompletion.is_rate_limited());
        assert!(!AnalysisError::MalformedExtraction("x".into()).is_rate_limited());
        assert!(!AnalysisError::Api {
            status: 500,
            message: "boom".into()
        }
        .is_rate_limited());
    }

    #[test]
    fn test_status_code_for_rate_limited_is_429() {
        let err = AnalysisError::RateLimited {
            retry_after: Some(30),
        };
        assert_eq!(err.status_code(), Some(429));
    }

    #[test]
    fn test_status_code_carries_api_status() {
        let err = AnalysisError::Api {
            status: 503,
            message: "overloaded".into(),
        };
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn test_validation_errors_have_no_status() {
        assert_eq!(
            AnalysisError::IncompleteReport { field: "skills" }.status_code(),
            None
        );
        assert_eq!(
            AnalysisError::ScoreOutOfRange { score: 59.0 }.status_code(),
            None
        );
    }

    #[test]
    fn test_incomplete_report_message_names_the_field() {
        let err = AnalysisError::IncompleteReport {
            field: "competitorAnalysis",
        };
        assert!(err.to_string().contains("competitorAnalysis"));
    }
}
