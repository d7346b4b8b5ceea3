//! Input and per-chunk data models for the analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Immutable analysis input: the full résumé text and the target job title.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub document_text: String,
    pub job_title: String,
}

impl AnalysisRequest {
    /// Validates that neither input is blank. The document text is stored
    /// verbatim — chunking must reproduce it exactly, so no trimming here.
    pub fn new(
        document_text: impl Into<String>,
        job_title: impl Into<String>,
    ) -> Result<Self, AnalysisError> {
        let document_text = document_text.into();
        let job_title = job_title.into();

        if document_text.trim().is_empty() {
            return Err(AnalysisError::InvalidRequest(
                "document text must not be empty".to_string(),
            ));
        }
        if job_title.trim().is_empty() {
            return Err(AnalysisError::InvalidRequest(
                "job title must not be empty".to_string(),
            ));
        }

        Ok(Self {
            document_text,
            job_title,
        })
    }
}

/// Structured extraction returned by the model for one résumé chunk.
///
/// Deserialization is strict: a response missing any of the four arrays does
/// not match the extraction contract and is rejected upstream as
/// `MalformedExtraction`. Ephemeral — serialized into the aggregation
/// payload, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkExtraction {
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
}
