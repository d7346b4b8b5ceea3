//! Report synthesis — the aggregation LLM pass plus structural validation.
//!
//! All per-chunk extractions are serialized into one payload and sent in a
//! single call. The response is accepted only after the structural contract
//! holds: required top-level fields present, score inside [60, 100].

use anyhow::Context;
use serde_json::Value;
use tracing::info;

use crate::analysis::prompts::aggregation_system;
use crate::errors::{AnalysisError, MAX_SCORE, MIN_SCORE};
use crate::llm_client::{strip_json_fences, CompletionApi};
use crate::models::extraction::ChunkExtraction;
use crate::models::report::AnalysisReport;
use crate::retry::RetryPolicy;

const AGGREGATION_MAX_TOKENS: u32 = 2000;

/// Top-level fields every synthesized report must carry.
const REQUIRED_REPORT_FIELDS: [&str; 6] = [
    "overallScore",
    "improvements",
    "skills",
    "formatting",
    "impact",
    "competitorAnalysis",
];

/// Combines chunk extractions into one aggregation call and validates the
/// resulting report against the structural contract.
pub struct ReportSynthesizer<'a> {
    api: &'a dyn CompletionApi,
    retry: &'a RetryPolicy,
}

impl<'a> ReportSynthesizer<'a> {
    pub fn new(api: &'a dyn CompletionApi, retry: &'a RetryPolicy) -> Self {
        Self { api, retry }
    }

    pub async fn synthesize(
        &self,
        extractions: &[ChunkExtraction],
        job_title: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        let payload =
            serde_json::to_string(extractions).context("failed to serialize chunk extractions")?;
        let system = aggregation_system(job_title);

        info!(
            "synthesizing report from {} chunk extractions for '{job_title}'",
            extractions.len()
        );

        let content = self
            .retry
            .execute(|| self.api.complete(&system, &payload, AGGREGATION_MAX_TOKENS))
            .await?;

        let value: Value = serde_json::from_str(strip_json_fences(&content))
            .map_err(|e| AnalysisError::MalformedReport(e.to_string()))?;

        validate_report(value)
    }
}

/// Enforces the structural contract on a parsed report value.
///
/// Checks, in order: required top-level fields present and non-null, the
/// score is a number within [60, 100], then typed deserialization. Nothing
/// beyond shape and score bounds is validated — content quality is the
/// model's problem.
pub fn validate_report(value: Value) -> Result<AnalysisReport, AnalysisError> {
    for field in REQUIRED_REPORT_FIELDS {
        if value.get(field).map_or(true, Value::is_null) {
            return Err(AnalysisError::IncompleteReport { field });
        }
    }

    let score = value["overallScore"].as_f64().ok_or_else(|| {
        AnalysisError::MalformedReport("overallScore is not a number".to_string())
    })?;
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AnalysisError::ScoreOutOfRange { score });
    }

    serde_json::from_value(value).map_err(|e| AnalysisError::MalformedReport(e.to_string()))
}
