//! Analysis orchestration — the public entry point of the crate.
//!
//! Flow: cache lookup → (hit: return) | (miss: credential check → chunked
//! extraction → report synthesis → validate → cache → return).
//!
//! One analysis is a sequential pipeline; independent analyses may run
//! concurrently and share only the result cache. Duplicate concurrent
//! identical requests may each miss and compute — last writer wins.

pub mod chunker;
pub mod extractor;
pub mod progress;
pub mod prompts;
pub mod synthesizer;

use std::sync::Arc;

use tracing::info;

use crate::cache::ResultCache;
use crate::errors::AnalysisError;
use crate::llm_client::CompletionApi;
use crate::models::extraction::AnalysisRequest;
use crate::models::report::AnalysisReport;
use crate::retry::RetryPolicy;

use self::extractor::ChunkAnalyzer;
use self::progress::{ProgressCallback, ProgressReporter};
use self::synthesizer::ReportSynthesizer;

/// Drives the full résumé analysis pipeline. Both collaborators are
/// injected: the completion backend (swappable for tests or relays) and the
/// result cache (shareable across analyzers, never a process global).
pub struct Analyzer {
    api: Arc<dyn CompletionApi>,
    cache: Arc<ResultCache>,
    retry: RetryPolicy,
}

impl Analyzer {
    pub fn new(api: Arc<dyn CompletionApi>, cache: Arc<ResultCache>) -> Self {
        Self {
            api,
            cache,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Analyzes a résumé against a target job title.
    ///
    /// On a cache hit the stored report is returned immediately — progress
    /// jumps straight to 100 and no network call is made, credentials or
    /// not. On a miss the pipeline runs to completion or fails without
    /// caching anything; the orchestrator adds no retry beyond what
    /// `RetryPolicy` already applies inside each stage.
    pub async fn analyze_resume(
        &self,
        request: &AnalysisRequest,
        on_progress: Option<ProgressCallback<'_>>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let progress = ProgressReporter::new(on_progress);

        if let Some(report) = self
            .cache
            .get(&request.document_text, &request.job_title)
        {
            info!("serving cached report for '{}'", request.job_title);
            progress.report(100);
            return Ok(report);
        }

        if !self.api.is_configured() {
            return Err(AnalysisError::MissingCredentials);
        }

        progress.report(0);

        let extractions = ChunkAnalyzer::new(self.api.as_ref(), &self.retry)
            .analyze(&request.document_text, &request.job_title, &progress)
            .await?;

        let report = ReportSynthesizer::new(self.api.as_ref(), &self.retry)
            .synthesize(&extractions, &request.job_title)
            .await?;

        self.cache
            .set(&request.document_text, &request.job_title, report.clone());
        progress.report(100);

        info!(
            "analysis complete for '{}': score {}",
            request.job_title, report.overall_score
        );

        Ok(report)
    }
}
