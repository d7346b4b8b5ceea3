//! Per-chunk extraction — the first LLM pass.
//!
//! Chunks are processed one at a time, in document order. Sequential issue
//! bounds the outbound request rate and keeps progress deterministic; the
//! aggregation pass only starts once every chunk has succeeded.

use tracing::{debug, info};

use crate::analysis::chunker::{split_into_chunks, CHUNK_SIZE};
use crate::analysis::progress::ProgressReporter;
use crate::analysis::prompts::extraction_system;
use crate::errors::AnalysisError;
use crate::llm_client::{strip_json_fences, CompletionApi};
use crate::models::extraction::ChunkExtraction;
use crate::retry::RetryPolicy;

const EXTRACTION_MAX_TOKENS: u32 = 500;

/// Splits a document into fixed-size segments and runs one extraction call
/// per segment through the retry policy.
pub struct ChunkAnalyzer<'a> {
    api: &'a dyn CompletionApi,
    retry: &'a RetryPolicy,
    chunk_size: usize,
}

impl<'a> ChunkAnalyzer<'a> {
    pub fn new(api: &'a dyn CompletionApi, retry: &'a RetryPolicy) -> Self {
        Self {
            api,
            retry,
            chunk_size: CHUNK_SIZE,
        }
    }

    #[cfg(test)]
    fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Extracts skills/achievements/experience/education from every chunk.
    ///
    /// Progress is reported as `round(100 * completed / total)` after each
    /// chunk completes. A response that does not parse as the extraction
    /// shape aborts the whole analysis — partial results are never kept.
    pub async fn analyze(
        &self,
        document_text: &str,
        job_title: &str,
        progress: &ProgressReporter<'_>,
    ) -> Result<Vec<ChunkExtraction>, AnalysisError> {
        let chunks = split_into_chunks(document_text, self.chunk_size);
        let total = chunks.len();
        info!("analyzing {total} chunks for '{job_title}'");

        let system = extraction_system(job_title);
        let mut extractions = Vec::with_capacity(total);

        for (index, chunk) in chunks.into_iter().enumerate() {
            let content = self
                .retry
                .execute(|| self.api.complete(&system, chunk, EXTRACTION_MAX_TOKENS))
                .await?;

            let extraction: ChunkExtraction =
                serde_json::from_str(strip_json_fences(&content))
                    .map_err(|e| AnalysisError::MalformedExtraction(e.to_string()))?;

            debug!(
                "chunk {}/{} extracted: {} skills, {} achievements",
                index + 1,
                total,
                extraction.skills.len(),
                extraction.achievements.len()
            );
            extractions.push(extraction);

            let percent = (((index + 1) as f64 / total as f64) * 100.0).round() as u8;
            progress.report(percent);
        }

        Ok(extractions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing::ScriptedApi;
    use std::sync::Mutex;

    fn extraction_json() -> String {
        r#"{"skills":["Rust"],"achievements":["Shipped"],"experience":["Acme"],"education":["BSc"]}"#
            .to_string()
    }

    #[tokio::test]
    async fn test_one_extraction_call_per_chunk_in_order() {
        let api = ScriptedApi::new(vec![
            Ok(extraction_json()),
            Ok(extraction_json()),
            Ok(extraction_json()),
        ]);
        let retry = RetryPolicy::default();
        let analyzer = ChunkAnalyzer::new(&api, &retry).with_chunk_size(10);
        let progress = ProgressReporter::new(None);

        // 25 chars → chunks of 10, 10, 5.
        let extractions = analyzer
            .analyze(&"x".repeat(25), "Engineer", &progress)
            .await
            .unwrap();

        assert_eq!(extractions.len(), 3);
        assert_eq!(api.calls(), 3);
        let users = api.user_messages();
        assert_eq!(users[0].len(), 10);
        assert_eq!(users[2].len(), 5);
    }

    #[tokio::test]
    async fn test_progress_is_reported_per_completed_chunk() {
        let api = ScriptedApi::new(vec![
            Ok(extraction_json()),
            Ok(extraction_json()),
            Ok(extraction_json()),
        ]);
        let retry = RetryPolicy::default();
        let analyzer = ChunkAnalyzer::new(&api, &retry).with_chunk_size(1000);

        let seen = Mutex::new(Vec::new());
        let cb = |p: u8| seen.lock().unwrap().push(p);
        let progress = ProgressReporter::new(Some(&cb));

        analyzer
            .analyze(&"x".repeat(2500), "Engineer", &progress)
            .await
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![33, 67, 100]);
    }

    #[tokio::test]
    async fn test_fenced_extraction_output_is_accepted() {
        let fenced = format!("```json\n{}\n```", extraction_json());
        let api = ScriptedApi::new(vec![Ok(fenced)]);
        let retry = RetryPolicy::default();
        let analyzer = ChunkAnalyzer::new(&api, &retry);
        let progress = ProgressReporter::new(None);

        let extractions = analyzer
            .analyze("short resume", "Engineer", &progress)
            .await
            .unwrap();

        assert_eq!(extractions[0].skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_unparsable_chunk_aborts_with_malformed_extraction() {
        let api = ScriptedApi::new(vec![
            Ok(extraction_json()),
            Ok("I could not process this section, sorry!".to_string()),
        ]);
        let retry = RetryPolicy::default();
        let analyzer = ChunkAnalyzer::new(&api, &retry).with_chunk_size(10);
        let progress = ProgressReporter::new(None);

        let result = analyzer
            .analyze(&"x".repeat(20), "Engineer", &progress)
            .await;

        assert!(matches!(
            result,
            Err(AnalysisError::MalformedExtraction(_))
        ));
    }

    #[tokio::test]
    async fn test_extraction_missing_field_is_malformed() {
        let api = ScriptedApi::new(vec![Ok(
            r#"{"skills":[],"achievements":[],"experience":[]}"#.to_string()
        )]);
        let retry = RetryPolicy::default();
        let analyzer = ChunkAnalyzer::new(&api, &retry);
        let progress = ProgressReporter::new(None);

        let result = analyzer.analyze("resume", "Engineer", &progress).await;

        assert!(matches!(
            result,
            Err(AnalysisError::MalformedExtraction(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limited_chunk_is_retried_not_failed() {
        let api = ScriptedApi::new(vec![
            Err(AnalysisError::RateLimited { retry_after: None }),
            Ok(extraction_json()),
        ]);
        let retry = RetryPolicy::default();
        let analyzer = ChunkAnalyzer::new(&api, &retry);
        let progress = ProgressReporter::new(None);

        let extractions = analyzer
            .analyze("resume", "Engineer", &progress)
            .await
            .unwrap();

        assert_eq!(extractions.len(), 1);
        assert_eq!(api.calls(), 2);
    }
}
