//! Résumé analysis core: chunked LLM extraction, report synthesis with
//! structural validation, bounded rate-limit retry, and a TTL result cache.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod document;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod retry;

pub use analysis::Analyzer;
pub use cache::ResultCache;
pub use config::Config;
pub use errors::AnalysisError;
pub use llm_client::{ChatClient, CompletionApi};
pub use models::extraction::{AnalysisRequest, ChunkExtraction};
pub use models::report::AnalysisReport;
pub use retry::RetryPolicy;
