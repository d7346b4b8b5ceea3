use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_analyzer::analysis::Analyzer;
use resume_analyzer::cache::ResultCache;
use resume_analyzer::config::Config;
use resume_analyzer::document::extract_text;
use resume_analyzer::llm_client::ChatClient;
use resume_analyzer::models::extraction::AnalysisRequest;

/// Analyze a resume against a target job title.
#[derive(Debug, Parser)]
#[command(name = "resume-analyzer", version)]
struct Cli {
    /// Path to the resume (PDF or plain text).
    resume: PathBuf,

    /// Job title to analyze against.
    #[arg(long)]
    job_title: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (reads .env if present)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("resume-analyzer v{}", env!("CARGO_PKG_VERSION"));

    let document_text = extract_text(&cli.resume)?;
    let request = AnalysisRequest::new(document_text, cli.job_title)?;

    let client = ChatClient::with_base_url(
        config.openai_api_key.clone().unwrap_or_default(),
        config.openai_base_url.clone(),
    );
    let cache = Arc::new(ResultCache::new());
    let analyzer = Analyzer::new(Arc::new(client), cache);

    let on_progress = |percent: u8| info!("analysis progress: {percent}%");
    let report = analyzer
        .analyze_resume(&request, Some(&on_progress))
        .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
