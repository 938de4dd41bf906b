use crate::core::ParsedResult;
use crate::utils::error::{FetchError, Result};

pub const FAILURE_MESSAGE: &str =
    "One or more of the web links are not JSON formatted API endpoints.";

pub fn render_results(results: &[ParsedResult]) -> String {
    serde_json::to_string_pretty(results).unwrap_or_else(|e| {
        tracing::warn!("Falling back to compact output: {}", e);
        format!("{:?}", results)
    })
}

pub fn render_failure(error: &FetchError) -> String {
    format!("{}\nAnd so: {}", FAILURE_MESSAGE, error)
}

/// Prints the batch outcome: results on stdout, or one generic failure message on stderr.
pub fn present(outcome: &Result<Vec<ParsedResult>>) {
    match outcome {
        Ok(results) => {
            tracing::info!("✅ Fetched {} JSON documents", results.len());
            println!("{}", render_results(results));
        }
        Err(e) => {
            tracing::error!("❌ Batch fetch failed (Category: {:?})", e.category());
            tracing::debug!("Failing target: {} ({})", e.target(), e);
            eprintln!("{}", render_failure(e));
        }
    }
}
