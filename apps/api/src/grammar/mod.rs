//! Grammar-check collaborator, the single point of entry for LanguageTool
//! calls. Only the issue count is consumed; everything else in the check
//! response is ignored.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const CHECK_PATH: &str = "/v2/check";
const CHECK_LANGUAGE: &str = "en-US";

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<GrammarMatch>,
}

/// One detected issue. The API returns far more fields; only these are kept
/// for logging.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct GrammarMatch {
    message: String,
    offset: usize,
    length: usize,
}

/// LanguageTool HTTP client used by the critique handlers.
#[derive(Clone)]
pub struct GrammarClient {
    client: Client,
    base_url: String,
}

impl GrammarClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Counts the grammar issues LanguageTool reports for the given text.
    pub async fn issue_count(&self, text: &str) -> Result<usize, GrammarError> {
        let url = format!("{}{CHECK_PATH}", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[("text", text), ("language", CHECK_LANGUAGE)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GrammarError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let check: CheckResponse = response.json().await?;
        debug!("grammar check found {} issues", check.matches.len());
        Ok(check.matches.len())
    }
}

/// The one-line supplement appended after the rendered feedback.
pub fn grammar_line(count: usize) -> String {
    format!("**Grammar Issues Detected:** {count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_response_parses_matches() {
        let body = r#"{
            "software": {"name": "LanguageTool"},
            "matches": [
                {"message": "Possible typo", "offset": 3, "length": 4, "rule": {"id": "X"}},
                {"message": "Agreement error", "offset": 10, "length": 2}
            ]
        }"#;
        let check: CheckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(check.matches.len(), 2);
        assert_eq!(check.matches[0].message, "Possible typo");
    }

    #[test]
    fn test_check_response_tolerates_missing_matches() {
        let check: CheckResponse = serde_json::from_str("{}").unwrap();
        assert!(check.matches.is_empty());
    }

    #[test]
    fn test_grammar_line_format() {
        assert_eq!(grammar_line(3), "**Grammar Issues Detected:** 3");
        assert_eq!(grammar_line(0), "**Grammar Issues Detected:** 0");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GrammarClient::new("http://localhost:8010/".to_string());
        assert_eq!(client.base_url, "http://localhost:8010");
    }
}
