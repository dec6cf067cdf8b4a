use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Model used for compliance analysis.
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures crossing the analysis-service boundary.
#[derive(Debug)]
pub enum AuditError {
    /// `GEMINI_API_KEY` is unset or empty.
    MissingCredential,
    Request(reqwest::Error),
    Status(reqwest::StatusCode),
    /// Response body did not contain any candidate text.
    MalformedResponse,
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => {
                write!(f, "{} environment variable is not set", API_KEY_ENV)
            }
            Self::Request(err) => write!(f, "analysis request failed: {err}"),
            Self::Status(status) => write!(f, "analysis service returned {status}"),
            Self::MalformedResponse => write!(f, "analysis response contained no text"),
        }
    }
}

impl std::error::Error for AuditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuditError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err)
    }
}

// Wire types for the generateContent endpoint.

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Blocking client for the Gemini generateContent API.
pub struct GeminiClient {
    api_key: String,
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, AuditError> {
        if api_key.is_empty() {
            return Err(AuditError::MissingCredential);
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { api_key, http })
    }

    /// Build a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, AuditError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| AuditError::MissingCredential)?;
        Self::new(api_key)
    }

    /// Send the prompt and return the concatenated candidate text.
    ///
    /// An empty string is a valid (if unhelpful) response and is returned
    /// as-is; the caller decides how to present it.
    pub fn generate(&self, prompt: &str) -> Result<String, AuditError> {
        let url = format!("{}/{}:generateContent", API_BASE, GEMINI_MODEL);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Status(status));
        }

        let parsed: GenerateContentResponse = response.json()?;
        extract_text(&parsed)
    }
}

fn extract_text(response: &GenerateContentResponse) -> Result<String, AuditError> {
    let candidate = response
        .candidates
        .first()
        .ok_or(AuditError::MalformedResponse)?;
    let content = candidate
        .content
        .as_ref()
        .ok_or(AuditError::MalformedResponse)?;

    let text: String = content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("");
    Ok(text)
}
