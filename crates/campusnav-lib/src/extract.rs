//! Natural-language extraction of routing fields through a language model.
//!
//! The model is asked to reply with strict JSON of the form
//! `{ "start": "...", "end": "...", "blocked_nodes": ["..."] }`. Replies that
//! cannot be understood degrade to [`Extraction::empty`] instead of failing;
//! the route planner then reports the missing endpoints.
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY`: API key sent with every request (required)
//! - `CAMPUSNAV_MODEL_URL`: override for the generateContent endpoint

use std::env;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_URL_ENV: &str = "CAMPUSNAV_MODEL_URL";
pub const DEFAULT_MODEL_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
const API_KEY_HEADER: &str = "X-goog-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fields pulled out of a routing query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    #[serde(default, deserialize_with = "lenient_string")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub blocked_nodes: Vec<String>,
}

impl Extraction {
    /// No start, no end, nothing blocked.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Anything that can turn a free-text query into an [`Extraction`].
pub trait LocationExtractor {
    fn extract(&self, query: &str) -> Result<Extraction>;
}

/// Extractor that always answers with the same fields.
#[derive(Debug, Clone, Default)]
pub struct StaticExtractor {
    extraction: Extraction,
}

impl StaticExtractor {
    pub fn new(extraction: Extraction) -> Self {
        Self { extraction }
    }
}

impl LocationExtractor for StaticExtractor {
    fn extract(&self, _query: &str) -> Result<Extraction> {
        Ok(self.extraction.clone())
    }
}

/// Connection settings for [`GeminiExtractor`].
#[derive(Clone)]
pub struct ExtractorConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl std::fmt::Debug for ExtractorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl ExtractorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_MODEL_URL.to_string(),
        }
    }

    /// Read `GEMINI_API_KEY` and the optional `CAMPUSNAV_MODEL_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey { var: API_KEY_ENV })?;

        let mut config = Self::new(api_key);
        if let Some(endpoint) = env::var(MODEL_URL_ENV).ok().filter(|url| !url.is_empty()) {
            debug!("using model endpoint from {}", MODEL_URL_ENV);
            config.endpoint = endpoint;
        }
        Ok(config)
    }
}

/// Extractor backed by the Gemini generateContent API.
#[derive(Debug, Clone)]
pub struct GeminiExtractor {
    client: Client,
    config: ExtractorConfig,
}

impl GeminiExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            config,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ExtractorConfig::from_env()?)
    }
}

impl LocationExtractor for GeminiExtractor {
    fn extract(&self, query: &str) -> Result<Extraction> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": build_prompt(query) } ] }
            ]
        });

        debug!(endpoint = %self.config.endpoint, "requesting extraction");
        let response = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()?
            .error_for_status()?;

        let payload: Value = response.json()?;
        Ok(extraction_from_response(&payload))
    }
}

fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(user_agent())
        .build()
        .map_err(Error::Http)
}

fn user_agent() -> String {
    format!("campusnav-lib/{version}", version = env!("CARGO_PKG_VERSION"))
}

/// Prompt asking the model for the three routing fields as JSON.
pub fn build_prompt(query: &str) -> String {
    format!(
        r#"
Extract the start location, end location, and any blocked locations from this sentence: "{query}".
Respond strictly in JSON format as:
{{ "start": "<start_location>", "end": "<end_location>", "blocked_nodes": ["<node1>", "<node2>"] }}
If there are no blocked nodes, respond with an empty list for "blocked_nodes".
"#
    )
}

/// Pull the model's text out of a generateContent response and parse it.
pub fn extraction_from_response(response: &Value) -> Extraction {
    match response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
    {
        Some(text) => parse_model_text(text),
        None => {
            warn!("model response did not contain any candidate text");
            Extraction::empty()
        }
    }
}

/// Parse the model's reply, tolerating a surrounding ```json fence.
pub fn parse_model_text(text: &str) -> Extraction {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim();
    }

    match serde_json::from_str::<Extraction>(text) {
        Ok(extraction) => extraction,
        Err(err) => {
            warn!(error = %err, "model reply was not valid extraction JSON");
            Extraction::empty()
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(value) => Some(value),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
