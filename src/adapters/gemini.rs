//! Google Gemini `generateContent` client for regulation lookups.

use crate::config::toml_config::ServiceConfig;
use crate::core::prompt::build_prompt;
use crate::domain::model::{GroundingSource, RegulationQuery, RegulationReport};
use crate::domain::ports::RegulationService;
use crate::utils::error::{GlobalDriveError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    search_grounding: bool,
}

/// Detailed failure, logged but never shown to the user.
#[derive(Error, Debug)]
enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(&'static str),
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &ServiceConfig, api_key: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(GlobalDriveError::MissingConfigError {
                field: "service.api_key".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GlobalDriveError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.to_string(),
            search_grounding: config.search_grounding,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint, self.model)
    }

    fn request_body(&self, prompt: String) -> GenerateContentRequest {
        let tools = if self.search_grounding {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };

        GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            tools,
        }
    }

    async fn generate(&self, prompt: String) -> std::result::Result<GenerateContentResponse, GeminiError> {
        let url = self.request_url();
        debug!(%url, grounding = self.search_grounding, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "generateContent response received");

        if !status.is_success() {
            return Err(GeminiError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Turns a raw response into markdown plus web sources.
fn parse_response(
    response: GenerateContentResponse,
) -> std::result::Result<(String, Vec<GroundingSource>), GeminiError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GeminiError::InvalidResponse("no candidates"))?;

    let markdown: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if markdown.trim().is_empty() {
        return Err(GeminiError::InvalidResponse("candidate has no text"));
    }

    let sources = candidate
        .grounding_metadata
        .map(|metadata| metadata.grounding_chunks)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|chunk| {
            let web = chunk.web?;
            match (web.uri, web.title) {
                (Some(uri), Some(title)) if !uri.is_empty() && !title.is_empty() => {
                    Some(GroundingSource { uri, title })
                }
                _ => None,
            }
        })
        .collect();

    Ok((markdown, sources))
}

#[async_trait]
impl RegulationService for GeminiClient {
    async fn fetch_regulations(&self, query: &RegulationQuery) -> Result<RegulationReport> {
        info!(model = %self.model, category = %query.category, "Fetching driving regulations");

        let prompt = build_prompt(query);
        let outcome = match self.generate(prompt).await {
            Ok(response) => parse_response(response),
            Err(e) => Err(e),
        };

        let (markdown, sources) = outcome.map_err(|e| {
            error!("Gemini API error: {}", e);
            GlobalDriveError::FetchFailed
        })?;

        Ok(RegulationReport {
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            category: query.category,
            markdown,
            sources,
            fetched_at: Utc::now(),
        })
    }
}
