use crate::{config::ProviderConfig, http_client::handle_http_response};
use anyhow::{Context, Result, bail};
use log::debug;
#[cfg(feature = "mock")]
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trait_variant::make;

/// A hosted text-generation provider that answers with structured JSON
#[make(Send)]
#[cfg_attr(feature = "mock", automock)]
pub trait TextGenerator {
    /// Whether requests can be made at all (e.g. a credential is present)
    fn is_configured(&self) -> bool;

    /// Send `prompt` and return the generated JSON document as text.
    /// `schema` describes the expected document.
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn into_text(self) -> Result<String> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            bail!("failed to read provider response: no candidates");
        };

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            bail!(
                "failed to read provider response: no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            );
        }

        Ok(text)
    }
}

/// Client for the Gemini `generateContent` REST API
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: ProviderConfig,
}

impl GeminiClient {
    const API_KEY_HEADER: &str = "x-goog-api-key";

    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to create provider HTTP client")?;

        Ok(GeminiClient { client, config })
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

impl TextGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String> {
        let Some(api_key) = &self.config.api_key else {
            bail!("failed to call provider: no API key configured");
        };

        let url = self.build_url();
        debug!("POST {url}");

        let request = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        let res = self
            .client
            .post(&url)
            .header(Self::API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .context(format!("failed to send POST request to {url}"))?;

        let body = handle_http_response(res, &format!("POST {url}")).await?;

        serde_json::from_str::<GenerateContentResponse>(&body)
            .context("failed to parse provider response")?
            .into_text()
    }
}
