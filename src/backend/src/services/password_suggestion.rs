//! Password suggestion service
//!
//! Asks the text-generation provider for a strong password and checks the
//! answer against the `SuggestedPassword` contract.

use crate::gemini_client::TextGenerator;
use anyhow::{Context, Result, anyhow};
use log::debug;
use serde_json::{Value, json};
use serde_valid::Validate;
use wifi_connector_core::SuggestedPassword;

/// Instruction sent to the provider for every suggestion
pub const SUGGESTION_PROMPT: &str = "You are a password generator. Generate a strong password that is at least 12 characters long and includes a mix of uppercase letters, lowercase letters, numbers, and symbols. Do not include any easily guessable patterns or common words in your generated password. Return the password in the following JSON format: {\"password\": \"the_generated_password\"}";

/// Service for password suggestions
pub struct PasswordSuggestionService;

impl PasswordSuggestionService {
    /// Schema of the document the provider must return
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "password": {
                    "type": "STRING",
                    "description": "The generated strong password."
                }
            },
            "required": ["password"]
        })
    }

    /// Request one suggestion from `generator`
    ///
    /// Single attempt, no retries. Fails if the provider fails or its answer
    /// is not a JSON object with a non-empty `password`.
    pub async fn suggest<Generator>(generator: &Generator) -> Result<SuggestedPassword>
    where
        Generator: TextGenerator,
    {
        let text = generator
            .generate_json(SUGGESTION_PROMPT, &Self::response_schema())
            .await
            .context("failed to generate password")?;

        let suggested = Self::parse(&text)?;
        debug!(
            "received password suggestion ({} chars)",
            suggested.password.chars().count()
        );

        Ok(suggested)
    }

    fn parse(text: &str) -> Result<SuggestedPassword> {
        let suggested: SuggestedPassword = serde_json::from_str(strip_code_fence(text))
            .context("failed to parse suggested password")?;

        suggested
            .validate()
            .map_err(|e| anyhow!("failed to validate suggested password: {e}"))?;

        Ok(suggested)
    }
}

/// Some models wrap JSON answers in a markdown code fence
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(inner) = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    else {
        return trimmed;
    };

    inner.strip_suffix("```").unwrap_or(inner).trim()
}
