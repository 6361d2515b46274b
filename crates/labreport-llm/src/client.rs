//! Blocking HTTP client for a local or remote completion endpoint.
//!
//! Speaks the Ollama-style `/api/generate` JSON contract. Enrichment failures
//! must never make a locally-built report unusable; callers treat every error
//! from here as "no enrichment available".

use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::enrichment::{parse_enrichment_output, EnrichedReport, EnrichmentError, EnrichmentResult};
use crate::prompts::{make_enrichment_prompt, SYSTEM_PROMPT};

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client for the enrichment completion endpoint.
pub struct EnrichmentClient {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
}

/// Request body for `/api/generate`.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response body from `/api/generate`.
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl EnrichmentClient {
    /// Create a client for the given endpoint and model.
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
        }
    }

    /// Client for a locally running endpoint on the standard port.
    pub fn default_local(model: &str) -> Self {
        Self::new("http://localhost:11434", model)
    }

    /// The model name being used.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the service to extract, interpret, and summarize the report text.
    pub fn enrich(&self, report_text: &str) -> EnrichmentResult<EnrichedReport> {
        let prompt = make_enrichment_prompt(report_text);
        let raw = self
            .generate(SYSTEM_PROMPT, &prompt)
            .map_err(|e| EnrichmentError::Service(format!("{:#}", e)))?;

        parse_enrichment_output(&raw)
    }

    fn generate(&self, system: &str, prompt: &str) -> anyhow::Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            system,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .with_context(|| format!("cannot reach enrichment endpoint at {}", self.base_url))?
            .error_for_status()
            .context("enrichment endpoint returned an error status")?;

        let parsed: GenerateResponse = response
            .json()
            .context("enrichment endpoint returned a malformed body")?;

        log::debug!(
            "enrichment endpoint returned {} bytes",
            parsed.response.len()
        );
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = EnrichmentClient::new("http://localhost:11434/", "medllama");
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.model(), "medllama");
    }

    #[test]
    fn test_default_local_uses_standard_port() {
        let client = EnrichmentClient::default_local("medllama");
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_unreachable_endpoint_reports_service_error() {
        // Port 9 (discard) is never an enrichment endpoint
        let client = EnrichmentClient::new("http://127.0.0.1:9", "medllama");
        let err = client.enrich("Hemoglobin: 13.5 g/dL").unwrap_err();
        assert!(matches!(err, EnrichmentError::Service(_)));
    }
}
