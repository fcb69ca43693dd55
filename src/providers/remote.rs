use std::time::Duration;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ProviderError;
use crate::providers::Translator;

/// JSON client for an HTTP translation endpoint
#[derive(Debug)]
pub struct RemoteTranslator {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL
    endpoint: String,
    /// API key for authentication, sent as a bearer token when non-empty
    api_key: String,
}

/// Request body for the translation endpoint
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// The source text to translate
    text: &'a str,

    /// Target language code
    target_language: &'a str,

    /// Source language hint
    #[serde(skip_serializing_if = "Option::is_none")]
    source_language: Option<&'a str>,
}

/// Response body from the translation endpoint
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// The translated text
    translated_text: String,
}

impl RemoteTranslator {
    /// Create a new client for a translation endpoint
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let endpoint = endpoint.into();

        Url::parse(&endpoint)
            .map_err(|e| ProviderError::ConnectionError(format!("Invalid endpoint URL: {}", e)))?;

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint,
            api_key: api_key.into(),
        })
    }

    fn request(&self) -> reqwest::RequestBuilder {
        let builder = self.client.post(&self.endpoint);
        if self.api_key.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.api_key)
        }
    }
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_hint: Option<&str>,
    ) -> Result<String, ProviderError> {
        let body = TranslateRequest {
            text,
            target_language,
            source_language: source_hint,
        };

        let response = self
            .request()
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Translation endpoint returned {}: {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(parsed.translated_text)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // A trivial round-trip is the only capability probe the endpoint offers
        self.translate("ping", "en", None).await.map(|_| ())
    }
}
