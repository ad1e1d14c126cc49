//! Recipe generation client
//!
//! One `POST` per generate action, no retries, no client-side timeout. The
//! HTTP status is not inspected: the service reports failures in the JSON
//! body (`{"error": ...}`) with 4xx/5xx codes, so the body decides.

use async_trait::async_trait;
use pantry_common::api::{GenerateRequest, GenerateResponse, Recipe};
use thiserror::Error;

const USER_AGENT: &str = concat!("pantry-ui/", env!("CARGO_PKG_VERSION"));

/// Shown to the user for any network or parse failure
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Backend error. Please try again.";

/// Generate request errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The service answered with an explicit error payload
    #[error("Service error: {0}")]
    Service(String),

    /// Network failure or unreadable response
    #[error("Transport error: {0}")]
    Transport(String),
}

impl GenerateError {
    /// Text to show the user
    ///
    /// Service messages are shown verbatim; transport causes never are.
    pub fn user_message(&self) -> &str {
        match self {
            GenerateError::Service(message) => message.as_str(),
            GenerateError::Transport(_) => TRANSPORT_FALLBACK_MESSAGE,
        }
    }
}

/// Anything that can turn a selection into recipes
#[async_trait]
pub trait RecipeService: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<Recipe>, GenerateError>;
}

/// HTTP client for the recipe generation endpoint
pub struct HttpRecipeClient {
    http_client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpRecipeClient {
    pub fn new(endpoint: &str) -> pantry_common::Result<Self> {
        let endpoint = reqwest::Url::parse(endpoint).map_err(|e| {
            pantry_common::Error::Config(format!("Invalid endpoint URL '{}': {}", endpoint, e))
        })?;

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| pantry_common::Error::Config(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

#[async_trait]
impl RecipeService for HttpRecipeClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<Recipe>, GenerateError> {
        tracing::debug!(
            url = %self.endpoint,
            ingredients = ?request.ingredients,
            "Requesting recipes"
        );

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let status = response.status();

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Transport(format!("HTTP {}: {}", status.as_u16(), e)))?;

        if let Some(message) = body.error_message() {
            tracing::warn!(
                status = status.as_u16(),
                details = body.details.as_deref().unwrap_or(""),
                "Recipe service returned error: {}",
                message
            );
            return Err(GenerateError::Service(message));
        }

        let recipes = body.into_recipes();

        tracing::info!(
            status = status.as_u16(),
            count = recipes.len(),
            "Retrieved recipes"
        );

        Ok(recipes)
    }
}
