use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::config::AuthConfig;
use crate::error::{WebError, WebResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[serde(default)]
    pub code: Option<String>,
    /// Falls back to the configured callback URL
    #[serde(default)]
    pub redirect_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthHealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth0_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
struct AuthorizationCodeGrant<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    grant_type: &'static str,
    redirect_uri: &'a str,
}

#[derive(Debug)]
struct Provider {
    domain: String,
    token_url: String,
    client_id: String,
    client_secret: String,
    callback_url: String,
}

/// Trades authorization codes for tokens at the identity provider, keeping the
/// client secret on the server.
#[derive(Debug)]
pub struct TokenExchange {
    client: reqwest::Client,
    provider: Result<Provider, String>,
}

impl TokenExchange {
    pub fn new(config: AuthConfig, client: reqwest::Client) -> Self {
        let missing = config.missing_variables();

        let provider = match (config.domain, config.client_id, config.client_secret) {
            (Some(domain), Some(client_id), Some(client_secret)) => Ok(Provider {
                token_url: token_url(&domain),
                domain,
                client_id,
                client_secret,
                callback_url: config.callback_url,
            }),
            _ => Err(format!(
                "Missing Auth0 environment variables: {}. Set these in your .env file.",
                missing.join(", ")
            )),
        };

        Self { client, provider }
    }

    /// Why the service cannot exchange codes, if it cannot
    pub fn configuration_error(&self) -> Option<&str> {
        self.provider.as_ref().err().map(String::as_str)
    }

    pub fn health(&self) -> AuthHealthResponse {
        match &self.provider {
            Ok(provider) => AuthHealthResponse {
                status: "healthy".to_string(),
                auth0_domain: Some(provider.domain.clone()),
                message: Some("Auth0 service is configured and ready".to_string()),
                error: None,
            },
            Err(error) => AuthHealthResponse {
                status: "unhealthy".to_string(),
                auth0_domain: None,
                message: None,
                error: Some(error.clone()),
            },
        }
    }

    /// Exchange an authorization code. A successful provider answer is returned
    /// untouched.
    pub async fn exchange(&self, request: &TokenRequest) -> WebResult<Value> {
        let provider = self
            .provider
            .as_ref()
            .map_err(|error| WebError::Configuration(error.clone()))?;

        let code = request
            .code
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| WebError::BadRequest("Authorization code is required".to_string()))?;

        let redirect_uri = request
            .redirect_uri
            .as_deref()
            .unwrap_or(provider.callback_url.as_str());

        let grant = AuthorizationCodeGrant {
            client_id: &provider.client_id,
            client_secret: &provider.client_secret,
            code,
            grant_type: "authorization_code",
            redirect_uri,
        };

        let response = self
            .client
            .post(&provider.token_url)
            .json(&grant)
            .send()
            .await
            .map_err(|e| WebError::Upstream(format!("Token request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            tracing::warn!("Token exchange rejected with status {}", status);
            return Err(WebError::BadRequest(format!(
                "Auth0 token exchange failed: {}",
                provider_error_message(&body)
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WebError::Upstream(format!("Unreadable token response: {}", e)))
    }
}

/// Token endpoint for `domain`. A domain that already names its scheme is used
/// as the base URL.
fn token_url(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('/');
    if domain.starts_with("http://") || domain.starts_with("https://") {
        format!("{}/oauth/token", domain)
    } else {
        format!("https://{}/oauth/token", domain)
    }
}

fn provider_error_message(body: &Value) -> &str {
    body.get("error_description")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .unwrap_or("Unknown error")
}
