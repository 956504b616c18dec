//! Stateless HTTP request builder and response parser for the partner API.
//!
//! # Design
//! `PartnerClient` holds only an immutable `ClientConfig` and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that validates inputs and produces an `HttpRequest`, and a
//! `parse_*` method that consumes an `HttpResponse`. The caller executes the
//! actual HTTP round-trip, keeping the core deterministic and free of I/O
//! dependencies. Validation failures are returned before any request value
//! exists, so an invalid input can never reach the network.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AccountDescription, AccountListing, NewAccountRequest, NotificationUpdate};

/// Synchronous, stateless client for the partner API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Safe to clone and share across threads; every call
/// reads the same immutable configuration.
#[derive(Debug, Clone)]
pub struct PartnerClient {
    config: ClientConfig,
}

impl PartnerClient {
    /// Create a client bound to the given partner credentials, with the
    /// default endpoint and timeout.
    pub fn new(api_key: &str, partner_id: &str) -> Result<Self, ApiError> {
        Ok(Self {
            config: ClientConfig::new(api_key, partner_id)?,
        })
    }

    /// Create a client from an explicit configuration, for endpoint, timeout,
    /// or user-agent overrides.
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// The configuration this client was built with. Hosts read the timeout
    /// from here when setting up their transport.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_create_account(&self, input: &NewAccountRequest) -> Result<HttpRequest, ApiError> {
        require_non_empty("site_url", &input.site_url)?;
        require_non_empty("site_email", &input.site_email)?;
        require_non_empty("analyst_email", &input.analyst_email)?;
        require_non_empty("password", &input.password)?;

        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.accounts_url(),
            headers: self.headers(true),
            body: Some(body),
        })
    }

    pub fn build_list_accounts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.accounts_url(),
            headers: self.headers(false),
            body: None,
        }
    }

    /// Accepts either historical call shape, a `(url, threshold)` tuple or a
    /// `NotificationConfig` value, and produces the same wire request for the
    /// same logical values.
    pub fn build_update_notification_config(
        &self,
        update: impl Into<NotificationUpdate>,
    ) -> Result<HttpRequest, ApiError> {
        let config = update.into().into_config();
        require_non_empty("http_notification_url", &config.http_notification_url)?;
        if config.http_notification_url.matches("%s").count() != 1 {
            return Err(ApiError::invalid(
                "http_notification_url",
                "must contain the `%s` placeholder exactly once",
            ));
        }
        if !config.http_notification_threshold.is_finite()
            || !(0.0..=1.0).contains(&config.http_notification_threshold)
        {
            return Err(ApiError::invalid(
                "http_notification_threshold",
                "must be a finite number between 0.0 and 1.0",
            ));
        }

        let body =
            serde_json::to_string(&config).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.notification_config_url(),
            headers: self.headers(true),
            body: Some(body),
        })
    }

    /// Interpret the create-account response: the decoded account description
    /// on 2xx, passed through unmodified.
    pub fn parse_create_account(
        &self,
        response: HttpResponse,
    ) -> Result<AccountDescription, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn parse_list_accounts(&self, response: HttpResponse) -> Result<AccountListing, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Interpret the config-update response: the effective configuration plus
    /// whatever account flags the server includes, passed through unmodified.
    pub fn parse_update_notification_config(
        &self,
        response: HttpResponse,
    ) -> Result<serde_json::Value, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn accounts_url(&self) -> String {
        format!(
            "{}/partners/{}/accounts",
            self.config.endpoint_base(),
            self.config.partner_id()
        )
    }

    fn notification_config_url(&self) -> String {
        format!(
            "{}/accounts/{}/config",
            self.config.endpoint_base(),
            self.config.partner_id()
        )
    }

    /// Headers common to every request. `Content-Type` is only sent when the
    /// request carries a JSON body.
    fn headers(&self, with_body: bool) -> Vec<(String, String)> {
        let mut headers = vec![(
            "authorization".to_string(),
            format!("Basic {}", self.config.api_key()),
        )];
        if with_body {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        if let Some(user_agent) = self.config.user_agent() {
            headers.push(("user-agent".to_string(), user_agent.to_string()));
        }
        headers
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::invalid(field, "must be a non-empty string"));
    }
    Ok(())
}

/// Map non-2xx status codes to `ApiError::Http`.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
