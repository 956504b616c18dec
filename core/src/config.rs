//! Immutable client configuration.
//!
//! # Design
//! Credentials are injected explicitly at construction; there is no
//! process-wide default api key or account id to fall back on. Construction
//! validates the credentials once, so every `ClientConfig` in existence is
//! usable. Endpoint and timeout carry defaults matching the hosted service
//! but stay overridable, since deployments have been observed fronting the
//! same v3 API under different hosts.

use std::time::Duration;

use crate::error::ApiError;

/// Default base endpoint of the partner API.
pub const DEFAULT_ENDPOINT: &str = "https://partner.siftscience.com/v3";

/// Default request timeout handed to the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Immutable configuration for a `PartnerClient`.
///
/// Holds the partner credentials, the base endpoint, the transport timeout,
/// and an optional descriptive `User-Agent` value. The timeout is not
/// enforced here; hosts read it via [`ClientConfig::timeout`] and configure
/// their transport with it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: String,
    partner_id: String,
    endpoint_base: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientConfig {
    /// Build a configuration from partner credentials, with default endpoint
    /// and timeout.
    ///
    /// Fails with `ApiError::InvalidArgument` if either credential is empty.
    pub fn new(api_key: &str, partner_id: &str) -> Result<Self, ApiError> {
        if api_key.is_empty() {
            return Err(ApiError::invalid("api_key", "must be a non-empty string"));
        }
        if partner_id.is_empty() {
            return Err(ApiError::invalid("partner_id", "must be a non-empty string"));
        }
        Ok(Self {
            api_key: api_key.to_string(),
            partner_id: partner_id.to_string(),
            endpoint_base: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        })
    }

    /// Override the base endpoint. A trailing slash is stripped so request
    /// paths join cleanly.
    pub fn with_endpoint(mut self, endpoint_base: &str) -> Result<Self, ApiError> {
        if endpoint_base.is_empty() {
            return Err(ApiError::invalid("endpoint_base", "must be a non-empty URL"));
        }
        self.endpoint_base = endpoint_base.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Override the transport timeout. Zero is rejected.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ApiError> {
        if timeout.is_zero() {
            return Err(ApiError::invalid("timeout", "must be a positive duration"));
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Set a descriptive `User-Agent` value to send with every request.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    pub fn endpoint_base(&self) -> &str {
        &self.endpoint_base
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        let err = ClientConfig::new("", "65653548").unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { ref field, .. } if field == "api_key"));
    }

    #[test]
    fn empty_partner_id_is_rejected() {
        let err = ClientConfig::new("98463454389754", "").unwrap_err();
        assert!(
            matches!(err, ApiError::InvalidArgument { ref field, .. } if field == "partner_id")
        );
    }

    #[test]
    fn defaults_match_hosted_service() {
        let config = ClientConfig::new("98463454389754", "65653548").unwrap();
        assert_eq!(config.endpoint_base(), "https://partner.siftscience.com/v3");
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert!(config.user_agent().is_none());
    }

    #[test]
    fn endpoint_override_strips_trailing_slash() {
        let config = ClientConfig::new("98463454389754", "65653548")
            .unwrap()
            .with_endpoint("https://api3.siftscience.com/v3/")
            .unwrap();
        assert_eq!(config.endpoint_base(), "https://api3.siftscience.com/v3");
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let err = ClientConfig::new("98463454389754", "65653548")
            .unwrap()
            .with_endpoint("")
            .unwrap_err();
        assert!(
            matches!(err, ApiError::InvalidArgument { ref field, .. } if field == "endpoint_base")
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = ClientConfig::new("98463454389754", "65653548")
            .unwrap()
            .with_timeout(Duration::ZERO)
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { ref field, .. } if field == "timeout"));
    }

    #[test]
    fn user_agent_is_stored() {
        let config = ClientConfig::new("98463454389754", "65653548")
            .unwrap()
            .with_user_agent("partner-core/0.1.0");
        assert_eq!(config.user_agent(), Some("partner-core/0.1.0"));
    }
}
