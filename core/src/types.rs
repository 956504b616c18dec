//! Domain DTOs for the partner API.
//!
//! # Design
//! These types mirror the wire contract but are defined independently of the
//! mock-server crate; integration tests catch any schema drift between the
//! two. Account descriptions returned by the server are passed through as
//! opaque JSON; the client does not validate their shape.

use serde::{Deserialize, Serialize};

/// An account description as returned by the server: account id plus
/// per-environment api/beacon key sets. Passed through unvalidated.
pub type AccountDescription = serde_json::Value;

/// Request payload for creating a merchant account under the partner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccountRequest {
    pub site_url: String,
    pub site_email: String,
    pub analyst_email: String,
    pub password: String,
}

/// Notification configuration applied to all merchant accounts under the
/// partner. The url is a template containing `%s` exactly once, into which
/// the server substitutes a merchant account id; the threshold is a score
/// cutoff in `[0.0, 1.0]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub http_notification_url: String,
    pub http_notification_threshold: f64,
}

/// Input to a notification config update.
///
/// Two call shapes have existed historically: positional `(url, threshold)`
/// and a single config value. Both convert into this union via `From`, so
/// either shape can be handed to
/// `PartnerClient::build_update_notification_config` and both produce the
/// same wire request.
#[derive(Debug, Clone)]
pub enum NotificationUpdate {
    Values { url: String, threshold: f64 },
    Config(NotificationConfig),
}

impl NotificationUpdate {
    /// Normalize either shape to the config entity.
    pub(crate) fn into_config(self) -> NotificationConfig {
        match self {
            NotificationUpdate::Values { url, threshold } => NotificationConfig {
                http_notification_url: url,
                http_notification_threshold: threshold,
            },
            NotificationUpdate::Config(config) => config,
        }
    }
}

impl From<NotificationConfig> for NotificationUpdate {
    fn from(config: NotificationConfig) -> Self {
        NotificationUpdate::Config(config)
    }
}

impl From<(&str, f64)> for NotificationUpdate {
    fn from((url, threshold): (&str, f64)) -> Self {
        NotificationUpdate::Values {
            url: url.to_string(),
            threshold,
        }
    }
}

impl From<(String, f64)> for NotificationUpdate {
    fn from((url, threshold): (String, f64)) -> Self {
        NotificationUpdate::Values { url, threshold }
    }
}

/// One page of account listings, exactly as the server envelopes it. The
/// client never follows `next_ref` on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountListing {
    pub data: Vec<AccountDescription>,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
    #[serde(rename = "nextRef", default)]
    pub next_ref: Option<String>,
    #[serde(rename = "totalResults")]
    pub total_results: u64,
}
