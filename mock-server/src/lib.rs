use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Request payload for creating a merchant account.
#[derive(Deserialize)]
pub struct NewAccount {
    pub site_url: String,
    pub site_email: String,
    pub analyst_email: String,
    pub password: String,
}

/// Notification configuration stored per partner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub http_notification_url: String,
    pub http_notification_threshold: f64,
}

/// Listing envelope returned by the accounts collection.
#[derive(Serialize)]
pub struct AccountListing {
    pub data: Vec<Value>,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
    #[serde(rename = "nextRef")]
    pub next_ref: Option<String>,
    #[serde(rename = "totalResults")]
    pub total_results: u64,
}

#[derive(Default)]
pub struct PartnerDb {
    pub accounts: Vec<Value>,
    pub config: Option<NotificationConfig>,
}

pub type Db = Arc<RwLock<PartnerDb>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(PartnerDb::default()));
    Router::new()
        .route(
            "/v3/partners/{partner_id}/accounts",
            get(list_accounts).post(create_account),
        )
        .route("/v3/accounts/{partner_id}/config", put(update_config))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The real service authenticates the partner api key sent as
/// `Authorization: Basic {key}`; the mock only checks the header shape.
fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Basic "))
        .is_some_and(|key| !key.is_empty())
}

/// An account description in the shape the hosted service returns: account id
/// plus freshly generated production and sandbox key sets.
pub fn account_description() -> Value {
    json!({
        "account_id": Uuid::new_v4().simple().to_string(),
        "production": key_set(),
        "sandbox": key_set(),
    })
}

fn key_set() -> Value {
    json!({
        "api_keys": [key_entry()],
        "beacon_keys": [key_entry()],
    })
}

fn key_entry() -> Value {
    json!({
        "id": Uuid::new_v4().simple().to_string(),
        "state": "ACTIVE",
        "key": Uuid::new_v4().simple().to_string(),
    })
}

async fn create_account(
    State(db): State<Db>,
    Path(_partner_id): Path<String>,
    headers: HeaderMap,
    Json(_input): Json<NewAccount>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let account = account_description();
    db.write().await.accounts.push(account.clone());
    Ok(Json(account))
}

async fn list_accounts(
    State(db): State<Db>,
    Path(_partner_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<AccountListing>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let db = db.read().await;
    Ok(Json(AccountListing {
        data: db.accounts.clone(),
        has_more: false,
        next_ref: None,
        total_results: db.accounts.len() as u64,
    }))
}

async fn update_config(
    State(db): State<Db>,
    Path(_partner_id): Path<String>,
    headers: HeaderMap,
    Json(input): Json<NotificationConfig>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    db.write().await.config = Some(input.clone());
    Ok(Json(json!({
        "http_notification_url": input.http_notification_url,
        "http_notification_threshold": input.http_notification_threshold,
        "is_production": false,
        "enable_sor_by_expected_loss": false,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_description_carries_active_keys() {
        let account = account_description();
        assert!(account["account_id"].is_string());
        for env in ["production", "sandbox"] {
            assert_eq!(account[env]["api_keys"][0]["state"], "ACTIVE");
            assert_eq!(account[env]["beacon_keys"][0]["state"], "ACTIVE");
        }
    }

    #[test]
    fn new_account_rejects_missing_field() {
        let result: Result<NewAccount, _> = serde_json::from_str(
            r#"{"site_url":"merchant123.com","site_email":"owner@merchant123.com","analyst_email":"analyst@partner.com"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn listing_envelope_uses_wire_names() {
        let listing = AccountListing {
            data: Vec::new(),
            has_more: false,
            next_ref: None,
            total_results: 0,
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["hasMore"], false);
        assert_eq!(json["nextRef"], Value::Null);
        assert_eq!(json["totalResults"], 0);
    }

    #[test]
    fn notification_config_roundtrips_through_json() {
        let config = NotificationConfig {
            http_notification_url: "https://api.partners.com/notify?account=%s".to_string(),
            http_notification_threshold: 0.1,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: NotificationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.http_notification_url, config.http_notification_url);
        assert!((back.http_notification_threshold - 0.1).abs() < 1e-6);
    }
}
