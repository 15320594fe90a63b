//! `HttpPlatformClient` against a live server on an ephemeral port.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use toyval_client::{HttpPlatformClient, ValuationClient, ValuationError};
use toyval_config::ServerConfig;
use toyval_server::Server;
use toyval_traits::PlatformError;

async fn spawn_server(api_key: Option<&str>) -> String {
    let config = ServerConfig {
        api_key: api_key.map(str::to_string),
        ..ServerConfig::default()
    };
    let app = Server::new(config).router();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_valuation_over_http() {
    let endpoint = spawn_server(None).await;
    let http = HttpPlatformClient::new(endpoint, None, Some(Duration::from_secs(10))).unwrap();
    let client = ValuationClient::new(Arc::new(http));

    let pv = client.toy_valuation(0.01, "90d", "NoHolidays").await.unwrap();
    assert_eq!((pv * 100.0).round() / 100.0, 997_549.50);
}

#[tokio::test]
async fn test_remote_error_crosses_the_wire_unchanged() {
    let endpoint = spawn_server(None).await;
    let client = ValuationClient::new(Arc::new(HttpPlatformClient::new(endpoint, None, None).unwrap()));

    let err = client.toy_valuation(0.01, "ninety", "NoHolidays").await.unwrap_err();
    assert!(matches!(
        err,
        ValuationError::Remote(PlatformError::MalformedTenor(_))
    ));
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let endpoint = spawn_server(Some("secret")).await;

    let anonymous = ValuationClient::new(Arc::new(
        HttpPlatformClient::new(endpoint.clone(), None, None).unwrap(),
    ));
    let err = anonymous.toy_valuation(0.01, "90d", "NoHolidays").await.unwrap_err();
    assert!(matches!(
        err.as_remote(),
        Some(PlatformError::AuthenticationFailed(_))
    ));

    let authenticated = ValuationClient::new(Arc::new(
        HttpPlatformClient::new(endpoint, Some("secret".into()), None).unwrap(),
    ));
    assert!(authenticated.toy_valuation(0.01, "90d", "NoHolidays").await.is_ok());
}
