//! `VaultSecretFetcher` against a mocked Vault HTTP API.

mod common;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::*;
use vaultscope::secrets::{CredentialExtractor, SecretFetcher, VaultConfig, VaultSecretFetcher};
use vaultscope::ErrorKind;

#[tokio::test]
async fn fetch_returns_nested_payload() {
    let creds = creds_json("AKIAEXAMPLE", "secretEXAMPLE");
    let server = start_vault(200, vault_response(kv2_payload(&creds))).await;

    let fetcher = VaultSecretFetcher::new(&vault_config(&server)).unwrap();
    let payload = fetcher.fetch(SECRET_PATH).await.unwrap();

    assert_eq!(payload.get("data"), Some(&json!({ "creds": creds })));
    assert!(payload.get("metadata").is_some());

    let material = CredentialExtractor::default().extract(&payload).unwrap();
    assert_eq!(material.access_key_id, "AKIAEXAMPLE");
}

#[tokio::test]
async fn fetch_reads_again_on_every_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/secret/data/aws"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(vault_response(kv2_payload(&creds_json("AKIA1", "s1")))),
        )
        .expect(2)
        .mount(&server)
        .await;

    let fetcher = VaultSecretFetcher::new(&vault_config(&server)).unwrap();
    fetcher.fetch(SECRET_PATH).await.unwrap();
    fetcher.fetch(SECRET_PATH).await.unwrap();
}

#[tokio::test]
async fn fetch_sends_namespace_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/secret/data/aws"))
        .and(header("X-Vault-Namespace", "platform"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(vault_response(kv2_payload(&creds_json("AKIA1", "s1")))),
        )
        .mount(&server)
        .await;

    let config = VaultConfig { namespace: Some("platform".to_string()), ..vault_config(&server) };
    let fetcher = VaultSecretFetcher::new(&config).unwrap();

    assert!(fetcher.fetch(SECRET_PATH).await.is_ok());
}

#[tokio::test]
async fn missing_secret_is_not_found() {
    let server = start_vault(404, json!({ "errors": [] })).await;

    let fetcher = VaultSecretFetcher::new(&vault_config(&server)).unwrap();
    let err = fetcher.fetch(SECRET_PATH).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "No data found at path 'secret/data/aws'");
}

#[tokio::test]
async fn null_data_is_not_found() {
    let server = start_vault(200, vault_response(Value::Null)).await;

    let fetcher = VaultSecretFetcher::new(&vault_config(&server)).unwrap();
    let err = fetcher.fetch(SECRET_PATH).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn permission_denied_is_read_error() {
    let server = start_vault(403, json!({ "errors": ["permission denied"] })).await;

    let fetcher = VaultSecretFetcher::new(&vault_config(&server)).unwrap();
    let err = fetcher.fetch(SECRET_PATH).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Read);
    assert!(err.to_string().contains("secret/data/aws"));
}

#[tokio::test]
async fn unreachable_vault_is_read_error() {
    let server = MockServer::start().await;
    let config = vault_config(&server);
    drop(server);

    let fetcher = VaultSecretFetcher::new(&config).unwrap();
    let err = fetcher.fetch(SECRET_PATH).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Read);
}

#[test]
fn invalid_address_is_connection_error() {
    let config = VaultConfig { address: "vault:8200".to_string(), ..Default::default() };

    let err = VaultSecretFetcher::new(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
}
