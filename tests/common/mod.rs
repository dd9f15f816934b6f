//! Shared fixtures for integration tests: fake secret fetchers and a Vault
//! mock server.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vaultscope::secrets::{SecretFetcher, SecretPayload, VaultConfig};
use vaultscope::{Error, Result};

pub const TEST_TOKEN: &str = "hvs.test-token";
pub const SECRET_PATH: &str = "secret/data/aws";

/// The `creds` string as stored in Vault for the given key pair.
pub fn creds_json(access_key_id: &str, secret_access_key: &str) -> String {
    json!({
        "AWS_ACCESS_KEY_ID": access_key_id,
        "AWS_SECRET_ACCESS_KEY": secret_access_key,
    })
    .to_string()
}

/// A KV v2 read payload wrapping `creds`.
pub fn kv2_payload(creds: &str) -> Value {
    json!({
        "data": { "creds": creds },
        "metadata": {
            "created_time": "2026-01-01T00:00:00Z",
            "deletion_time": "",
            "destroyed": false,
            "version": 1
        }
    })
}

/// Full Vault response envelope around `data`.
pub fn vault_response(data: Value) -> Value {
    json!({
        "request_id": "8a1e8c4e-0000-0000-0000-000000000000",
        "lease_id": "",
        "renewable": false,
        "lease_duration": 0,
        "data": data,
        "wrap_info": null,
        "warnings": null,
        "auth": null
    })
}

/// Start a Vault mock answering reads of `secret/data/aws`.
pub async fn start_vault(status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/{}", SECRET_PATH)))
        .and(header("X-Vault-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;

    server
}

pub fn vault_config(server: &MockServer) -> VaultConfig {
    VaultConfig { address: server.uri(), token: Some(TEST_TOKEN.into()), namespace: None }
}

/// Fetcher returning a fixed payload and counting reads.
pub struct StaticFetcher {
    payload: Value,
    reads: AtomicUsize,
}

impl StaticFetcher {
    pub fn new(payload: Value) -> Self {
        Self { payload, reads: AtomicUsize::new(0) }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretFetcher for StaticFetcher {
    async fn fetch(&self, path: &str) -> Result<SecretPayload> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        SecretPayload::from_response(path, Some(self.payload.clone()))
    }
}

/// Fetcher whose read always fails.
pub struct FailingFetcher;

#[async_trait]
impl SecretFetcher for FailingFetcher {
    async fn fetch(&self, path: &str) -> Result<SecretPayload> {
        Err(Error::read(path, "permission denied"))
    }
}
