//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use shopify_client::clients::{ShopifyClient, Sleeper};
use shopify_client::{AccessToken, ClientConfig, ClientConfigBuilder, ShopDomain};
use wiremock::MockServer;

pub const TOKEN: &str = "test-access-token";
pub const API_PREFIX: &str = "/admin/api/2025-10";

/// Records requested delays instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// Config builder pointed at the mock server.
pub fn config_builder(server: &MockServer) -> ClientConfigBuilder {
    ClientConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new(TOKEN).unwrap())
        .base_url(server.uri())
}

/// A client for the mock server with `retries` attempts and a recording sleeper.
pub fn client(server: &MockServer, retries: u32) -> (ShopifyClient, Arc<RecordingSleeper>) {
    let config = config_builder(server).retries(retries).build().unwrap();
    let sleeper = Arc::new(RecordingSleeper::default());
    let client = ShopifyClient::new(&config)
        .unwrap()
        .with_sleeper(sleeper.clone());
    (client, sleeper)
}

/// Full request path for an API-relative path such as `"shop.json"`.
pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}/{path}")
}
