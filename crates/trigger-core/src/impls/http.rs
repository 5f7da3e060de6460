//! HttpBackend - reqwest クライアントと base URL の共有部分
//!
//! Transport / ProfileStore / Reloader は同じバックエンドに話すので、
//! クライアントと認証ヘッダの付け方をここにまとめています。

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::config::{ConfigError, TriggerConfig};

const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    pub fn from_config(config: &TriggerConfig) -> Result<Self, HttpSetupError> {
        let backend = Self::new(config.base_url()?, config.request_timeout())?;
        Ok(match config.resolve_api_key() {
            Some(key) => backend.with_api_key(key),
            None => backend,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path` は先頭の `/` 有無どちらでもよい
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        let req = self.client.get(self.url(path));
        match &self.api_key {
            Some(key) => req.header(API_KEY_HEADER, key),
            None => req,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HttpSetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
