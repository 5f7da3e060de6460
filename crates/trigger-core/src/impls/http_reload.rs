//! HttpReloader - バックエンドに reload を要求する

use async_trait::async_trait;

use super::http::HttpBackend;
use crate::domain::ReloadError;
use crate::ports::Reloader;

const RELOAD_PATH: &str = "reload";

pub struct HttpReloader {
    backend: HttpBackend,
}

impl HttpReloader {
    pub fn new(backend: HttpBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Reloader for HttpReloader {
    async fn reload(&self) -> Result<(), ReloadError> {
        let resp = self
            .backend
            .get(RELOAD_PATH)
            .send()
            .await
            .map_err(|e| ReloadError::Request(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(ReloadError::Rejected(resp.status().as_u16()));
        }
        Ok(())
    }
}
