//! HttpTransport - reqwest による action request
//!
//! ステータスが 2xx 以外、または通信エラーは `ok == false` の response にします。

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::debug;

use super::http::HttpBackend;
use crate::domain::BackendResponse;
use crate::ports::Transport;

pub struct HttpTransport {
    backend: HttpBackend,
}

impl HttpTransport {
    pub fn new(backend: HttpBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform_action_request(&self, path: &str, use_cache: bool) -> BackendResponse {
        let mut req = self.backend.get(path);
        if !use_cache {
            req = req.header(CACHE_CONTROL, "no-cache").header(PRAGMA, "no-cache");
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return BackendResponse::failure(e.to_string()),
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => return BackendResponse::failure(e.to_string()).with_status(status.as_u16()),
        };
        debug!(status = status.as_u16(), "action request finished");

        let out = if status.is_success() {
            BackendResponse::success(body)
        } else {
            BackendResponse::failure(body)
        };
        out.with_status(status.as_u16())
    }
}
