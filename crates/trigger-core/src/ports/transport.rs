//! Transport port - バックエンドへの action request
//!
//! 失敗も `BackendResponse`（`ok == false`）として返します。
//! timeout やキャンセルは実装側の責務です。

use async_trait::async_trait;

use crate::domain::BackendResponse;

#[async_trait]
pub trait Transport: Send + Sync {
    /// `path` は `trigger/<kind>/<arg>?ts=<ms>` 形式（先頭の `/` なし）
    async fn perform_action_request(&self, path: &str, use_cache: bool) -> BackendResponse;
}
