//! HttpProfileStore - バックエンドの profile をキャッシュする StateStore
//!
//! refresh で `GET <base>/profile` を取り直し、snapshot を丸ごと差し替えます。
//! 読み手は差し替え前の Arc を持ち続けられるので、読み取り中に値が変わることはありません。

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::debug;

use super::http::HttpBackend;
use crate::domain::{ProfileSnapshot, StoreError};
use crate::ports::{SnapshotProvider, StateStore};

const PROFILE_PATH: &str = "profile";

pub struct HttpProfileStore {
    backend: HttpBackend,
    current: RwLock<Arc<ProfileSnapshot>>,
}

impl HttpProfileStore {
    /// 空の snapshot で開始（最初の refresh までは何も解決できない）
    pub fn new(backend: HttpBackend) -> Self {
        Self {
            backend,
            current: RwLock::new(Arc::new(ProfileSnapshot::default())),
        }
    }

    /// 作成と同時に 1 回 refresh する
    pub async fn connect(backend: HttpBackend) -> Result<Self, StoreError> {
        let store = Self::new(backend);
        store.refresh().await?;
        Ok(store)
    }

    async fn fetch(&self) -> Result<ProfileSnapshot, StoreError> {
        let resp = self
            .backend
            .get(PROFILE_PATH)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl SnapshotProvider for HttpProfileStore {
    fn snapshot(&self) -> Arc<ProfileSnapshot> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl StateStore for HttpProfileStore {
    async fn refresh(&self) -> Result<(), StoreError> {
        let snapshot = self.fetch().await?;
        debug!(
            commands = snapshot.config.commands.len(),
            site_crons = snapshot.site_crons.len(),
            "profile refreshed"
        );
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Arc::new(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let backend = HttpBackend::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let store = HttpProfileStore::new(backend);
        let before = store.snapshot();

        let err = store.refresh().await.unwrap_err();

        assert!(matches!(err, StoreError::Request(_)));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }
}
