//! InMemoryStateStore - 開発・テスト用の StateStore
//!
//! refresh は snapshot を変えずに回数だけ数えます。
//! 値を変えたいときは `replace` を使います。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::{ProfileSnapshot, StoreError};
use crate::ports::{SnapshotProvider, StateStore};

pub struct InMemoryStateStore {
    current: RwLock<Arc<ProfileSnapshot>>,
    refreshes: AtomicUsize,
}

impl InMemoryStateStore {
    pub fn new(snapshot: ProfileSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
            refreshes: AtomicUsize::new(0),
        }
    }

    pub fn replace(&self, snapshot: ProfileSnapshot) {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Arc::new(snapshot);
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new(ProfileSnapshot::default())
    }
}

impl SnapshotProvider for InMemoryStateStore {
    fn snapshot(&self) -> Arc<ProfileSnapshot> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn refresh(&self) -> Result<(), StoreError> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
