//! StateStore port - キャッシュされた profile の読み取りと再取得
//!
//! Resolver は `SnapshotProvider` だけを受け取り、refresh は呼べません。

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ProfileSnapshot, StoreError};

/// 読み取り専用の snapshot 提供者
pub trait SnapshotProvider: Send + Sync {
    fn snapshot(&self) -> Arc<ProfileSnapshot>;
}

/// StateStore は snapshot の再取得・再公開ができる
///
/// # 設計原則
/// - refresh は冪等（並行する invocation が重複して呼んでも問題ない）
#[async_trait]
pub trait StateStore: SnapshotProvider {
    async fn refresh(&self) -> Result<(), StoreError>;
}
