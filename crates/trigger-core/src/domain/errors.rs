//! Errors - エラー型と分類
//!
//! action request の失敗は `BackendResponse` の値として返すため、ここには含めません。
//! ここにあるのは周辺の協調オブジェクト（store, reload）と呼び出し境界のエラーです。

use thiserror::Error;

use super::trigger::TriggerKind;

/// StateStore::refresh の失敗
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile request failed: {0}")]
    Request(String),

    #[error("profile request returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("profile decode: {0}")]
    Decode(String),
}

/// Reloader::reload の失敗
#[derive(Debug, Error)]
pub enum ReloadError {
    #[error("reload request failed: {0}")]
    Request(String),

    #[error("reload rejected with status {0}")]
    Rejected(u16),
}

/// content override の検証エラー
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("trigger {0} does not accept content")]
    NotAccepted(TriggerKind),

    #[error("trigger {kind} expects a cron index, got '{raw}'")]
    InvalidIndex { kind: TriggerKind, raw: String },
}
