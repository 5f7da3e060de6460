//! Trigger - trigger の種類と descriptor
//!
//! `key` はバックエンドが理解する trigger 識別子（例: `TrigEndpointURL`）です。
//! 特別扱いが必要な 4 種類だけを variant として持ち、それ以外は `Other` に入れます。

use serde::{Deserialize, Serialize};
use std::fmt;

/// TriggerKind は trigger の種類
///
/// # 特別扱いされる種類
/// - `CustomCommand`: コマンドの hash を引数に取る
/// - `CustomCronTimer`: cron の index を引数に取る
/// - `EndpointUrl`: endpoint 名そのものを引数に取る
/// - `Stop`: バックエンドに送らず、クライアントを reload する
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerKind {
    CustomCommand,
    CustomCronTimer,
    EndpointUrl,
    Stop,
    Other(String),
}

impl TriggerKind {
    pub const CUSTOM_COMMAND: &'static str = "TrigCustomCommand";
    pub const CUSTOM_CRON_TIMER: &'static str = "TrigCustomCronTimer";
    pub const ENDPOINT_URL: &'static str = "TrigEndpointURL";
    pub const STOP: &'static str = "TrigStop";

    /// wire 上の識別子
    pub fn as_str(&self) -> &str {
        match self {
            Self::CustomCommand => Self::CUSTOM_COMMAND,
            Self::CustomCronTimer => Self::CUSTOM_CRON_TIMER,
            Self::EndpointUrl => Self::ENDPOINT_URL,
            Self::Stop => Self::STOP,
            Self::Other(key) => key,
        }
    }
}

impl From<&str> for TriggerKind {
    fn from(key: &str) -> Self {
        match key {
            Self::CUSTOM_COMMAND => Self::CustomCommand,
            Self::CUSTOM_CRON_TIMER => Self::CustomCronTimer,
            Self::ENDPOINT_URL => Self::EndpointUrl,
            Self::STOP => Self::Stop,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for TriggerKind {
    fn from(key: String) -> Self {
        Self::from(key.as_str())
    }
}

impl From<TriggerKind> for String {
    fn from(kind: TriggerKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TriggerDescriptor は 1 回の実行で使う trigger の情報
///
/// 呼び出し側が作成し、実行が終われば捨てられます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDescriptor {
    pub key: TriggerKind,
    pub name: String,
}

impl TriggerDescriptor {
    pub fn new(key: impl Into<TriggerKind>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}
