//! TriggerArgument - endpoint の path 引数
//!
//! 呼び出し側の content override と Resolver の出力の両方を表します。
//! 文字列か cron の index のどちらかしか取りません。

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ContentError;
use super::trigger::TriggerKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum TriggerArgument {
    /// command hash, endpoint 名など
    Text(String),

    /// cron リスト内の位置
    Index(usize),
}

impl TriggerArgument {
    /// 呼び出し境界で raw 文字列を検証して引数に変換
    ///
    /// - `TrigCustomCronTimer`: 非負整数のみ
    /// - `TrigStop`: content を受け付けない
    /// - それ以外: 文字列としてそのまま
    pub fn for_kind(kind: &TriggerKind, raw: &str) -> Result<Self, ContentError> {
        match kind {
            TriggerKind::Stop => Err(ContentError::NotAccepted(kind.clone())),
            TriggerKind::CustomCronTimer => raw
                .trim()
                .parse::<usize>()
                .map(Self::Index)
                .map_err(|_| ContentError::InvalidIndex {
                    kind: kind.clone(),
                    raw: raw.to_string(),
                }),
            _ => Ok(Self::Text(raw.to_string())),
        }
    }

    /// 空文字列は「値なし」として扱う
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Index(_) => true,
        }
    }
}

impl fmt::Display for TriggerArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for TriggerArgument {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TriggerArgument {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<usize> for TriggerArgument {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}
