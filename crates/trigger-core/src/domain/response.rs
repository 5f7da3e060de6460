//! BackendResponse - action request の結果
//!
//! Transport が作成し、Invoker は読むだけです。
//! 失敗はエラーではなく `ok == false` の値として返ります。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendResponse {
    pub ok: bool,

    /// HTTP status（ネットワークエラー時は None）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// 成功時は本文、失敗時はエラー内容
    #[serde(default)]
    pub body: String,
}

impl BackendResponse {
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            ok: true,
            status: None,
            body: body.into(),
        }
    }

    pub fn failure(body: impl Into<String>) -> Self {
        Self {
            ok: false,
            status: None,
            body: body.into(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Stop trigger が返す結果: `{ok: true, body: ""}`
    pub fn accepted() -> Self {
        Self::success("")
    }
}
