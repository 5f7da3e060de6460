//! Config - trigger 実行の設定
//!
//! YAML ファイルから読み込みます。すべてのキーは省略可能です。
//!
//! ```yaml
//! base_url: "http://localhost:5454/ui"
//! api_key_env: "TN_API_KEY"
//! min_duration_ms: 1000
//! cron_resolution: inert
//! ```

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// cron timer の引数解決方法
///
/// - `Inert`: 一致する cron があっても常に空を返す（既存の挙動）
/// - `MatchIndex`: 一致した cron の位置を返す
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CronResolution {
    #[default]
    Inert,
    MatchIndex,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// バックエンドの base URL（path はこの後ろに連結される）
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    /// api_key が無いときに読む環境変数名
    pub api_key_env: Option<String>,
    pub min_duration_ms: u64,
    pub namespace: String,
    pub cron_resolution: CronResolution,
    pub request_timeout_secs: u64,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_key_env: None,
            min_duration_ms: 1000,
            namespace: "trigger".to_string(),
            cron_resolution: CronResolution::default(),
            request_timeout_secs: 60,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("base_url is not configured")]
    MissingBaseUrl,
}

impl TriggerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn min_duration(&self) -> Duration {
        Duration::from_millis(self.min_duration_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// 末尾の `/` を除いた base URL
    pub fn base_url(&self) -> Result<&str, ConfigError> {
        self.base_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)
    }

    /// api_key を優先し、無ければ api_key_env の環境変数を読む
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| {
                self.api_key_env
                    .as_deref()
                    .and_then(|var| std::env::var(var).ok())
            })
            .filter(|k| !k.is_empty())
    }
}
