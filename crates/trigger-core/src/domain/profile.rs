//! Profile snapshot - バックエンドから取得した設定の読み取り専用コピー
//!
//! Resolver はここから Command と CronEntry を借用して参照します。

use serde::{Deserialize, Serialize};

/// Custom command（名前と hash）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub hash: String,
}

/// Site cron（名前のみ。位置が識別子になる）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronEntry {
    pub name: String,
}

/// profile の `config` セクション（ここで使うのは commands だけ）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// ProfileSnapshot は StateStore が公開する現在の状態
///
/// バックエンドの profile は `config.commands` と トップレベルの `siteCrons` を持ちます。
/// それ以外のキーは読み捨てます。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub config: ProfileConfig,

    #[serde(default)]
    pub site_crons: Vec<CronEntry>,
}

impl ProfileSnapshot {
    pub fn with_command(mut self, name: impl Into<String>, hash: impl Into<String>) -> Self {
        self.config.commands.push(Command {
            name: name.into(),
            hash: hash.into(),
        });
        self
    }

    pub fn with_cron(mut self, name: impl Into<String>) -> Self {
        self.site_crons.push(CronEntry { name: name.into() });
        self
    }

    /// 名前が完全一致する最初の command
    pub fn command_named(&self, name: &str) -> Option<&Command> {
        self.config.commands.iter().find(|c| c.name == name)
    }

    /// `trigger_name` が `'<cron.name>'` で終わる最初の cron の位置
    pub fn cron_position(&self, trigger_name: &str) -> Option<usize> {
        self.site_crons
            .iter()
            .position(|cron| trigger_name.ends_with(&format!("'{}'", cron.name)))
    }
}
