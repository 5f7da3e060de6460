//! ArgumentResolver - trigger ごとの既定の path 引数を求める
//!
//! 純粋関数として設計されています（snapshot を読むだけで、変更しない）。
//! 解決できない場合はエラーにせず `None` を返します。

use std::sync::Arc;

use tracing::debug;

use crate::config::CronResolution;
use crate::domain::{TriggerArgument, TriggerDescriptor, TriggerKind};
use crate::ports::SnapshotProvider;

pub struct ArgumentResolver {
    profile: Arc<dyn SnapshotProvider>,
    cron_resolution: CronResolution,
}

impl ArgumentResolver {
    pub fn new(profile: Arc<dyn SnapshotProvider>) -> Self {
        Self {
            profile,
            cron_resolution: CronResolution::default(),
        }
    }

    pub fn with_cron_resolution(mut self, cron_resolution: CronResolution) -> Self {
        self.cron_resolution = cron_resolution;
        self
    }

    /// descriptor の種類ごとに引数を決める
    ///
    /// | kind | 結果 |
    /// |---|---|
    /// | `TrigCustomCommand` | 同名 command の hash（なければ None） |
    /// | `TrigCustomCronTimer` | `Inert` では常に None |
    /// | `TrigEndpointURL` | `name` そのもの |
    /// | その他 | None |
    pub fn resolve(&self, descriptor: &TriggerDescriptor) -> Option<TriggerArgument> {
        match &descriptor.key {
            TriggerKind::CustomCommand => self
                .profile
                .snapshot()
                .command_named(&descriptor.name)
                .map(|c| TriggerArgument::Text(c.hash.clone())),
            TriggerKind::CustomCronTimer => {
                let position = self.profile.snapshot().cron_position(&descriptor.name);
                match self.cron_resolution {
                    CronResolution::Inert => {
                        if let Some(index) = position {
                            debug!(name = %descriptor.name, index, "cron match discarded (cron_resolution=inert)");
                        }
                        None
                    }
                    CronResolution::MatchIndex => position.map(TriggerArgument::Index),
                }
            }
            TriggerKind::EndpointUrl => Some(TriggerArgument::Text(descriptor.name.clone())),
            TriggerKind::Stop | TriggerKind::Other(_) => None,
        }
    }
}
