//! InvokerBuilder - TriggerInvoker の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - transport / state_store / reloader は必須
//! - build() 時に不足があれば BuildError を返す
//! - clock / id generator / warning sink は既定の実装を使う

use std::sync::Arc;
use std::time::Duration;

use super::invoker::TriggerInvoker;
use super::resolver::ArgumentResolver;
use crate::config::{CronResolution, TriggerConfig};
use crate::impls::TracingWarningSink;
use crate::ports::{
    Clock, IdGenerator, Reloader, SnapshotProvider, StateStore, SystemClock, Transport,
    UlidGenerator, WarningSink,
};

/// InvokerBuilder は TriggerInvoker を構築
///
/// # 使用例
/// ```ignore
/// let invoker = InvokerBuilder::new()
///     .transport(Arc::new(transport))
///     .state_store(store.clone())
///     .reloader(Arc::new(reloader))
///     .config(&config)
///     .build()?;
/// ```
pub struct InvokerBuilder {
    transport: Option<Arc<dyn Transport>>,
    store: Option<Arc<dyn StateStore>>,
    reloader: Option<Arc<dyn Reloader>>,
    warnings: Option<Arc<dyn WarningSink>>,
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn IdGenerator>>,
    namespace: String,
    min_duration: Duration,
    cron_resolution: CronResolution,
}

/// BuildError は TriggerInvoker 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing collaborators: {0:?}. These must be set before build().")]
    Missing(Vec<&'static str>),
}

impl InvokerBuilder {
    pub fn new() -> Self {
        let defaults = TriggerConfig::default();
        let min_duration = defaults.min_duration();
        Self {
            transport: None,
            store: None,
            reloader: None,
            warnings: None,
            clock: None,
            ids: None,
            namespace: defaults.namespace,
            min_duration,
            cron_resolution: defaults.cron_resolution,
        }
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn state_store(mut self, store: Arc<dyn StateStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn reloader(mut self, reloader: Arc<dyn Reloader>) -> Self {
        self.reloader = Some(reloader);
        self
    }

    pub fn warning_sink(mut self, warnings: Arc<dyn WarningSink>) -> Self {
        self.warnings = Some(warnings);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn min_duration(mut self, min_duration: Duration) -> Self {
        self.min_duration = min_duration;
        self
    }

    pub fn cron_resolution(mut self, cron_resolution: CronResolution) -> Self {
        self.cron_resolution = cron_resolution;
        self
    }

    /// namespace / min_duration / cron_resolution を config から設定
    pub fn config(mut self, config: &TriggerConfig) -> Self {
        self.namespace = config.namespace.clone();
        self.min_duration = config.min_duration();
        self.cron_resolution = config.cron_resolution;
        self
    }

    pub fn build(self) -> Result<TriggerInvoker, BuildError> {
        let mut missing = Vec::new();
        if self.transport.is_none() {
            missing.push("transport");
        }
        if self.store.is_none() {
            missing.push("state_store");
        }
        if self.reloader.is_none() {
            missing.push("reloader");
        }
        let (Some(transport), Some(store), Some(reloader)) =
            (self.transport, self.store, self.reloader)
        else {
            return Err(BuildError::Missing(missing));
        };

        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);
        let ids = self.ids.unwrap_or_else(|| {
            Arc::new(UlidGenerator::new(SharedClock(clock.clone()))) as Arc<dyn IdGenerator>
        });
        let resolver = ArgumentResolver::new(Arc::new(StoreSnapshots(store.clone())))
            .with_cron_resolution(self.cron_resolution);

        Ok(TriggerInvoker {
            transport,
            store,
            reloader,
            warnings: self
                .warnings
                .unwrap_or_else(|| Arc::new(TracingWarningSink) as Arc<dyn WarningSink>),
            clock,
            ids,
            resolver,
            namespace: self.namespace,
            min_duration: self.min_duration,
        })
    }
}

impl Default for InvokerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// UlidGenerator と invoker で同じ Clock を共有する
struct SharedClock(Arc<dyn Clock>);

impl Clock for SharedClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.0.now()
    }
}

/// Resolver には StateStore の読み取り側だけを渡す
struct StoreSnapshots(Arc<dyn StateStore>);

impl SnapshotProvider for StoreSnapshots {
    fn snapshot(&self) -> Arc<crate::domain::ProfileSnapshot> {
        self.0.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BackendResponse, ProfileSnapshot};
    use crate::impls::InMemoryStateStore;
    use async_trait::async_trait;

    struct NoopTransport;

    #[async_trait]
    impl Transport for NoopTransport {
        async fn perform_action_request(&self, _path: &str, _use_cache: bool) -> BackendResponse {
            BackendResponse::success("")
        }
    }

    struct NoopReloader;

    #[async_trait]
    impl Reloader for NoopReloader {
        async fn reload(&self) -> Result<(), crate::domain::ReloadError> {
            Ok(())
        }
    }

    #[test]
    fn test_build_success() {
        let invoker = InvokerBuilder::new()
            .transport(Arc::new(NoopTransport))
            .state_store(Arc::new(InMemoryStateStore::new(ProfileSnapshot::default())))
            .reloader(Arc::new(NoopReloader))
            .build();
        assert!(invoker.is_ok());
    }

    #[test]
    fn test_build_missing_collaborators() {
        let invoker = InvokerBuilder::new()
            .transport(Arc::new(NoopTransport))
            .build();
        assert!(matches!(
            invoker,
            Err(BuildError::Missing(missing)) if missing == vec!["state_store", "reloader"]
        ));
    }

    #[test]
    fn test_config_is_applied() {
        let config = TriggerConfig {
            min_duration_ms: 0,
            cron_resolution: CronResolution::MatchIndex,
            ..Default::default()
        };
        let invoker = InvokerBuilder::new()
            .transport(Arc::new(NoopTransport))
            .state_store(Arc::new(InMemoryStateStore::new(ProfileSnapshot::default())))
            .reloader(Arc::new(NoopReloader))
            .config(&config)
            .build()
            .unwrap();
        assert_eq!(invoker.min_duration(), Duration::ZERO);
    }

    #[test]
    fn test_defaults_come_from_config_defaults() {
        let invoker = InvokerBuilder::new()
            .transport(Arc::new(NoopTransport))
            .state_store(Arc::new(InMemoryStateStore::new(ProfileSnapshot::default())))
            .reloader(Arc::new(NoopReloader))
            .build()
            .unwrap();
        assert_eq!(invoker.min_duration(), Duration::from_millis(1000));
    }
}
