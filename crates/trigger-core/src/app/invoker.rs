//! TriggerInvoker - resolve → request → refresh → duration floor
//!
//! # フロー
//! 1. `TrigStop` ならバックエンドに送らず reload → refresh（失敗は警告のみ）
//! 2. content が無ければ Resolver で引数を決める
//! 3. `trigger/<kind>/<arg>?ts=<start>` を Transport に送る
//! 4. 成功なら StateStore を refresh、失敗ならそのまま返す
//! 5. 経過時間が floor 未満なら差分だけ待つ

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{Instrument, debug, info, info_span, warn};

use super::path::{endpoint_path, request_path};
use super::resolver::ArgumentResolver;
use crate::domain::{BackendResponse, TriggerArgument, TriggerDescriptor, TriggerKind};
use crate::ports::{Clock, IdGenerator, Reloader, StateStore, Transport, WarningSink};

/// TriggerInvoker は副作用を持つ唯一のコンポーネント
///
/// 並行する invoke 同士の排他はしません（refresh は冪等）。
/// invoke は開始したら floor の待機まで必ず完走します。
pub struct TriggerInvoker {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) store: Arc<dyn StateStore>,
    pub(crate) reloader: Arc<dyn Reloader>,
    pub(crate) warnings: Arc<dyn WarningSink>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) ids: Arc<dyn IdGenerator>,
    pub(crate) resolver: ArgumentResolver,
    pub(crate) namespace: String,
    pub(crate) min_duration: Duration,
}

impl TriggerInvoker {
    pub fn resolver(&self) -> &ArgumentResolver {
        &self.resolver
    }

    pub fn min_duration(&self) -> Duration {
        self.min_duration
    }

    /// 送信せずに endpoint path（ts なし）だけを求める
    pub fn endpoint_for(
        &self,
        descriptor: &TriggerDescriptor,
        content: Option<&TriggerArgument>,
    ) -> String {
        let argument = self.select_argument(descriptor, content.cloned());
        endpoint_path(&self.namespace, &descriptor.key, argument.as_ref())
    }

    /// trigger を 1 回実行
    ///
    /// action request の失敗は `ok == false` の response として返ります。
    pub async fn invoke(
        &self,
        descriptor: &TriggerDescriptor,
        content: Option<TriggerArgument>,
    ) -> BackendResponse {
        let invocation_id = self.ids.generate_invocation_id();
        let span = info_span!(
            "invoke",
            invocation_id = %invocation_id,
            kind = %descriptor.key,
            name = %descriptor.name
        );
        self.invoke_inner(descriptor, content).instrument(span).await
    }

    async fn invoke_inner(
        &self,
        descriptor: &TriggerDescriptor,
        content: Option<TriggerArgument>,
    ) -> BackendResponse {
        let started = Instant::now();
        let started_at = self.clock.now();

        if descriptor.key == TriggerKind::Stop {
            self.reload_client().await;
            return BackendResponse::accepted();
        }

        let argument = self.select_argument(descriptor, content);
        let endpoint = endpoint_path(&self.namespace, &descriptor.key, argument.as_ref());
        let path = request_path(&endpoint, started_at.timestamp_millis());
        debug!(%path, "sending action request");

        let resp = self.transport.perform_action_request(&path, false).await;
        if !resp.ok {
            warn!(status = ?resp.status, body = %resp.body, "action request failed");
            return resp;
        }

        if let Err(e) = self.store.refresh().await {
            warn!(error = %e, "profile refresh after trigger failed");
        }

        let elapsed = started.elapsed();
        if elapsed < self.min_duration {
            tokio::time::sleep(self.min_duration - elapsed).await;
        }
        info!(elapsed_ms = started.elapsed().as_millis() as u64, "trigger completed");
        resp
    }

    /// 有効な content があればそれを、無ければ Resolver の結果を使う
    fn select_argument(
        &self,
        descriptor: &TriggerDescriptor,
        content: Option<TriggerArgument>,
    ) -> Option<TriggerArgument> {
        match content {
            Some(c) if c.is_present() => Some(c),
            _ => self.resolver.resolve(descriptor),
        }
    }

    /// reload → refresh。失敗は WarningSink に流して握りつぶす
    async fn reload_client(&self) {
        match self.reload_sequence().await {
            Ok(()) => info!("client reloaded"),
            Err(message) => {
                warn!(error = %message, "client reload failed");
                self.warnings.warning(&message);
            }
        }
    }

    async fn reload_sequence(&self) -> Result<(), String> {
        self.reloader.reload().await.map_err(|e| e.to_string())?;
        self.store.refresh().await.map_err(|e| e.to_string())
    }
}
