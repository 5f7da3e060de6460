//! trigger-core
//!
//! Client-side trigger execution: resolve the path argument, send one action
//! request, refresh the cached profile, and pad the perceived duration.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（TriggerDescriptor, TriggerArgument, BackendResponse, ProfileSnapshot, errors）
//! - **ports**: 抽象化レイヤー（Transport, StateStore, Reloader, WarningSink, Clock, IdGenerator）
//! - **app**: アプリケーションロジック（ArgumentResolver, TriggerInvoker, InvokerBuilder）
//! - **impls**: 実装（reqwest ベースの HTTP 実装、InMemoryStateStore など）
//! - **config**: YAML 設定

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{ArgumentResolver, BuildError, InvokerBuilder, TriggerInvoker};
pub use config::{CronResolution, TriggerConfig};
pub use domain::{BackendResponse, TriggerArgument, TriggerDescriptor, TriggerKind};
