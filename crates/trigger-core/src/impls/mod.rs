//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **HttpTransport / HttpProfileStore / HttpReloader**: reqwest でバックエンドと話す
//! - **InMemoryStateStore**: 開発・テスト用の StateStore
//! - **TracingWarningSink**: 既定の WarningSink

pub mod http;
pub mod http_profile;
pub mod http_reload;
pub mod http_transport;
pub mod inmem_store;
pub mod tracing_warning;

pub use self::http::{HttpBackend, HttpSetupError};
pub use self::http_profile::HttpProfileStore;
pub use self::http_reload::HttpReloader;
pub use self::http_transport::HttpTransport;
pub use self::inmem_store::InMemoryStateStore;
pub use self::tracing_warning::TracingWarningSink;
