//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部の協調オブジェクト（HTTP transport, profile store,
//! reload, 警告表示）へのインターフェースを提供し、実装の詳細を隠蔽します。

pub mod clock;
pub mod id_generator;
pub mod reloader;
pub mod state_store;
pub mod transport;
pub mod warning_sink;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::reloader::Reloader;
pub use self::state_store::{SnapshotProvider, StateStore};
pub use self::transport::Transport;
pub use self::warning_sink::WarningSink;
