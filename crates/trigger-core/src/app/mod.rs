//! App - アプリケーション層
//!
//! ports を組み合わせて trigger 実行のロジックを実装します。
//!
//! # 主要コンポーネント
//! - **ArgumentResolver**: trigger ごとの既定の path 引数を求める（純粋関数）
//! - **TriggerInvoker**: resolve → request → refresh → duration floor
//! - **InvokerBuilder**: 協調オブジェクトのワイヤリング

pub mod builder;
pub mod invoker;
pub mod path;
pub mod resolver;

pub use self::builder::{BuildError, InvokerBuilder};
pub use self::invoker::TriggerInvoker;
pub use self::path::{encode_component, endpoint_path, request_path};
pub use self::resolver::ArgumentResolver;
