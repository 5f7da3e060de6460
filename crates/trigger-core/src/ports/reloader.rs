//! Reloader port - クライアントの再接続・再読み込み
//!
//! Stop trigger のときだけ使われます。失敗しても呼び出し側には伝えません。

use async_trait::async_trait;

use crate::domain::ReloadError;

#[async_trait]
pub trait Reloader: Send + Sync {
    async fn reload(&self) -> Result<(), ReloadError>;
}
