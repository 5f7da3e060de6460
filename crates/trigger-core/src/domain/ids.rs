//! InvocationId - 1 回の trigger 実行を追跡するための ID
//!
//! ULID なので生成順にソートでき、ログ上で invocation を時系列に並べられます。

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of one `TriggerInvoker::invoke` call.
///
/// Display は `invocation-<ulid>` 形式です。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InvocationId(Ulid);

impl InvocationId {
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for InvocationId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invocation-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix() {
        let ulid = Ulid::new();
        let id = InvocationId::from(ulid);

        assert_eq!(id.as_ulid(), ulid);
        assert_eq!(id.to_string(), format!("invocation-{ulid}"));
    }

    #[test]
    fn ids_sort_by_creation_time() {
        let id1 = InvocationId::from(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2)); // 時刻が進むのを待つ
        let id2 = InvocationId::from(Ulid::new());

        assert!(id1 < id2);
    }
}
