//! TracingWarningSink - 警告を tracing に流す既定の WarningSink

use tracing::warn;

use crate::ports::WarningSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarningSink;

impl WarningSink for TracingWarningSink {
    fn warning(&self, message: &str) {
        warn!(target: "trigger::warning", "{message}");
    }
}
