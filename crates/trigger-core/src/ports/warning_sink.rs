//! WarningSink port - 致命的でない通知の表示先

pub trait WarningSink: Send + Sync {
    fn warning(&self, message: &str);
}
