//! 用户提示
//!
//! 浏览器端失败时会弹出阻塞式提示框；这里把它抽象成 [`Notifier`]，
//! 由调用方注入具体实现。

use std::sync::{Mutex, PoisonError};

/// 面向用户的阻塞式提示
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// 输出到标准错误的提示实现，供命令行使用
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("[ALERT] {message}");
    }
}

/// 记录所有提示内容，便于嵌入方或测试检查
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        assert!(notifier.is_empty());
        notifier.alert("first");
        notifier.alert("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }
}
