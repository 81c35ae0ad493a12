//! # 错误汇总
//!
//! 并发安全的失败消息序列。批处理期间只追加、不输出；
//! 进度条结束后再统一打印。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 写入
//! - 由 `BatchReport` 在结束后输出，使用 `utils/output.rs` 与 `tabled`
//! - `render_failures` 只生成文本，`print_failures` 负责写到 stderr

use crate::utils::output;

use std::sync::{Mutex, PoisonError};
use tabled::{Table, Tabled};

/// 失败消息收集器
#[derive(Debug, Default)]
pub struct ErrorAggregator {
    messages: Mutex<Vec<String>>,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条完整消息
    pub fn push(&self, message: String) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// 取出全部消息（按追加顺序）
    pub fn into_messages(self) -> Vec<String> {
        self.messages
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// 失败详情行
#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Failure")]
    message: String,
}

/// 失败汇总文本：有失败时总是包含数量，verbose 时附带逐条列表
pub fn render_failures(failures: &[String], verbose: bool) -> String {
    if failures.is_empty() {
        return String::new();
    }

    let mut text = output::error_line(&format!("{} image operations failed", failures.len()));

    if verbose {
        let rows: Vec<FailureRow> = failures
            .iter()
            .enumerate()
            .map(|(i, message)| FailureRow {
                index: i + 1,
                message: message.clone(),
            })
            .collect();
        text.push('\n');
        text.push_str(&Table::new(&rows).to_string());
    }

    text
}

/// 打印失败汇总
pub fn print_failures(failures: &[String], verbose: bool) {
    let text = render_failures(failures, verbose);
    if !text.is_empty() {
        eprintln!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_push_preserves_order_single_thread() {
        let agg = ErrorAggregator::new();
        agg.push("first".to_string());
        agg.push("second".to_string());
        assert_eq!(agg.into_messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_concurrent_push_no_loss() {
        let agg = Arc::new(ErrorAggregator::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let agg = Arc::clone(&agg);
                thread::spawn(move || {
                    for i in 0..250 {
                        agg.push(format!("worker {t} item {i} failed: some long cause text"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let messages = Arc::try_unwrap(agg).unwrap().into_messages();
        assert_eq!(messages.len(), 2000);
        assert!(messages
            .iter()
            .all(|m| m.starts_with("worker ") && m.ends_with("some long cause text")));
    }

    fn sample() -> Vec<String> {
        vec![
            "error opening image /in/a.png: bad header".to_string(),
            "error opening image /in/b.png: truncated".to_string(),
            "error saving resized image /out/c.png: denied".to_string(),
        ]
    }

    #[test]
    fn test_render_failures_empty() {
        assert_eq!(render_failures(&[], true), "");
        assert_eq!(render_failures(&[], false), "");
    }

    #[test]
    fn test_render_failures_quiet_only_count() {
        let text = render_failures(&sample(), false);
        assert!(text.contains("3 image operations failed"));
        assert!(!text.contains("bad header"));
        assert!(!text.contains("/in/b.png"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_render_failures_verbose_lists_in_order() {
        let failures = sample();
        let text = render_failures(&failures, true);
        assert!(text.contains("3 image operations failed"));

        let positions: Vec<usize> = failures
            .iter()
            .map(|m| text.find(m.as_str()).expect("message rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        for (i, message) in failures.iter().enumerate() {
            let row = text
                .lines()
                .find(|l| l.contains(message.as_str()))
                .unwrap();
            assert!(row.contains(&format!(" {} ", i + 1)), "{row}");
        }
    }
}
