//! # 进度条工具
//!
//! 封装 `indicatif`，提供批处理阶段使用的进度计数器。
//!
//! 批处理期间进度条独占终端，不允许插入其他输出；
//! `finish` 消费计数器，之后才进入诊断输出阶段。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// 进度条刷新频率：最多每 200ms 重绘一次
const REFRESH_HZ: u8 = 5;

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr_with_hz(REFRESH_HZ));
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// 线程安全的完成计数器
///
/// 计数与显示分离：显示可能被节流，计数不会丢失。
pub struct ProgressReporter {
    bar: ProgressBar,
    completed: AtomicU64,
    total: u64,
}

impl ProgressReporter {
    /// 终端进度条
    pub fn new(total: u64, message: &str) -> Self {
        Self {
            bar: create_progress_bar(total, message),
            completed: AtomicU64::new(0),
            total,
        }
    }

    /// 不绘制的计数器
    pub fn hidden(total: u64) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: AtomicU64::new(0),
            total,
        }
    }

    /// 标记一项完成（无论成功失败）
    pub fn mark_complete(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.bar.inc(1);
    }

    /// 结束进度阶段，返回最终计数和耗时
    pub fn finish(self) -> (u64, Duration) {
        let elapsed = self.bar.elapsed();
        self.bar.finish();
        let completed = self.completed.into_inner();
        tracing::debug!(completed, total = self.total, ?elapsed, "progress finished");
        (completed, elapsed)
    }
}
