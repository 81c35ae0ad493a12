//! # 批量执行器
//!
//! 在固定大小的工作线程池中执行全部缩放计划。
//!
//! ## 功能
//! - 基于 rayon 线程池（默认 CPU 核数）
//! - 每项完成恰好推进一次进度，失败恰好记录一条消息
//! - 单项失败不影响其他项，等待全部完成后返回
//! - 返回 `BatchReport`，进度阶段结束后才输出诊断
//!
//! ## 依赖关系
//! - 被 `commands/resize.rs` 调用
//! - 使用 `utils/progress.rs`、`batch/errors.rs`、`resizer.rs`
//! - 使用 `rayon` 进行并行计算

use crate::batch::errors::{self, ErrorAggregator};
use crate::error::Result;
use crate::models::FileOperation;
use crate::resizer::Resizer;
use crate::utils::progress::ProgressReporter;

use rayon::prelude::*;
use std::time::Duration;

/// 批处理结果
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 计划总数
    pub total: usize,
    /// 已完成数量（成功 + 失败）
    pub completed: u64,
    /// 失败详情，按追加顺序
    pub failures: Vec<String>,
    /// 耗时
    pub elapsed: Duration,
    /// 实际使用的工作线程数
    pub jobs: usize,
}

impl BatchReport {
    /// 成功数量
    pub fn succeeded(&self) -> usize {
        self.total.saturating_sub(self.failures.len())
    }

    /// 诊断输出阶段
    pub fn print_failures(&self, verbose: bool) {
        errors::print_failures(&self.failures, verbose);
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否绘制进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器，`jobs == 0` 时使用 CPU 核数
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    /// 关闭进度条绘制（计数仍然进行）
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// 并行执行全部计划
    pub fn run<R>(&self, operations: Vec<FileOperation>, resizer: &R) -> Result<BatchReport>
    where
        R: Resizer + ?Sized,
    {
        let total = operations.len();
        tracing::debug!(total, jobs = self.jobs, "dispatching batch");

        let progress = if self.show_progress {
            ProgressReporter::new(total as u64, "Resizing images")
        } else {
            ProgressReporter::hidden(total as u64)
        };
        let failures = ErrorAggregator::new();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()?;

        // 批处理期间不得向终端输出任何文本
        pool.install(|| {
            operations.par_iter().for_each(|op| {
                if let Err(e) = resizer.resize(op) {
                    failures.push(format!("Error processing image: {}", e.detailed()));
                }
                progress.mark_complete();
            });
        });

        let (completed, elapsed) = progress.finish();

        Ok(BatchReport {
            total,
            completed,
            failures: failures.into_messages(),
            elapsed,
            jobs: self.jobs,
        })
    }
}
