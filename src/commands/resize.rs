//! # resize 命令实现
//!
//! 批量缩放图片目录树。
//!
//! ## 流程
//! 1. 按配置枚举输入文件，生成缩放计划
//! 2. 无匹配文件时提示并正常结束
//! 3. 线程池并行执行，期间只显示进度条
//! 4. 进度条结束后输出失败汇总与统计
//!
//! ## 依赖关系
//! - 使用 `config.rs` 提供的已校验配置
//! - 使用 `batch/`、`resizer.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchReport, BatchRunner, FileCollector};
use crate::config::ResizeConfig;
use crate::error::Result;
use crate::resizer::Resizer;
use crate::utils::output;

/// 执行 resize 命令
pub fn execute<R>(config: &ResizeConfig, resizer: &R) -> Result<BatchReport>
where
    R: Resizer + ?Sized,
{
    output::print_header(&format!("Resizing images to {}", config.resolution));
    output::print_mapping(
        &config.input_dir.display().to_string(),
        &config.output_dir.display().to_string(),
    );

    let operations = FileCollector::new(
        &config.input_dir,
        &config.output_dir,
        &config.types,
        config.resolution,
    )
    .recursive(config.recursive)
    .collect()?;

    if operations.is_empty() {
        output::print_warning("No files found");
        return Ok(BatchReport::default());
    }

    output::print_info(&format!(
        "Found {} image(s) of type {}",
        operations.len(),
        config.types
    ));

    let report = BatchRunner::new(config.jobs).run(operations, resizer)?;

    report.print_failures(config.verbose);
    output::print_done(&format!(
        "Resized {} of {} image(s) into '{}' in {:.2?} ({} workers)",
        report.succeeded(),
        report.total,
        config.output_dir.display(),
        report.elapsed,
        report.jobs
    ));

    Ok(report)
}
