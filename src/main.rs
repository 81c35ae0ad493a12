//! # bulkresize - 批量图片缩放工具
//!
//! 将输入目录树中的图片统一缩放到指定分辨率，按相同的相对结构写入输出目录。
//!
//! ## 退出码
//! - `0` 成功（包括没有匹配文件）
//! - `1` 命令执行错误（参数解析失败、线程池启动失败）
//! - `2` 校验或枚举阶段的致命错误
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── config.rs   (参数校验，构造不可变配置)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (枚举、并行调度、失败汇总)
//!   │     ├── resizer.rs (单项缩放)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、路径)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod resizer;
mod utils;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = commands::run(&cli) {
        tracing::debug!(error = ?e, "run failed");
        utils::output::print_error(&e.detailed());
        std::process::exit(e.exit_code());
    }
}

/// 日志输出到 stderr；默认 WARN，`--verbose` 为 DEBUG，`RUST_LOG` 优先
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
