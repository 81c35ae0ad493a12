//! # 命令执行模块
//!
//! 实现缩放命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `config.rs`, `batch/`, `resizer.rs`, `utils/`
//! - 子模块: resize

pub mod resize;

use crate::cli::Cli;
use crate::config::ResizeConfig;
use crate::error::Result;
use crate::resizer::ImageResizer;

/// 执行命令
pub fn run(cli: &Cli) -> Result<()> {
    let config = ResizeConfig::from_cli(cli)?;
    resize::execute(&config, &ImageResizer::new()).map(|_| ())
}
