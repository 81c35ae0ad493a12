//! # 工具函数模块
//!
//! 提供美化输出、进度条、路径解析等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`、`batch/`、`config.rs` 使用
//! - 子模块: output, paths, progress

pub mod output;
pub mod paths;
pub mod progress;
