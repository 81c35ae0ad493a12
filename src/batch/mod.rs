//! # 批量处理模块
//!
//! 枚举、调度、汇总三段式的批处理流水线。
//!
//! ## 功能
//! - 收集匹配文件并生成缩放计划
//! - 固定大小线程池并行执行
//! - 进度反馈与失败汇总
//!
//! ## 依赖关系
//! - 被 `commands/resize.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod errors;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchReport, BatchRunner};
