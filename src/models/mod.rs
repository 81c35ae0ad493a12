//! # 数据模型模块
//!
//! 定义批处理计划中的数据模型：图片类型、目标分辨率、单项操作。
//!
//! ## 依赖关系
//! - 被 `config.rs`、`batch/` 和 `commands/` 使用
//! - 子模块: image_type, operation, resolution

pub mod image_type;
pub mod operation;
pub mod resolution;

pub use image_type::{ImageType, TypeSet};
pub use operation::FileOperation;
pub use resolution::Resolution;
