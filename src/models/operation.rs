//! # 单项操作
//!
//! 枚举阶段为每个匹配文件生成的不可变处理计划。
//!
//! ## 依赖关系
//! - 由 `batch/collector.rs` 创建
//! - 被 `batch/runner.rs` 和 `resizer.rs` 消费

use super::Resolution;

use std::path::{Path, PathBuf};

/// 单个文件的缩放计划（源路径、目标路径、目标尺寸）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOperation {
    origin: PathBuf,
    target: PathBuf,
    resolution: Resolution,
}

impl FileOperation {
    pub fn new(origin: PathBuf, target: PathBuf, resolution: Resolution) -> Self {
        Self {
            origin,
            target,
            resolution,
        }
    }

    /// 将 `origin` 中的 `input_root` 前缀替换为 `output_root`
    ///
    /// `origin` 不在 `input_root` 之下时返回 `None`。
    pub fn between_roots(
        origin: PathBuf,
        input_root: &Path,
        output_root: &Path,
        resolution: Resolution,
    ) -> Option<Self> {
        let relative = origin.strip_prefix(input_root).ok()?;
        let target = output_root.join(relative);
        Some(Self::new(origin, target, resolution))
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }
}
