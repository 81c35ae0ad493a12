//! # 文件收集器
//!
//! 遍历输入目录，生成待处理的缩放计划列表。
//!
//! ## 功能
//! - 深度优先遍历，非递归模式只看根目录下的文件
//! - 扩展名过滤（大小写不敏感，同义词归一）
//! - 目标路径 = 源路径中输入根替换为输出根
//! - 每个目录内按文件名排序，结果对固定文件树是确定的
//! - 指向文件的符号链接会被收集，符号链接目录不会进入
//!
//! ## 依赖关系
//! - 被 `commands/resize.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::Result;
use crate::models::{FileOperation, Resolution, TypeSet};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector<'a> {
    /// 输入根目录
    input: PathBuf,
    /// 输出根目录
    output: PathBuf,
    /// 接受的类型
    types: &'a TypeSet,
    /// 目标分辨率
    resolution: Resolution,
    /// 是否递归
    recursive: bool,
}

impl<'a> FileCollector<'a> {
    /// 创建新的文件收集器
    pub fn new(input: &Path, output: &Path, types: &'a TypeSet, resolution: Resolution) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            types,
            resolution,
            recursive: false,
        }
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    ///
    /// 任一目录项读取失败都会使整个枚举失败。
    pub fn collect(&self) -> Result<Vec<FileOperation>> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let walker = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name();

        let mut operations = Vec::new();
        for entry in walker {
            let entry = entry?;
            // 符号链接目录不进入；指向文件的符号链接按普通文件处理
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file || !self.types.matches(entry.path()) {
                continue;
            }

            let origin = entry.into_path();
            if let Some(op) =
                FileOperation::between_roots(origin, &self.input, &self.output, self.resolution)
            {
                operations.push(op);
            }
        }

        tracing::debug!(
            root = %self.input.display(),
            recursive = self.recursive,
            matched = operations.len(),
            "enumerated input files"
        );

        Ok(operations)
    }
}
