//! # 运行配置
//!
//! 命令行参数校验后构造一次的不可变配置，按引用传给各组件。
//!
//! ## 校验顺序
//! 1. 分辨率格式
//! 2. 请求的图片类型
//! 3. 输入/输出目录（最后一步才可能创建输出目录）
//!
//! ## 依赖关系
//! - 被 `commands/resize.rs` 使用
//! - 使用 `cli/`、`models/`、`utils/paths.rs`

use crate::cli::Cli;
use crate::error::{ResizeError, Result};
use crate::models::{ImageType, Resolution, TypeSet};
use crate::utils::paths::{self, ResolvedDirs};

use std::path::{Path, PathBuf};

/// 校验后的运行配置
#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub recursive: bool,
    pub types: TypeSet,
    pub resolution: Resolution,
    pub verbose: bool,
    /// 并行作业数，0 = CPU 核数
    pub jobs: usize,
}

impl ResizeConfig {
    /// 从命令行参数构造
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::build(
            &cli.input_dir,
            &cli.output_dir,
            &cli.types,
            &cli.resolution,
            cli.recursive,
            cli.verbose,
            cli.jobs,
        )
    }

    fn build(
        input_dir: &Path,
        output_dir: &Path,
        types: &str,
        resolution: &str,
        recursive: bool,
        verbose: bool,
        jobs: usize,
    ) -> Result<Self> {
        let resolution = Resolution::parse(resolution)?;

        let types = TypeSet::parse(types);
        for ignored in types.ignored() {
            tracing::warn!(requested = %ignored, "ignoring unsupported image type");
        }
        if types.is_empty() {
            return Err(ResizeError::NoUsableTypes {
                requested: types.ignored().join(","),
                supported: ImageType::supported_list(),
            });
        }

        let ResolvedDirs { input, output } = paths::resolve_dirs(input_dir, output_dir)?;

        Ok(Self {
            input_dir: input,
            output_dir: output,
            recursive,
            types,
            resolution,
            verbose,
            jobs,
        })
    }
}
