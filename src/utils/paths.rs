//! # 路径解析
//!
//! 将输入/输出目录参数规范化为绝对路径并校验。
//!
//! ## 功能
//! - 相对路径基于当前工作目录转为绝对路径，并按词法消去 `.` 与 `..`
//! - 输入目录必须存在且为目录
//! - 输出目录不能等于或位于输入目录之下
//! - 输出目录不存在时递归创建 (Unix 下权限 0755)
//!
//! ## 依赖关系
//! - 被 `config.rs` 调用

use crate::error::{ResizeError, Result};

use std::fs;
use std::path::{Component, Path, PathBuf};

/// 校验后的输入/输出根目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirs {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// 解析并校验输入/输出目录，必要时创建输出目录
///
/// 嵌套检查先于创建执行，被拒绝的配置不会在输入树中留下空目录。
pub fn resolve_dirs(input: &Path, output: &Path) -> Result<ResolvedDirs> {
    let input = absolute_clean(input)?;
    if !input.exists() {
        return Err(ResizeError::InputDirNotFound { path: input });
    }
    if !input.is_dir() {
        return Err(ResizeError::NotADirectory { path: input });
    }

    let output = absolute_clean(output)?;
    if output.starts_with(&input) {
        return Err(ResizeError::NestedOutputDir { input, output });
    }

    if output.exists() {
        if !output.is_dir() {
            return Err(ResizeError::NotADirectory { path: output });
        }
    } else {
        create_dir_tree(&output).map_err(|source| ResizeError::OutputDirCreate {
            path: output.clone(),
            source,
        })?;
        tracing::debug!(path = %output.display(), "created output directory");
    }

    Ok(ResolvedDirs { input, output })
}

/// 转为绝对路径并按词法清理
pub fn absolute_clean(path: &Path) -> Result<PathBuf> {
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(ResizeError::CurrentDir)?
            .join(path)
    };
    Ok(clean(&abs))
}

/// 词法清理：去掉 `.`，`..` 回退一级（根目录之上保持在根）
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// 递归创建目录，已存在不视为错误
pub fn create_dir_tree(path: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path)
}
