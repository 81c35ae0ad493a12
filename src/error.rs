//! # 统一错误处理模块
//!
//! 定义 bulkresize 的所有错误类型，使用 `thiserror` 派生。
//!
//! 错误分两级：
//! - 致命错误：配置校验、路径解析、目录遍历失败，任何处理开始前终止运行
//! - 单项错误：单个文件的解码、建目录、写出失败，只记录不中断批处理
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::error::Error as _;
use std::path::PathBuf;
use thiserror::Error;

/// bulkresize 统一错误类型
#[derive(Error, Debug)]
pub enum ResizeError {
    // ─────────────────────────────────────────────────────────────
    // 路径校验
    // ─────────────────────────────────────────────────────────────
    #[error("Input directory {} does not exist", path.display())]
    InputDirNotFound { path: PathBuf },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to create output directory {}", path.display())]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Output directory {} can't be inside the input directory {}",
        output.display(),
        input.display()
    )]
    NestedOutputDir { input: PathBuf, output: PathBuf },

    #[error("Failed to determine the current working directory")]
    CurrentDir(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数校验
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid resolution '{input}': {reason}")]
    InvalidResolution { input: String, reason: String },

    #[error("None of the requested types '{requested}' are supported (supported: {supported})")]
    NoUsableTypes { requested: String, supported: String },

    // ─────────────────────────────────────────────────────────────
    // 枚举与调度
    // ─────────────────────────────────────────────────────────────
    #[error("Error enumerating input files")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to start worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    // ─────────────────────────────────────────────────────────────
    // 单项处理
    // ─────────────────────────────────────────────────────────────
    #[error("error opening image {}", path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("error creating destination folder {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error saving resized image {}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ResizeError {
    /// 进程退出码：校验/枚举类致命错误为 2，其余执行错误为 1
    pub fn exit_code(&self) -> i32 {
        match self {
            ResizeError::ThreadPool(_)
            | ResizeError::ImageOpen { .. }
            | ResizeError::CreateDir { .. }
            | ResizeError::ImageSave { .. } => 1,
            _ => 2,
        }
    }

    /// 展开 source 链的完整描述
    pub fn detailed(&self) -> String {
        let mut msg = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            msg.push_str(": ");
            msg.push_str(&err.to_string());
            cause = err.source();
        }
        msg
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ResizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let nested = ResizeError::NestedOutputDir {
            input: PathBuf::from("/a"),
            output: PathBuf::from("/a/b"),
        };
        assert_eq!(nested.exit_code(), 2);

        let res = ResizeError::InvalidResolution {
            input: "abc".to_string(),
            reason: "missing 'x'".to_string(),
        };
        assert_eq!(res.exit_code(), 2);
    }

    #[test]
    fn test_detailed_includes_cause() {
        let err = ResizeError::CreateDir {
            path: PathBuf::from("/out/sub"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.detailed();
        assert!(msg.starts_with("error creating destination folder /out/sub"));
        assert!(msg.ends_with(": denied"));
    }
}
