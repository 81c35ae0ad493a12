//! # 图片缩放
//!
//! 单项操作的执行者：解码、缩放、写出。
//!
//! ## 功能
//! - `Resizer` trait：调度器与具体实现之间的接缝
//! - `ImageResizer`：基于 `image` crate，Lanczos3 拉伸到精确尺寸（不保持宽高比）
//!
//! 输出格式由目标扩展名决定；目标文件名沿用源文件名。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `utils/paths.rs` 创建目标目录
//! - 使用 `image` crate

use crate::error::{ResizeError, Result};
use crate::models::FileOperation;
use crate::utils::paths;

use image::imageops::FilterType;

/// 单项缩放能力，需可在多个工作线程间共享
pub trait Resizer: Sync {
    fn resize(&self, op: &FileOperation) -> Result<()>;
}

/// 基于 `image` crate 的缩放实现
#[derive(Debug, Clone, Copy)]
pub struct ImageResizer {
    filter: FilterType,
}

impl Default for ImageResizer {
    fn default() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

impl ImageResizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resizer for ImageResizer {
    fn resize(&self, op: &FileOperation) -> Result<()> {
        let src = image::open(op.origin()).map_err(|source| ResizeError::ImageOpen {
            path: op.origin().to_path_buf(),
            source,
        })?;

        let dst = src.resize_exact(op.width(), op.height(), self.filter);

        if let Some(parent) = op.target().parent() {
            paths::create_dir_tree(parent).map_err(|source| ResizeError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        dst.save(op.target()).map_err(|source| ResizeError::ImageSave {
            path: op.target().to_path_buf(),
            source,
        })?;

        tracing::trace!(
            origin = %op.origin().display(),
            target = %op.target().display(),
            "resized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resolution;
    use image::{GenericImageView, Rgb, RgbImage};
    use std::fs;
    use tempfile::tempdir;

    fn op(origin: std::path::PathBuf, target: std::path::PathBuf, w: u32, h: u32) -> FileOperation {
        FileOperation::new(origin, target, Resolution { width: w, height: h })
    }

    #[test]
    fn test_resize_exact_stretches() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("wide.png");
        RgbImage::from_pixel(40, 10, Rgb([200, 10, 10])).save(&src).unwrap();

        let target = tmp.path().join("out/nested/wide.png");
        ImageResizer::new()
            .resize(&op(src, target.clone(), 8, 8))
            .unwrap();

        let out = image::open(&target).unwrap();
        assert_eq!(out.dimensions(), (8, 8));
    }

    #[test]
    fn test_resize_keeps_jpeg_format_from_extension() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("a.jpg");
        RgbImage::from_pixel(16, 16, Rgb([0, 128, 255])).save(&src).unwrap();

        let target = tmp.path().join("out/a.jpg");
        ImageResizer::new()
            .resize(&op(src, target.clone(), 4, 2))
            .unwrap();

        assert_eq!(
            image::ImageFormat::from_path(&target).unwrap(),
            image::ImageFormat::Jpeg
        );
        assert_eq!(image::open(&target).unwrap().dimensions(), (4, 2));
    }

    #[test]
    fn test_corrupt_input_reports_origin() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("broken.png");
        fs::write(&src, b"definitely not a png").unwrap();

        let err = ImageResizer::new()
            .resize(&op(src.clone(), tmp.path().join("out/broken.png"), 4, 4))
            .unwrap_err();

        assert!(matches!(err, ResizeError::ImageOpen { .. }));
        assert!(err.to_string().contains(&src.display().to_string()));
        assert!(!tmp.path().join("out/broken.png").exists());
    }
}
