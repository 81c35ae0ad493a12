//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。只做语法层面的解析，
//! 语义校验在 `config.rs` 中完成。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `config.rs` 使用

use clap::Parser;
use std::path::PathBuf;

/// bulkresize - 批量缩放图片目录树
#[derive(Parser, Debug)]
#[command(name = "bulkresize")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Tool for resizing images en masse", long_about = None)]
pub struct Cli {
    /// Location of the image directory
    #[arg(short = 'i', long = "input-dir")]
    pub input_dir: PathBuf,

    /// Location of the output directory. Will be created if it does not exist
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: PathBuf,

    /// Find and resize images from subfolders
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Image file type(s) separated by commas. Supported filetypes are jpg, png, gif, tif, bmp
    #[arg(short = 't', long = "type", default_value = "png,jpg")]
    pub types: String,

    /// Target image resolution in <width>x<height> format (e.g 1920x1080)
    #[arg(short = 'R', long)]
    pub resolution: String,

    /// Print reasoning for all failed operations
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "BULKRESIZE_JOBS")]
    pub jobs: usize,
}
