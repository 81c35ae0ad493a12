//! # 目标分辨率
//!
//! 解析 `<width>x<height>` 格式的分辨率字符串。
//!
//! ## 依赖关系
//! - 被 `config.rs` 使用
//! - 使用 `regex` 校验格式

use crate::error::{ResizeError, Result};

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RESOLUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*x\s*(\d+)\s*$").expect("resolution pattern is a valid regex")
});

/// 目标分辨率（宽高均 >= 1）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// 解析分辨率字符串（先去除首尾空白并转为小写）
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();

        let invalid = |reason: &str| ResizeError::InvalidResolution {
            input: raw.to_string(),
            reason: reason.to_string(),
        };

        if !normalized.contains('x') {
            return Err(invalid("missing \"x\" as a dimensional separator"));
        }

        let caps = RESOLUTION_RE
            .captures(&normalized)
            .ok_or_else(|| invalid("expected <width>x<height>, e.g. 1920x1080"))?;

        let width: u32 = caps[1]
            .parse()
            .map_err(|_| invalid("unable to parse width"))?;
        let height: u32 = caps[2]
            .parse()
            .map_err(|_| invalid("unable to parse height"))?;

        if width == 0 || height == 0 {
            return Err(invalid("width and height must be at least 1"));
        }

        Ok(Self { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
