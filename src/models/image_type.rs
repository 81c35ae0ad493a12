//! # 图片类型
//!
//! 支持的图片扩展名集合与 `--type` 参数解析。
//!
//! ## 功能
//! - 固定的支持集合: jpg, png, gif, tif, bmp
//! - 同义扩展名归一化 (jpeg -> jpg, tiff -> tif)
//! - 大小写不敏感，允许带或不带前导 `.`
//!
//! ## 依赖关系
//! - 被 `config.rs` 和 `batch/collector.rs` 使用

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// 支持的图片类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageType {
    Jpg,
    Png,
    Gif,
    Tif,
    Bmp,
}

impl ImageType {
    /// 全部支持的类型
    pub const ALL: [ImageType; 5] = [
        ImageType::Jpg,
        ImageType::Png,
        ImageType::Gif,
        ImageType::Tif,
        ImageType::Bmp,
    ];

    /// 从扩展名解析（大小写不敏感，折叠同义词）
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim().trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageType::Jpg),
            "png" => Some(ImageType::Png),
            "gif" => Some(ImageType::Gif),
            "tif" | "tiff" => Some(ImageType::Tif),
            "bmp" => Some(ImageType::Bmp),
            _ => None,
        }
    }

    /// 从文件路径的扩展名解析
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// 规范扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ImageType::Jpg => "jpg",
            ImageType::Png => "png",
            ImageType::Gif => "gif",
            ImageType::Tif => "tif",
            ImageType::Bmp => "bmp",
        }
    }

    /// 逗号分隔的支持列表，用于帮助信息和错误提示
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|t| t.extension())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 用户请求且受支持的类型集合
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeSet {
    types: BTreeSet<ImageType>,
    /// 请求了但不在支持集合内的条目（已归一化）
    ignored: Vec<String>,
}

impl TypeSet {
    /// 解析逗号分隔的类型列表，空条目跳过，不支持的条目记入 `ignored`
    pub fn parse(raw: &str) -> Self {
        let mut set = Self::default();
        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match ImageType::from_extension(entry) {
                Some(t) => {
                    set.types.insert(t);
                }
                None => set
                    .ignored
                    .push(entry.trim_start_matches('.').to_lowercase()),
            }
        }
        set
    }

    /// 路径扩展名是否在集合内
    pub fn matches(&self, path: &Path) -> bool {
        ImageType::from_path(path).is_some_and(|t| self.contains(t))
    }

    pub fn contains(&self, t: ImageType) -> bool {
        self.types.contains(&t)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    pub fn iter(&self) -> impl Iterator<Item = ImageType> + '_ {
        self.types.iter().copied()
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.iter().map(|t| t.extension()).collect();
        write!(f, "{}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_fold() {
        assert_eq!(ImageType::from_extension("jpeg"), Some(ImageType::Jpg));
        assert_eq!(ImageType::from_extension(".TIFF"), Some(ImageType::Tif));
        assert_eq!(ImageType::from_extension("Png"), Some(ImageType::Png));
        assert_eq!(ImageType::from_extension("webp"), None);
    }

    #[test]
    fn test_parse_default_types() {
        let set = TypeSet::parse("png,jpg");
        assert!(set.contains(ImageType::Png));
        assert!(set.contains(ImageType::Jpg));
        assert!(!set.contains(ImageType::Gif));
        assert_eq!(set.to_string(), "jpg,png");
    }

    #[test]
    fn test_parse_skips_empty_and_collects_unsupported() {
        let set = TypeSet::parse(" .JPEG, ,webp,,tiff");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![ImageType::Jpg, ImageType::Tif]);
        assert_eq!(set.ignored(), ["webp".to_string()]);
    }

    #[test]
    fn test_parse_only_unsupported_is_empty() {
        let set = TypeSet::parse("webp,svg");
        assert!(set.is_empty());
        assert_eq!(set.ignored().len(), 2);
    }

    #[test]
    fn test_matches_path() {
        let set = TypeSet::parse("jpg");
        assert!(set.matches(Path::new("/in/photo.JPG")));
        assert!(set.matches(Path::new("/in/photo.jpeg")));
        assert!(!set.matches(Path::new("/in/photo.png")));
        assert!(!set.matches(Path::new("/in/README")));
    }
}
