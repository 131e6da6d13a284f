//! 章节图片地址
//!
//! 图片文件名形如 `0018-001.png`、`0020.5-003.png`

use super::value_objects::ChapterCode;

/// 图片文件名前缀
///
/// 整章补零到 4 位，带小数的补零到 6 位（含小数点）
pub fn image_stem(code: &ChapterCode) -> String {
    let number = code.display_number();
    let width = if code.is_whole() { 4 } else { 6 };
    format!("{:0>width$}", number, width = width)
}

/// 图片所在位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImageLocation {
    /// 图片服务器主机名
    pub host: String,
    /// 作品索引名
    pub index_name: String,
    /// 分季作品的子目录，普通作品为空
    pub directory: String,
}

impl PageImageLocation {
    pub fn new(
        host: impl Into<String>,
        index_name: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            index_name: index_name.into(),
            directory: directory.into(),
        }
    }

    fn directory_segment(&self) -> String {
        if self.directory.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", self.directory)
        }
    }

    /// 第 `page` 页（从 1 开始）的图片地址
    pub fn page_url(&self, code: &ChapterCode, page: u32) -> String {
        format!(
            "https://{}/manga/{}{}{}-{:03}.png",
            self.host,
            self.index_name,
            self.directory_segment(),
            image_stem(code),
            page
        )
    }

    /// 整章 `count` 页的图片地址
    pub fn page_urls(&self, code: &ChapterCode, count: u32) -> Vec<String> {
        (1..=count).map(|page| self.page_url(code, page)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> ChapterCode {
        ChapterCode::parse(raw).unwrap()
    }

    #[test]
    fn test_image_stem_whole() {
        assert_eq!(image_stem(&code("100180")), "0018");
        assert_eq!(image_stem(&code("100000")), "0000");
        assert_eq!(image_stem(&code("199990")), "9999");
    }

    #[test]
    fn test_image_stem_decimal() {
        assert_eq!(image_stem(&code("100205")), "0020.5");
        assert_eq!(image_stem(&code("216455")), "1645.5");
    }

    #[test]
    fn test_page_url_without_directory() {
        let location = PageImageLocation::new("img.example.net", "Ramen-Daisuki-Koizumi-San", "");
        assert_eq!(
            location.page_url(&code("100180"), 1),
            "https://img.example.net/manga/Ramen-Daisuki-Koizumi-San/0018-001.png"
        );
    }

    #[test]
    fn test_page_url_with_directory() {
        let location = PageImageLocation::new("img.example.net", "Kubera", "S2");
        assert_eq!(
            location.page_url(&code("201645"), 12),
            "https://img.example.net/manga/Kubera/S2/0164.5-012.png"
        );
    }

    #[test]
    fn test_page_urls_count() {
        let location = PageImageLocation::new("img.example.net", "Inu", "");
        let urls = location.page_urls(&code("100000"), 3);
        assert_eq!(
            urls,
            vec![
                "https://img.example.net/manga/Inu/0000-001.png",
                "https://img.example.net/manga/Inu/0000-002.png",
                "https://img.example.net/manga/Inu/0000-003.png",
            ]
        );
        assert!(location.page_urls(&code("100000"), 0).is_empty());
    }
}
