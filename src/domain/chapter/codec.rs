//! 章节代码编解码
//!
//! - 显示编号: "100235" -> "23.5"
//! - URL 片段: "200235" -> "-chapter-23.5-index-2-page-1.html"

use super::errors::ChapterCodeError;
use super::value_objects::ChapterCode;

/// 第一页标记
pub const PAGE_ONE: &str = "-page-1";

/// 阅读页扩展名
pub const PAGE_EXTENSION: &str = ".html";

impl ChapterCode {
    /// 人类可读的章节编号
    ///
    /// 小数位为 0 时只输出整数部分，否则输出 `整数.小数位`
    pub fn display_number(&self) -> String {
        let number = self.chapter_number();
        if self.is_whole() {
            number.to_string()
        } else {
            format!("{}.{}", number, self.decimal_digit())
        }
    }

    /// 章节阅读页的 URL 片段
    ///
    /// 顺序固定: 章节号、小数后缀、季后缀、页码标记、扩展名
    pub fn url_fragment(&self) -> String {
        let index_suffix = if self.has_index() {
            format!("-index-{}", self.season_digit())
        } else {
            String::new()
        };

        let decimal_suffix = if self.is_whole() {
            String::new()
        } else {
            format!(".{}", self.decimal_digit())
        };

        format!(
            "-chapter-{}{}{}{}{}",
            self.chapter_number(),
            decimal_suffix,
            index_suffix,
            PAGE_ONE,
            PAGE_EXTENSION
        )
    }
}

/// 解析原始章节代码，失败时记录 warn
pub(super) fn parse_logged(code: &str) -> Result<ChapterCode, ChapterCodeError> {
    ChapterCode::parse(code).inspect_err(|e| {
        tracing::warn!(code, error = %e, "Rejected chapter code");
    })
}

/// 将原始章节代码解码为显示编号
pub fn chapter_display(code: &str) -> Result<String, ChapterCodeError> {
    let parsed = parse_logged(code)?;
    let number = parsed.display_number();
    tracing::debug!(code, display = %number, "Decoded chapter number");
    Ok(number)
}

/// 将原始章节代码编码为 URL 片段
pub fn chapter_url_encode(code: &str) -> Result<String, ChapterCodeError> {
    let parsed = parse_logged(code)?;
    let fragment = parsed.url_fragment();
    tracing::debug!(code, fragment = %fragment, "Encoded chapter URL fragment");
    Ok(fragment)
}
