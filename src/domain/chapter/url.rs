//! 章节阅读页 URL
//!
//! 站点对章节号是否补零不敏感（`-chapter-0018-` 与 `-chapter-18-` 指向同一页），
//! 因此比较两个 URL 时需要解析出语义字段再比较。

use super::codec::{parse_logged, PAGE_EXTENSION};
use super::errors::ChapterCodeError;
use super::value_objects::ChapterCode;

const CHAPTER_MARKER: &str = "-chapter-";
const INDEX_MARKER: &str = "-index-";
const PAGE_MARKER: &str = "-page-";

/// 拼接完整的章节阅读页 URL
///
/// `base_url` 末尾的 `/` 会被规整为恰好一个
pub fn read_online_url(base_url: &str, index_name: &str, code: &ChapterCode) -> String {
    format!(
        "{}/{}{}",
        base_url.trim_end_matches('/'),
        index_name,
        code.url_fragment()
    )
}

/// 由原始章节代码拼接完整的章节阅读页 URL
pub fn chapter_read_online_url(
    base_url: &str,
    index_name: &str,
    code: &str,
) -> Result<String, ChapterCodeError> {
    let parsed = parse_logged(code)?;
    let url = read_online_url(base_url, index_name, &parsed);
    tracing::debug!(code, index_name, url = %url, "Built read-online URL");
    Ok(url)
}

/// 从阅读页 URL 中解析出的章节信息
///
/// 数字字段保存为去掉前导零的数字串，任意长度都不会溢出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterUrl {
    /// 章节整数部分
    chapter: String,
    /// 小数位
    decimal: Option<u8>,
    /// 季号（`-index-N`）
    index: Option<String>,
    /// 页码
    page: String,
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// "0018" -> "18"，"0000" -> "0"
fn strip_zeros(digits: &str) -> String {
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        rest => rest.to_string(),
    }
}

impl ChapterUrl {
    /// 解析以 `-chapter-<N>[.<D>][-index-<S>]-page-<P>.html` 结尾的 URL
    pub fn parse(url: &str) -> Result<Self, ChapterCodeError> {
        let invalid = |reason| ChapterCodeError::invalid_url(url, reason);

        let stem = url
            .strip_suffix(PAGE_EXTENSION)
            .ok_or_else(|| invalid("缺少 .html 后缀"))?;

        let (head, page) = stem
            .rsplit_once(PAGE_MARKER)
            .ok_or_else(|| invalid("缺少页码标记"))?;
        if !all_digits(page) {
            return Err(invalid("页码不是数字"));
        }

        let (_, rest) = head
            .rsplit_once(CHAPTER_MARKER)
            .ok_or_else(|| invalid("缺少章节标记"))?;

        let (number, index) = match rest.split_once(INDEX_MARKER) {
            Some((number, index)) => {
                if !all_digits(index) {
                    return Err(invalid("季号不是数字"));
                }
                (number, Some(index))
            }
            None => (rest, None),
        };

        let (chapter, decimal) = match number.split_once('.') {
            Some((chapter, decimal)) => {
                if decimal.len() != 1 || !all_digits(decimal) {
                    return Err(invalid("小数部分必须是一位数字"));
                }
                (chapter, Some(decimal))
            }
            None => (number, None),
        };
        if !all_digits(chapter) {
            return Err(invalid("章节号不是数字"));
        }

        Ok(Self {
            chapter: strip_zeros(chapter),
            decimal: decimal.map(|d| d.as_bytes()[0] - b'0'),
            index: index.map(strip_zeros),
            page: strip_zeros(page),
        })
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    pub fn decimal(&self) -> Option<u8> {
        self.decimal
    }

    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    /// 缺省季号为 1
    fn effective_index(&self) -> &str {
        self.index.as_deref().unwrap_or("1")
    }

    /// 缺省小数位为 0
    fn effective_decimal(&self) -> u8 {
        self.decimal.unwrap_or(0)
    }

    /// 同一章节（忽略页码与补零）
    pub fn same_chapter(&self, other: &Self) -> bool {
        self.chapter == other.chapter
            && self.effective_decimal() == other.effective_decimal()
            && self.effective_index() == other.effective_index()
    }

    /// 还原为章节代码
    pub fn to_code(&self) -> Result<ChapterCode, ChapterCodeError> {
        let rendered = format!("chapter {} index {:?}", self.chapter, self.index);
        if self.chapter.len() > 4 {
            return Err(ChapterCodeError::invalid_url(rendered, "章节号超过 4 位"));
        }
        let season = self.effective_index();
        if season.len() > 1 {
            return Err(ChapterCodeError::invalid_url(rendered, "季号超过 1 位"));
        }
        ChapterCode::parse(&format!(
            "{}{:0>4}{}",
            season,
            self.chapter,
            self.effective_decimal()
        ))
    }
}

/// 比较两个阅读页 URL 是否指向同一章节
///
/// 任一方无法解析时视为不相等
pub fn chapters_are_equal(one: &str, two: &str) -> bool {
    match (ChapterUrl::parse(one), ChapterUrl::parse(two)) {
        (Ok(a), Ok(b)) => a.same_chapter(&b),
        _ => false,
    }
}
