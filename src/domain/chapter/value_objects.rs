//! Chapter Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::{ChapterCodeError, FormatViolation};

/// 章节代码固定长度
pub const CODE_LEN: usize = 6;

/// 章节代码
///
/// 六位十进制数字:
/// - 第 0 位: 季号，1 表示无分季
/// - 第 1-4 位: 章节整数部分，补零到 4 位
/// - 第 5 位: 小数位，0 表示整章
///
/// 不变量: 构造成功后内容一定是 6 个 ASCII 数字
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChapterCode(String);

impl ChapterCode {
    pub fn parse(code: &str) -> Result<Self, ChapterCodeError> {
        let len = code.chars().count();
        if len != CODE_LEN {
            return Err(ChapterCodeError::invalid_format(
                code,
                FormatViolation::Length(len),
            ));
        }

        if let Some((position, found)) = code
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_digit())
        {
            return Err(ChapterCodeError::invalid_format(
                code,
                FormatViolation::NonDigit { position, found },
            ));
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    fn digit(&self, index: usize) -> u8 {
        self.0.as_bytes()[index] - b'0'
    }

    /// 季号（第一位）
    pub fn season_digit(&self) -> u8 {
        self.digit(0)
    }

    /// 章节整数部分，前导零已去除
    pub fn chapter_number(&self) -> u16 {
        self.0.as_bytes()[1..CODE_LEN - 1]
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
    }

    /// 小数位（最后一位）
    pub fn decimal_digit(&self) -> u8 {
        self.digit(CODE_LEN - 1)
    }

    /// 是否需要 `-index-N` 后缀
    pub fn has_index(&self) -> bool {
        self.season_digit() != 1
    }

    /// 是否为整章（无小数部分）
    pub fn is_whole(&self) -> bool {
        self.decimal_digit() == 0
    }
}

impl FromStr for ChapterCode {
    type Err = ChapterCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ChapterCode {
    type Error = ChapterCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for ChapterCode {
    type Error = ChapterCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ChapterCode> for String {
    fn from(code: ChapterCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for ChapterCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_fields() {
        let code = ChapterCode::parse("200235").unwrap();
        assert_eq!(code.season_digit(), 2);
        assert_eq!(code.chapter_number(), 23);
        assert_eq!(code.decimal_digit(), 5);
        assert!(code.has_index());
        assert!(!code.is_whole());
        assert_eq!(code.as_str(), "200235");
    }

    #[test]
    fn test_chapter_number_bounds() {
        assert_eq!(ChapterCode::parse("100000").unwrap().chapter_number(), 0);
        assert_eq!(ChapterCode::parse("199990").unwrap().chapter_number(), 9999);
    }

    #[test]
    fn test_default_season_has_no_index() {
        let code = ChapterCode::parse("100230").unwrap();
        assert!(!code.has_index());
        assert!(code.is_whole());
    }

    #[test]
    fn test_wrong_length_rejected() {
        for input in ["", "12", "10023", "1002300"] {
            let err = ChapterCode::parse(input).unwrap_err();
            assert_eq!(
                err,
                ChapterCodeError::invalid_format(
                    input,
                    FormatViolation::Length(input.chars().count())
                )
            );
        }
    }

    #[test]
    fn test_non_digit_reports_position() {
        let err = ChapterCode::parse("12345a").unwrap_err();
        assert_eq!(
            err,
            ChapterCodeError::invalid_format(
                "12345a",
                FormatViolation::NonDigit {
                    position: 5,
                    found: 'a'
                }
            )
        );

        assert!(ChapterCode::parse("1 0023").unwrap_err().is_invalid_format());
        assert!(ChapterCode::parse("-10023").unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_multibyte_input_counted_by_chars() {
        // 六个字符但十二个字节
        let err = ChapterCode::parse("一二三四五六").unwrap_err();
        assert!(matches!(
            err,
            ChapterCodeError::InvalidFormat {
                violation: FormatViolation::NonDigit { position: 0, .. },
                ..
            }
        ));

        let err = ChapterCode::parse("１００２３０").unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: ChapterCode = "100235".parse().unwrap();
        let b = ChapterCode::try_from(String::from("100235")).unwrap();
        let c = ChapterCode::try_from("100235").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert!(ChapterCode::try_from("abc").is_err());
    }

    #[test]
    fn test_display_renders_raw_code() {
        let code = ChapterCode::parse("100010").unwrap();
        assert_eq!(code.to_string(), "100010");
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let code = ChapterCode::parse("300120").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"300120\"");

        let back: ChapterCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        assert!(serde_json::from_str::<ChapterCode>("\"30012\"").is_err());
        assert!(serde_json::from_str::<ChapterCode>("\"3001x0\"").is_err());
    }
}
