//! Chapter Context - Errors

use thiserror::Error;

/// 章节代码格式问题的具体原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatViolation {
    /// 长度不是 6 个字符（按字符计数）
    Length(usize),
    /// 指定位置出现非数字字符
    NonDigit { position: usize, found: char },
}

impl std::fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length(len) => write!(f, "长度必须为 6，实际为 {}", len),
            Self::NonDigit { position, found } => {
                write!(f, "第 {} 位不是数字: {:?}", position, found)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChapterCodeError {
    #[error("无效的章节代码 {code:?}: {violation}")]
    InvalidFormat {
        code: String,
        violation: FormatViolation,
    },

    #[error("无效的章节 URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: &'static str },
}

impl ChapterCodeError {
    pub fn invalid_format(code: impl Into<String>, violation: FormatViolation) -> Self {
        Self::InvalidFormat {
            code: code.into(),
            violation,
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason,
        }
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}
