//! Chapter Context - 章节代码限界上下文
//!
//! 职责:
//! - 章节代码校验与字段拆分
//! - 显示编号与 URL 片段编码
//! - 阅读页 URL 解析与比较
//! - 章节图片地址

mod codec;
mod errors;
mod pages;
mod url;
mod value_objects;

pub use codec::{chapter_display, chapter_url_encode, PAGE_EXTENSION, PAGE_ONE};
pub use errors::{ChapterCodeError, FormatViolation};
pub use pages::{image_stem, PageImageLocation};
pub use url::{chapter_read_online_url, chapters_are_equal, read_online_url, ChapterUrl};
pub use value_objects::{ChapterCode, CODE_LEN};
