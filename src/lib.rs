//! chapcode - 章节代码编解码
//!
//! 章节代码是六位数字字符串：季号 + 四位章节号 + 小数位。
//!
//! 领域层 (domain/):
//! - Chapter Context: 章节代码校验、显示编号、URL 片段、阅读页 URL 比较、图片地址
//!
//! 配置 (config/):
//! - 环境变量 > 配置文件 > 默认值

pub mod config;
pub mod domain;

pub use config::{load_config, AppConfig};
pub use domain::chapter::{chapter_display, chapter_url_encode, ChapterCode, ChapterCodeError};
