//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 站点配置
    #[serde(default)]
    pub site: SiteConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 站点配置
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// 阅读页 Base URL，章节 URL 片段拼接在 `<base_url><index_name>` 之后
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 图片服务器主机名，为空表示未配置
    #[serde(default)]
    pub image_host: String,
}

pub(crate) fn default_base_url() -> String {
    "https://mangasee123.com/read-online/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_host: String::new(),
        }
    }
}

impl SiteConfig {
    /// 图片服务器主机名（未配置时为 None）
    pub fn image_host(&self) -> Option<&str> {
        if self.image_host.is_empty() {
            None
        } else {
            Some(&self.image_host)
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
