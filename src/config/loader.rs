//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（chapcode.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{default_base_url, default_log_level, AppConfig};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["chapcode", "chapcode.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "CHAPCODE";

/// 允许的日志级别
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `CHAPCODE_`，层级分隔符 `__`）
/// 2. 配置文件（chapcode.toml 或 chapcode.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `CHAPCODE_SITE__BASE_URL=https://mirror.example.net/read-online/`
/// - `CHAPCODE_SITE__IMAGE_HOST=img.example.net`
/// - `CHAPCODE_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_env_prefix(config_path, ENV_PREFIX)
}

fn load_config_with_env_prefix(
    config_path: Option<&Path>,
    env_prefix: &str,
) -> Result<AppConfig, ConfigError> {
    // 1. 首先设置默认值（最低优先级）
    let mut builder = Config::builder()
        .set_default("site.base_url", default_base_url())?
        .set_default("site.image_host", "")?
        .set_default("log.level", default_log_level())?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 层级分隔符: __ (双下划线)
    // 例如: CHAPCODE_SITE__BASE_URL=https://mirror.example.net/read-online/
    builder = builder.add_source(
        Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let base_url = &config.site.base_url;
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Site base URL cannot be empty".to_string(),
        ));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "Site base URL must start with http:// or https://: {}",
            base_url
        )));
    }

    let level = config.log.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Unknown log level: {}",
            config.log.level
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Application Configuration ===");
    tracing::debug!("Base URL: {}", config.site.base_url);
    tracing::debug!(
        "Image Host: {}",
        config.site.image_host().unwrap_or("<unset>")
    );
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("=================================");
}
