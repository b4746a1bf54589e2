use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::qr::ErrorCorrection;

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - api: 后端地址、令牌、超时
/// - ui: 分页、toast 时长、刷新节拍
/// - qr: 二维码默认渲染参数
/// - storage: 本地偏好文件位置
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > linkdeck.toml > 默认值
    /// ENV 前缀：LINKDECK，分隔符：__
    /// 示例：LINKDECK__API__BASE_URL=https://s.example.com/api
    pub fn load() -> Self {
        Self::load_from("linkdeck.toml")
    }

    /// 从指定路径加载（文件可以不存在）
    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("LINKDECK")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        tracing::debug!("Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// REST API 根地址，例如 http://127.0.0.1:8080/api
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Bearer 令牌（为空则不发送 Authorization）
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
    /// 短链对外访问前缀，QR 码内容使用；未设置时由 base_url 推导
    #[serde(default)]
    pub public_base_url: Option<String>,
}

impl ApiConfig {
    /// 拼出某个短码对外的完整地址
    pub fn short_url(&self, short_code: &str) -> String {
        let base = match &self.public_base_url {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_string(),
            _ => derive_public_base(&self.base_url),
        };
        format!("{}/{}", base, short_code)
    }
}

/// 去掉 base_url 尾部的 `/api` 段
fn derive_public_base(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    trimmed
        .strip_suffix("/api")
        .unwrap_or(trimmed)
        .to_string()
}

/// 界面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub language: Language,
}

/// 二维码默认参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrConfig {
    #[serde(default = "default_qr_size")]
    pub size_px: u32,
    #[serde(default)]
    pub error_correction: ErrorCorrection,
    #[serde(default = "default_quiet_zone")]
    pub quiet_zone: bool,
    /// 链接开启 with_logo 时叠加的图标
    #[serde(default)]
    pub logo_path: Option<String>,
}

/// 本地持久化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_preferences_file")]
    pub preferences_file: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default)]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_api_base_url() -> String {
    "http://127.0.0.1:8080/api".to_string()
}

fn default_api_timeout() -> u64 {
    10
}

fn default_page_size() -> u64 {
    20
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    200
}

fn default_qr_size() -> u32 {
    256
}

fn default_quiet_zone() -> bool {
    true
}

fn default_preferences_file() -> String {
    ".linkdeck/preferences.toml".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            token: None,
            timeout_secs: default_api_timeout(),
            public_base_url: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            toast_duration_ms: default_toast_duration_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            language: Language::default(),
        }
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size_px: default_qr_size(),
            error_correction: ErrorCorrection::default(),
            quiet_zone: default_quiet_zone(),
            logo_path: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_file: default_preferences_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_derived_from_api_base() {
        let api = ApiConfig {
            base_url: "https://s.example.com/api/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.short_url("abc"), "https://s.example.com/abc");
    }

    #[test]
    fn test_short_url_with_public_base() {
        let api = ApiConfig {
            public_base_url: Some("https://go.example.org/".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.short_url("xyz"), "https://go.example.org/xyz");
    }

    #[test]
    fn test_sample_config_roundtrip() {
        let sample = StaticConfig::generate_sample_config();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.ui.default_page_size, 20);
        assert_eq!(parsed.qr.size_px, 256);
        assert_eq!(parsed.api.base_url, "http://127.0.0.1:8080/api");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: StaticConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://short.example/api"
            token = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.api.token.as_deref(), Some("secret"));
        assert_eq!(parsed.api.timeout_secs, 10);
        assert_eq!(parsed.ui.toast_duration_ms, 3000);
    }
}
