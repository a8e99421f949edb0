// ============================================================================
// MCLang - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和全局配置访问
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 运行时参数合并
//   - ❌ 不应包含 CLI 参数解析
//   - ❌ 不应包含语言文件合并逻辑
//   - ❌ 不应包含压缩包扫描逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "mclang.toml";

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// MCLang 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 语言文件配置
    #[serde(default)]
    pub lang: LangConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 语言文件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LangConfig {
    /// 要合并的游戏语言代码（如 zh_cn）
    #[serde(default = "default_locale")]
    pub locale: String,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否显示进度条
    #[serde(default = "default_true")]
    pub show_progress: bool,
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "default_true")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub show_progress: Option<bool>,
    pub language: Option<String>,
    pub locale: Option<String>,
}

fn default_locale() -> String {
    Config::default_locale()
}

fn default_language() -> String {
    Config::default_language()
}

fn default_true() -> bool {
    true
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 默认游戏语言代码
    fn default_locale() -> String {
        "zh_cn".to_string()
    }

    /// 默认是否显示进度条
    fn default_show_progress() -> bool {
        true
    }

    /// 默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 默认界面语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    ///
    /// `config_path` 为空时读取当前目录下的 `mclang.toml`，不存在则使用默认配置。
    pub fn initialize(config_path: Option<&Path>) -> anyhow::Result<()> {
        let config = Self::load_config(config_path)?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件
    pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<Self> {
        match config_path {
            // 显式指定的配置文件必须存在
            Some(path) => Self::from_file(path),
            None => {
                let path = PathBuf::from(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// 从 TOML 文件解析配置
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply(args);
        Ok(())
    }

    /// 将运行时参数覆盖到当前配置
    pub fn apply(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(show_progress) = args.show_progress {
            self.output.show_progress = show_progress;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
        if let Some(locale) = args.locale {
            self.lang.locale = locale;
        }
    }

    /// 在读锁下访问全局配置
    fn with_global<T>(f: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(f(&config))
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::with_global(|c| c.i18n.language.clone())
    }

    /// 获取游戏语言代码（带默认值）
    pub fn get_locale() -> String {
        Self::with_global(|c| c.lang.locale.clone()).unwrap_or_else(|_| Self::default_locale())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::with_global(|c| c.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::with_global(|c| c.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    /// 获取是否显示进度条（带默认值）
    pub fn get_show_progress() -> bool {
        Self::with_global(|c| c.output.show_progress)
            .unwrap_or_else(|_| Self::default_show_progress())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: LangConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for LangConfig {
    fn default() -> Self {
        Self {
            locale: Config::default_locale(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_progress: Config::default_show_progress(),
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[output]\nverbose = true\n").unwrap();
        assert!(config.output.verbose);
        assert!(config.output.colored);
        assert!(config.output.show_progress);
        assert_eq!(config.lang.locale, "zh_cn");
        assert_eq!(config.i18n.language, "en_us");
    }

    #[test]
    fn test_runtime_args_override_file_values() {
        let mut config: Config =
            toml::from_str("[lang]\nlocale = \"zh_tw\"\n[i18n]\nlanguage = \"zh_cn\"\n").unwrap();
        config.apply(RuntimeArgs {
            colored: Some(false),
            locale: Some("ja_jp".to_string()),
            ..Default::default()
        });
        assert!(!config.output.colored);
        assert_eq!(config.lang.locale, "ja_jp");
        assert_eq!(config.i18n.language, "zh_cn");
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load_config(Some(&missing)).is_err());
    }
}
