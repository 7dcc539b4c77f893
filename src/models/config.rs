// ============================================================================
// CopyDeck - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数合并
//   - ❌ 不应包含检查逻辑
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::copy::Locale;
use crate::core::checker::CheckOptions;
use crate::core::markup;

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "copydeck.toml";

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// CopyDeck 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 文案配置
    #[serde(default)]
    pub copy: CopyConfig,
    /// 检查配置
    #[serde(default)]
    pub check: CheckConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 文案配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyConfig {
    /// 未指定 --locale 时查询使用的语言
    #[serde(default = "Config::default_locale")]
    pub default_locale: Locale,
    /// check 命令默认检查的语言
    #[serde(default = "Config::default_check_locales")]
    pub locales: Vec<Locale>,
}

/// 检查配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// 警告也视为失败
    #[serde(default)]
    pub strict: bool,
    /// 报告与参考文案相同的条目
    #[serde(default = "Config::default_report_untranslated")]
    pub report_untranslated: bool,
    /// 允许的占位标记名
    #[serde(default = "Config::default_allowed_tags")]
    pub allowed_tags: Vec<String>,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言 (en_us, zh_cn)
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认查询语言
    fn default_locale() -> Locale {
        Locale::Zh
    }

    /// 获取默认检查语言
    fn default_check_locales() -> Vec<Locale> {
        vec![Locale::Zh]
    }

    /// 获取默认是否报告未翻译条目
    fn default_report_untranslated() -> bool {
        true
    }

    /// 获取默认允许的占位标记
    fn default_allowed_tags() -> Vec<String> {
        markup::default_vocabulary()
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认界面语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    ///
    /// 指定了路径时文件必须存在；否则尝试当前目录下的 `copydeck.toml`，
    /// 不存在则使用默认配置。
    pub fn initialize(config_path: Option<&Path>) -> anyhow::Result<()> {
        let config = match config_path {
            Some(path) => Self::load_from(path)?,
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::load_from(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            anyhow::anyhow!("Failed to read config {}: {}", config_path.display(), e)
        })?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
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

    /// 用运行时参数覆盖当前值
    pub fn apply(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// 检查器设置
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            allowed_tags: self.check.allowed_tags.clone(),
            report_untranslated: self.check.report_untranslated,
        }
    }

    /// 读取全局配置
    fn read<T>(f: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(f(&config))
    }

    /// 获取全局配置快照（未初始化时为默认配置）
    pub fn snapshot() -> Config {
        Self::read(Config::clone).unwrap_or_default()
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::read(|c| c.i18n.language.clone())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::read(|c| c.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::read(|c| c.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    /// 获取默认查询语言（带默认值）
    pub fn get_default_locale() -> Locale {
        Self::read(|c| c.copy.default_locale).unwrap_or_else(|_| Self::default_locale())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy: CopyConfig::default(),
            check: CheckConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            default_locale: Config::default_locale(),
            locales: Config::default_check_locales(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            strict: false,
            report_untranslated: Config::default_report_untranslated(),
            allowed_tags: Config::default_allowed_tags(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
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
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [check]
            strict = true

            [i18n]
            language = "zh_cn"
            "#,
        )
        .unwrap();

        assert!(config.check.strict);
        assert!(config.check.report_untranslated);
        assert_eq!(config.check.allowed_tags, markup::default_vocabulary());
        assert_eq!(config.copy.locales, vec![Locale::Zh]);
        assert_eq!(config.i18n.language, "zh_cn");
        assert!(config.output.colored);
    }

    #[test]
    fn locales_are_parsed_by_code() {
        let config: Config = toml::from_str(
            r#"
            [copy]
            default_locale = "en"
            locales = ["en", "zh"]
            "#,
        )
        .unwrap();
        assert_eq!(config.copy.default_locale, Locale::En);
        assert_eq!(config.copy.locales, vec![Locale::En, Locale::Zh]);
        assert!(toml::from_str::<Config>("[copy]\nlocales = [\"fr\"]\n").is_err());
    }

    #[test]
    fn default_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        Config::create_default_config_file(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn runtime_args_override_file_values() {
        let mut config = Config::default();
        config.apply(RuntimeArgs {
            verbose: Some(true),
            colored: Some(false),
            language: None,
        });
        assert!(config.output.verbose);
        assert!(!config.output.colored);
        assert_eq!(config.i18n.language, "en_us");
    }

    #[test]
    fn check_options_follow_config() {
        let mut config = Config::default();
        config.check.report_untranslated = false;
        config.check.allowed_tags = vec!["strong".to_string()];
        let options = config.check_options();
        assert!(!options.report_untranslated);
        assert_eq!(options.allowed_tags, vec!["strong"]);
    }
}
