// ============================================================================
// TsTable - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值与运行时参数合并
//   - ✅ 配置文件读写操作
//   - ❌ 不应包含翻译表解析逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "tstable.toml";

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// TsTable 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// 工作空间配置
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    /// 查找配置
    #[serde(default)]
    pub lookup: LookupConfig,
    /// 校验配置
    #[serde(default)]
    pub check: CheckConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 工作空间配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceConfig {
    /// 扫描翻译表的根目录
    #[serde(default = "Config::default_root")]
    pub root: String,
    /// 排除扫描的目录或文件模式
    #[serde(default = "Config::default_ignore_patterns")]
    pub ignore: Vec<String>,
}

/// 查找配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupConfig {
    /// 未指定上下文时使用的上下文
    #[serde(default = "Config::default_context")]
    pub default_context: String,
    /// 是否使用未完成但非空的译文
    #[serde(default)]
    pub include_unfinished: bool,
}

/// 校验配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// 是否检查占位符一致性
    #[serde(default = "Config::default_check_placeholders")]
    pub placeholders: bool,
    /// 警告是否也视为失败
    #[serde(default)]
    pub strict: bool,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub workspace_root: Option<String>,
    pub language: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认工作区根目录
    fn default_workspace_root() -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    fn default_root() -> String {
        ".".to_string()
    }

    /// 获取默认忽略模式
    fn default_ignore_patterns() -> Vec<String> {
        vec![
            ".git".to_string(),
            "target".to_string(),
            "node_modules".to_string(),
        ]
    }

    /// 获取默认上下文
    fn default_context() -> String {
        "Theme".to_string()
    }

    fn default_check_placeholders() -> bool {
        true
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    /// 获取默认语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 定位配置文件：优先使用 -C 指定目录下的文件，其次为当前目录
    pub fn locate(workspace_root: Option<&Path>) -> PathBuf {
        if let Some(root) = workspace_root {
            let candidate = root.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return candidate;
            }
        }
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// 初始化全局配置（解析命令行之后调用）
    pub fn initialize(workspace_root: Option<&Path>) -> anyhow::Result<()> {
        let path = Self::locate(workspace_root);
        let config = Self::load_from(&path)
            .with_context(|| crate::tf!("error.config_invalid", path.display()))?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config = toml::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config file");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 将运行时参数合并到配置
    pub fn apply(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(workspace_root) = args.workspace_root {
            self.workspace.root = workspace_root;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 合并运行时参数到全局配置
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

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成要写入配置文件的模板：保留工作区、查找、校验与语言设置，输出选项恢复默认
    pub fn to_template(&self) -> Config {
        Config {
            output: OutputConfig::default(),
            ..self.clone()
        }
    }

    /// 读取全局配置的快照
    pub fn snapshot() -> anyhow::Result<Config> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.clone())
    }

    /// 获取工作区根目录（带默认值）
    pub fn get_workspace_root() -> PathBuf {
        match Self::snapshot() {
            Ok(config) if config.workspace.root != "." => PathBuf::from(config.workspace.root),
            _ => Self::default_workspace_root(),
        }
    }

    /// 获取忽略模式列表
    pub fn get_ignore_patterns() -> Vec<String> {
        Self::snapshot()
            .map(|config| config.workspace.ignore)
            .unwrap_or_else(|_| Self::default_ignore_patterns())
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Ok(Self::snapshot()?.i18n.language)
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::snapshot()
            .map(|config| config.output.verbose)
            .unwrap_or_else(|_| Self::default_verbose())
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::snapshot()
            .map(|config| config.output.colored)
            .unwrap_or_else(|_| Self::default_colored())
    }

    /// 获取查找配置（带默认值）
    pub fn get_lookup() -> LookupConfig {
        Self::snapshot()
            .map(|config| config.lookup)
            .unwrap_or_default()
    }

    /// 获取校验配置（带默认值）
    pub fn get_check() -> CheckConfig {
        Self::snapshot()
            .map(|config| config.check)
            .unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: WorkspaceConfig::default(),
            lookup: LookupConfig::default(),
            check: CheckConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: Config::default_root(),
            ignore: Config::default_ignore_patterns(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            default_context: Config::default_context(),
            include_unfinished: false,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            placeholders: Config::default_check_placeholders(),
            strict: false,
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
