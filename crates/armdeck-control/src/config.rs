//! # 控制台配置
//!
//! 运行模式、机器人地址、API 地址与点动步长。
//!
//! 配置文件路径：
//! - Linux: `~/.config/armdeck/console.toml`
//! - macOS: `~/Library/Application Support/armdeck/console.toml`
//! - Windows: `%APPDATA%\armdeck\console.toml`
//!
//! ```toml
//! mode = "live"
//!
//! [robot]
//! ip = "192.168.1.100"
//! port = 30002
//!
//! [api]
//! base_url = "http://localhost:3001/api"
//! timeout_ms = 5000
//!
//! [jog]
//! joint_steps_rad = [0.01, 0.02, 0.03, 0.04, 0.05, 0.06]
//! ```

use crate::error::ConfigError;
use armdeck_client::{ClientConfig, DEFAULT_API_BASE_URL};
use armdeck_store::{
    DEFAULT_CONNECTION_URL, DEFAULT_ROBOT_IP, DEFAULT_ROBOT_PORT, RobotStore, StoreBuilder,
};
use armdeck_types::{JointId, Rad, RobotConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "armdeck";
/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "console.toml";

/// 默认关节点动步长（弧度，按关节 ID 1..=6）
pub const DEFAULT_JOINT_STEPS_RAD: [f64; 6] = [0.01, 0.02, 0.03, 0.04, 0.05, 0.06];
/// 表中没有的关节使用的步长（弧度）
pub const DEFAULT_STEP_RAD: f64 = 0.01;
/// 默认 TCP 平移步长（米）
pub const DEFAULT_TCP_STEP_M: f64 = 0.01;
/// 默认命令日志容量
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// 运行模式
///
/// - `Demo`：只修改本地状态，不访问控制服务
/// - `Live`：先调用控制服务，根据结果同步本地状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    #[default]
    Demo,
    Live,
}

impl ControlMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ControlMode::Demo => "demo",
            ControlMode::Live => "live",
        }
    }

    pub fn is_live(self) -> bool {
        self == ControlMode::Live
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(ControlMode::Demo),
            "live" => Ok(ControlMode::Live),
            other => Err(ConfigError::Invalid(format!(
                "unknown mode {:?} (expected 'demo' or 'live')",
                other
            ))),
        }
    }
}

/// 控制台配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// 运行模式
    pub mode: ControlMode,

    /// 机器人地址
    pub robot: RobotSettings,

    /// 控制服务
    pub api: ApiSettings,

    /// 点动设置
    pub jog: JogSettings,

    /// 额外的机器人配置（加入可选列表）
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub configs: Vec<RobotConfig>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ConsoleConfig {
    /// 创建默认配置
    pub fn default_config() -> Self {
        Self {
            mode: ControlMode::Demo,
            robot: RobotSettings::default(),
            api: ApiSettings::default(),
            jog: JogSettings::default(),
            configs: Vec::new(),
        }
    }

    /// 默认配置文件路径
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 从文件加载配置
    ///
    /// 缺失的字段使用默认值。
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 文件不存在时返回默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default_config())
        }
    }

    /// 保存配置到文件（自动创建父目录）
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    /// 列出所有配置问题（空表示有效）
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.robot.ip.trim().is_empty() {
            issues.push("robot.ip must not be empty".to_string());
        }
        if self.robot.port == 0 {
            issues.push("robot.port must not be 0".to_string());
        }
        if self.api.base_url.trim().is_empty() {
            issues.push("api.base_url must not be empty".to_string());
        }
        if self.api.timeout_ms == Some(0) {
            issues.push("api.timeout_ms must be greater than 0".to_string());
        }

        for (index, step) in self.jog.joint_steps_rad.iter().enumerate() {
            if !is_positive_step(*step) {
                issues.push(format!("jog.joint_steps_rad[{}] = {} is not a positive step", index, step));
            }
        }
        if !is_positive_step(self.jog.default_step_rad) {
            issues.push("jog.default_step_rad must be a positive step".to_string());
        }
        if !is_positive_step(self.jog.tcp_step_m) {
            issues.push("jog.tcp_step_m must be a positive step".to_string());
        }
        if self.jog.log_capacity == 0 {
            issues.push("jog.log_capacity must be greater than 0".to_string());
        }

        for config in &self.configs {
            if config.id.trim().is_empty() {
                issues.push(format!("configs: {:?} has an empty id", config.name));
            }
            for joint in &config.joints {
                let (min, max) = (joint.min_limit.0, joint.max_limit.0);
                if !(min.is_finite() && max.is_finite() && min <= max) {
                    issues.push(format!(
                        "configs.{}: joint {} has invalid limits [{}, {}]",
                        config.id, joint.id, min, max
                    ));
                }
            }
        }

        issues
    }

    /// 校验配置，返回第一个问题
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(ConfigError::Invalid(issue)),
            None => Ok(()),
        }
    }

    /// 命令客户端配置
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api.base_url.clone());
        match self.api.timeout_ms {
            Some(ms) => config.with_timeout(Duration::from_millis(ms)),
            None => config,
        }
    }

    /// 按配置构建状态存储（默认 6 轴配置为当前配置）
    pub fn build_store(&self) -> RobotStore {
        StoreBuilder::new()
            .robot_ip(self.robot.ip.clone())
            .robot_port(self.robot.port)
            .connection_url(self.robot.connection_url.clone())
            .with_configs(self.configs.iter().cloned())
            .build()
    }
}

fn is_positive_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}

/// 机器人地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotSettings {
    pub ip: String,
    pub port: u16,
    /// 仅用于显示
    pub connection_url: String,
}

impl Default for RobotSettings {
    fn default() -> Self {
        Self {
            ip: DEFAULT_ROBOT_IP.to_string(),
            port: DEFAULT_ROBOT_PORT,
            connection_url: DEFAULT_CONNECTION_URL.to_string(),
        }
    }
}

/// 控制服务
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    /// 请求超时（毫秒，未设置表示不限制）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: None,
        }
    }
}

/// 点动设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JogSettings {
    /// 关节步长（弧度），第 i 项对应关节 ID i+1
    pub joint_steps_rad: Vec<f64>,
    /// 表中没有的关节使用的步长（弧度）
    pub default_step_rad: f64,
    /// TCP 平移步长（米）
    pub tcp_step_m: f64,
    /// 命令日志容量
    pub log_capacity: usize,
}

impl Default for JogSettings {
    fn default() -> Self {
        Self {
            joint_steps_rad: DEFAULT_JOINT_STEPS_RAD.to_vec(),
            default_step_rad: DEFAULT_STEP_RAD,
            tcp_step_m: DEFAULT_TCP_STEP_M,
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl JogSettings {
    pub fn steps(&self) -> JogSteps {
        JogSteps {
            joint_steps: self.joint_steps_rad.iter().copied().map(Rad).collect(),
            fallback: Rad(if is_positive_step(self.default_step_rad) {
                self.default_step_rad
            } else {
                DEFAULT_STEP_RAD
            }),
            tcp_step_m: self.tcp_step_m,
        }
    }
}

/// 点动步长表
#[derive(Debug, Clone, PartialEq)]
pub struct JogSteps {
    joint_steps: Vec<Rad>,
    fallback: Rad,
    tcp_step_m: f64,
}

impl Default for JogSteps {
    fn default() -> Self {
        JogSettings::default().steps()
    }
}

impl JogSteps {
    /// 关节步长（弧度）
    ///
    /// 表中没有或无效的条目使用默认步长。
    pub fn joint_step(&self, joint_id: JointId) -> Rad {
        (joint_id as usize)
            .checked_sub(1)
            .and_then(|index| self.joint_steps.get(index))
            .copied()
            .filter(|step| is_positive_step(step.0))
            .unwrap_or(self.fallback)
    }

    /// TCP 平移步长（米）
    pub fn tcp_step_m(&self) -> f64 {
        self.tcp_step_m
    }
}
