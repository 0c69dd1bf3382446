//! 配置管理命令
//!
//! 读写控制台配置文件（运行模式、机器人地址、API 地址、点动步长）

use anyhow::{Context, Result};
use armdeck_sdk::control::{ConsoleConfig, ControlMode};
use clap::Subcommand;
use std::path::Path;

/// `config get` 支持的配置项
pub const CONFIG_KEYS: [&str; 10] = [
    "mode",
    "robot.ip",
    "robot.port",
    "robot.connection_url",
    "api.base_url",
    "api.timeout_ms",
    "jog.joint_steps_rad",
    "jog.default_step_rad",
    "jog.tcp_step_m",
    "jog.log_capacity",
];

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 设置配置项
    Set {
        /// 运行模式（demo / live）
        #[arg(long)]
        mode: Option<ControlMode>,

        /// 机器人 IP
        #[arg(long)]
        ip: Option<String>,

        /// 机器人端口
        #[arg(long)]
        port: Option<u16>,

        /// 控制服务根地址（如 http://localhost:3001/api）
        #[arg(long)]
        base_url: Option<String>,

        /// 请求超时（毫秒，0 表示不限制）
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// 关节点动步长（弧度，逗号分隔，按关节 ID 排列）
        #[arg(long, value_delimiter = ',')]
        joint_steps: Option<Vec<f64>>,

        /// TCP 平移步长（米）
        #[arg(long)]
        tcp_step: Option<f64>,
    },

    /// 获取配置项
    Get {
        /// 配置项名称
        #[arg(default_value = "all")]
        key: String,
    },

    /// 检查配置
    Check,
}

impl ConfigCommand {
    pub async fn execute(self, path: &Path) -> Result<()> {
        match self {
            ConfigCommand::Set {
                mode,
                ip,
                port,
                base_url,
                timeout_ms,
                joint_steps,
                tcp_step,
            } => {
                let mut config = load(path)?;

                if let Some(mode) = mode {
                    config.mode = mode;
                    println!("✅ mode = {}", mode);
                }
                if let Some(ip) = ip {
                    println!("✅ robot.ip = {}", ip);
                    config.robot.ip = ip;
                }
                if let Some(port) = port {
                    config.robot.port = port;
                    println!("✅ robot.port = {}", port);
                }
                if let Some(base_url) = base_url {
                    println!("✅ api.base_url = {}", base_url);
                    config.api.base_url = base_url;
                }
                if let Some(timeout_ms) = timeout_ms {
                    config.api.timeout_ms = (timeout_ms > 0).then_some(timeout_ms);
                    println!("✅ api.timeout_ms = {}", timeout_ms);
                }
                if let Some(steps) = joint_steps {
                    println!("✅ jog.joint_steps_rad = {:?}", steps);
                    config.jog.joint_steps_rad = steps;
                }
                if let Some(step) = tcp_step {
                    config.jog.tcp_step_m = step;
                    println!("✅ jog.tcp_step_m = {}", step);
                }

                config.validate().context("配置无效，未保存")?;
                config
                    .save_to_file(path)
                    .with_context(|| format!("写入配置文件失败: {}", path.display()))?;
                Ok(())
            },

            ConfigCommand::Get { key } => {
                let config = load(path)?;
                if key == "all" {
                    println!("armdeck 配置 ({}):", path.display());
                    for key in CONFIG_KEYS {
                        let value = config_value(&config, key).unwrap_or_default();
                        println!("  {:<22} {}", key, value);
                    }
                } else {
                    let value = config_value(&config, &key)
                        .with_context(|| format!("未知配置项: {}", key))?;
                    println!("{}", value);
                }
                Ok(())
            },

            ConfigCommand::Check => {
                let config = load(path)?;
                println!("配置文件: {}", path.display());
                if !path.exists() {
                    println!("  (不存在，使用默认配置)");
                }

                let issues = config.issues();
                if issues.is_empty() {
                    println!("✅ 配置有效");
                    Ok(())
                } else {
                    for issue in &issues {
                        println!("❌ {}", issue);
                    }
                    anyhow::bail!("发现 {} 个配置问题", issues.len())
                }
            },
        }
    }
}

fn load(path: &Path) -> Result<ConsoleConfig> {
    ConsoleConfig::load_or_default(path)
        .with_context(|| format!("读取配置文件失败: {}", path.display()))
}

/// 按名称读取配置项
pub fn config_value(config: &ConsoleConfig, key: &str) -> Option<String> {
    let value = match key {
        "mode" => config.mode.to_string(),
        "robot.ip" => config.robot.ip.clone(),
        "robot.port" => config.robot.port.to_string(),
        "robot.connection_url" => config.robot.connection_url.clone(),
        "api.base_url" => config.api.base_url.clone(),
        "api.timeout_ms" => config
            .api
            .timeout_ms
            .map_or_else(|| "(未设置)".to_string(), |ms| ms.to_string()),
        "jog.joint_steps_rad" => config
            .jog
            .joint_steps_rad
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(","),
        "jog.default_step_rad" => config.jog.default_step_rad.to_string(),
        "jog.tcp_step_m" => config.jog.tcp_step_m.to_string(),
        "jog.log_capacity" => config.jog.log_capacity.to_string(),
        _ => return None,
    };
    Some(value)
}
