//! One-shot 模式
//!
//! 每个命令独立执行：
//! 1. 读取配置
//! 2. 创建控制台（全新的状态存储）
//! 3. 执行操作

use anyhow::{Context, Result};
use armdeck_sdk::prelude::*;
use armdeck_sdk::HttpTransport;
use std::path::PathBuf;

use crate::commands::{
    ConnectCommand, ImportCommand, JogCommand, ProgramCommand, RotateCommand, TranslateCommand,
    stop,
};

/// 命令行全局设置
#[derive(Debug, Clone)]
pub struct Settings {
    /// 配置文件路径
    pub config_path: PathBuf,

    /// 运行模式（覆盖配置文件）
    pub mode: Option<ControlMode>,
}

impl Settings {
    /// 未指定路径时使用默认配置文件
    pub fn resolve(config_path: Option<PathBuf>, mode: Option<ControlMode>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => ConsoleConfig::default_path().context("无法确定配置目录")?,
        };
        Ok(Self { config_path, mode })
    }

    /// 读取配置并应用命令行覆盖
    pub fn load_config(&self) -> Result<ConsoleConfig> {
        let mut config = ConsoleConfig::load_or_default(&self.config_path)
            .with_context(|| format!("读取配置文件失败: {}", self.config_path.display()))?;
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        Ok(config)
    }

    /// 按配置创建 HTTP 控制台
    pub fn open_console(&self) -> Result<RobotConsole<HttpTransport>> {
        let config = self.load_config()?;
        let console = RobotConsole::from_config(&config).context("创建控制台失败")?;
        tracing::debug!(mode = %console.mode(), api = console.client().base_url(), "console ready");
        Ok(console)
    }
}

/// One-shot 模式
pub struct OneShotMode {
    console: RobotConsole<HttpTransport>,
}

impl OneShotMode {
    pub fn new(settings: &Settings) -> Result<Self> {
        let console = settings.open_console()?;
        if console.mode() == ControlMode::Demo {
            println!("💡 演示模式：不会访问控制服务（使用 --mode live 切换）");
        }
        Ok(Self { console })
    }

    pub async fn connect(&mut self, args: ConnectCommand) -> Result<()> {
        args.execute(&mut self.console).await
    }

    pub async fn jog(&mut self, args: JogCommand) -> Result<()> {
        args.execute(&mut self.console).await
    }

    pub async fn translate(&mut self, args: TranslateCommand) -> Result<()> {
        args.execute(&mut self.console).await
    }

    pub async fn rotate(&mut self, args: RotateCommand) -> Result<()> {
        args.execute(&mut self.console).await
    }

    pub async fn program(&mut self, cmd: ProgramCommand) -> Result<()> {
        cmd.execute(&mut self.console).await
    }

    pub async fn stop(&mut self) -> Result<()> {
        stop::emergency_stop(&mut self.console).await
    }

    pub fn import(&mut self, args: ImportCommand) -> Result<()> {
        args.execute(&mut self.console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mode_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("console.toml");
        let mut config = ConsoleConfig::default_config();
        config.mode = ControlMode::Live;
        config.save_to_file(&path).unwrap();

        let settings = Settings::resolve(Some(path.clone()), None).unwrap();
        assert_eq!(settings.load_config().unwrap().mode, ControlMode::Live);

        let settings = Settings::resolve(Some(path), Some(ControlMode::Demo)).unwrap();
        assert_eq!(settings.load_config().unwrap().mode, ControlMode::Demo);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::resolve(Some(dir.path().join("none.toml")), None).unwrap();
        let config = settings.load_config().unwrap();
        assert_eq!(config, ConsoleConfig::default_config());
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("console.toml");
        let mut robot = RobotConfig::default_6dof();
        robot.id = "inverted".to_string();
        robot.joints[0].min_limit = Deg(10.0);
        robot.joints[0].max_limit = Deg(-10.0);
        let mut config = ConsoleConfig::default_config();
        config.configs.push(robot);
        config.save_to_file(&path).unwrap();

        let settings = Settings::resolve(Some(path), None).unwrap();
        let err = settings.open_console().err().unwrap();
        assert!(format!("{:#}", err).contains("configs.inverted"));
    }
}
