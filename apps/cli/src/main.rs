//! # armdeck CLI
//!
//! 机械臂控制台命令行工具。
//!
//! ## 双模式架构
//!
//! ### One-shot 模式（适合脚本）
//!
//! ```bash
//! # 配置控制服务与机器人地址
//! armdeck-cli config set --mode live --base-url http://localhost:3001/api --ip 192.168.1.100
//!
//! # 执行操作（每次使用全新的控制台状态）
//! armdeck-cli connect
//! armdeck-cli jog --joint 1 --dir +
//! armdeck-cli translate --dir z-up --step 0.005
//! ```
//!
//! ### REPL 模式（状态在会话内保留）
//!
//! ```bash
//! $ armdeck-cli shell
//! armdeck> connect 192.168.1.100 30002
//! armdeck> jog 1 +
//! armdeck> program start pick_and_place
//! armdeck> stop
//! armdeck> exit
//! ```

use anyhow::Result;
use armdeck_sdk::control::ControlMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod modes;

use commands::{
    ConfigCommand, ConnectCommand, ImportCommand, JogCommand, ProgramCommand, RotateCommand,
    TranslateCommand,
};
use modes::oneshot::{OneShotMode, Settings};
use modes::repl::run_repl;

/// armdeck CLI - 机械臂控制台命令行工具
#[derive(Parser, Debug)]
#[command(name = "armdeck-cli")]
#[command(about = "Command-line console for armdeck robot-arm control", long_about = None)]
#[command(version)]
struct Cli {
    /// 运行模式（覆盖配置文件：demo / live）
    #[arg(long, global = true)]
    mode: Option<ControlMode>,

    /// 配置文件路径（默认：用户配置目录下的 armdeck/console.toml）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),

    /// 连接到机器人
    Connect {
        #[command(flatten)]
        args: ConnectCommand,
    },

    /// 关节点动
    Jog {
        #[command(flatten)]
        args: JogCommand,
    },

    /// TCP 平移
    Translate {
        #[command(flatten)]
        args: TranslateCommand,
    },

    /// TCP 旋转
    Rotate {
        #[command(flatten)]
        args: RotateCommand,
    },

    /// 程序控制
    #[command(subcommand)]
    Program(ProgramCommand),

    /// 急停
    Stop,

    /// 导入 URDF 描述文件
    Import {
        #[command(flatten)]
        args: ImportCommand,
    },

    /// 启动交互式 Shell（REPL 模式）
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("armdeck_cli=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.config, cli.mode)?;

    match cli.command {
        Commands::Config(cmd) => {
            // One-shot 模式：配置管理
            cmd.execute(&settings.config_path).await
        },

        Commands::Connect { args } => OneShotMode::new(&settings)?.connect(args).await,

        Commands::Jog { args } => OneShotMode::new(&settings)?.jog(args).await,

        Commands::Translate { args } => OneShotMode::new(&settings)?.translate(args).await,

        Commands::Rotate { args } => OneShotMode::new(&settings)?.rotate(args).await,

        Commands::Program(cmd) => OneShotMode::new(&settings)?.program(cmd).await,

        Commands::Stop => OneShotMode::new(&settings)?.stop().await,

        Commands::Import { args } => OneShotMode::new(&settings)?.import(args),

        Commands::Shell => {
            // REPL 模式：交互式 Shell
            run_repl(&settings).await
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "armdeck-cli",
            "jog",
            "--joint",
            "2",
            "--dir",
            "-",
            "--mode",
            "live",
            "--config",
            "/tmp/console.toml",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(ControlMode::Live));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/console.toml")));
        assert!(matches!(cli.command, Commands::Jog { .. }));
    }
}
