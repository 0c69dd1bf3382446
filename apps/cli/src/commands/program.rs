//! 程序控制命令

use crate::display::print_outcome;
use anyhow::Result;
use armdeck_sdk::prelude::*;
use clap::Subcommand;

/// 程序命令
#[derive(Subcommand, Debug)]
pub enum ProgramCommand {
    /// 启动程序
    Start {
        /// 程序名称
        name: String,
    },

    /// 停止程序
    Stop,
}

impl ProgramCommand {
    pub async fn execute<T: Transport>(&self, console: &mut RobotConsole<T>) -> Result<()> {
        match self {
            ProgramCommand::Start { name } => {
                let outcome = console.start_program(name).await?;
                print_outcome(&format!("程序 \"{}\" 已启动", name.trim()), outcome);
            },
            ProgramCommand::Stop => {
                let outcome = console.stop_program().await?;
                print_outcome("程序已停止", outcome);
            },
        }
        Ok(())
    }
}
