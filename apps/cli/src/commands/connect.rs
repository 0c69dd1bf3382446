//! 连接命令

use crate::display::print_outcome;
use anyhow::Result;
use armdeck_sdk::prelude::*;
use clap::Args;

/// 连接参数
#[derive(Args, Debug)]
pub struct ConnectCommand {
    /// 机器人 IP（覆盖配置）
    #[arg(long)]
    pub host: Option<String>,

    /// 机器人端口（覆盖配置）
    #[arg(long)]
    pub port: Option<u16>,
}

impl ConnectCommand {
    pub async fn execute<T: Transport>(&self, console: &mut RobotConsole<T>) -> Result<()> {
        let host = self
            .host
            .clone()
            .unwrap_or_else(|| console.store().robot_ip().to_string());
        let port = self.port.unwrap_or_else(|| console.store().robot_port());
        console.set_robot_address(host.clone(), port);

        if console.store().is_connected() {
            println!("⚠️  已经连接");
            return Ok(());
        }

        println!("⏳ 连接到 {}:{}...", host, port);
        let outcome = console.toggle_connection().await?;
        print_outcome("已连接", outcome);
        Ok(())
    }
}
