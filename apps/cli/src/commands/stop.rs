//! 急停命令

use crate::display::print_outcome;
use anyhow::Result;
use armdeck_sdk::prelude::*;

/// 执行急停
pub async fn emergency_stop<T: Transport>(console: &mut RobotConsole<T>) -> Result<()> {
    println!("🛑 发送急停命令...");
    let outcome = console.emergency_stop().await?;
    print_outcome("急停已触发", outcome);
    Ok(())
}
