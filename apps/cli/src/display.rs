//! 终端输出
//!
//! 状态、关节表、命令日志的格式化。

use armdeck_sdk::control::{CommandLog, CommandStatus};
use armdeck_sdk::prelude::*;

/// 打印动作结果
pub fn print_outcome(action: &str, outcome: Outcome) {
    match outcome {
        Outcome::Applied => println!("✅ {}", action),
        Outcome::Simulated => println!("✅ {}（演示模式）", action),
        Outcome::Rejected => println!("⚠️  {}: 控制器拒绝执行", action),
    }
}

/// 打印会话状态
pub fn print_status<T: Transport>(console: &RobotConsole<T>) {
    let store = console.store();
    println!("📊 状态");
    println!("  模式:     {}", console.mode());
    println!(
        "  连接:     {} ({}:{})",
        if store.is_connected() { "已连接" } else { "未连接" },
        store.robot_ip(),
        store.robot_port()
    );
    println!("  端点:     {}", store.connection_url());
    println!("  API:      {}", console.client().base_url());
    match store.current_config() {
        Some(config) => println!("  机器人:   {} [{}]", config, config.id),
        None => println!("  机器人:   (未加载)"),
    }
    let program = if store.is_program_running() { "运行中" } else { "已停止" };
    if store.current_program_name().is_empty() {
        println!("  程序:     {}", program);
    } else {
        println!("  程序:     {} ({})", store.current_program_name(), program);
    }
    println!("  位置:     {}", store.position());
}

/// 打印关节表
pub fn print_joints(store: &RobotStore) {
    let Some(config) = store.current_config() else {
        println!("未加载机器人配置");
        return;
    };

    println!("🦾 {}", config);
    println!(
        "  {:<3} {:<12} {:>9} {:>9} {:>19}  {}",
        "ID", "Name", "Angle", "Target", "Limits", "Enabled"
    );
    for joint in &config.joints {
        println!(
            "  {:<3} {:<12} {:>9} {:>9} {:>9} .. {:<7}  {}",
            joint.id,
            joint.name,
            joint.angle.to_string(),
            joint.target_angle.to_string(),
            joint.min_limit.to_string(),
            joint.max_limit.to_string(),
            if joint.enabled { "yes" } else { "no" }
        );
    }
}

/// 打印可选配置列表（当前配置带 `*`）
pub fn print_configs(store: &RobotStore) {
    let current = store.current_config().map(|c| c.id.as_str());
    for config in store.available_configs() {
        let marker = if Some(config.id.as_str()) == current { "*" } else { " " };
        println!(
            "{} {:<24} {} ({} {})",
            marker, config.id, config, config.manufacturer, config.model
        );
    }
}

/// 打印最近的日志条目（最新在前）
pub fn print_log(log: &CommandLog, limit: usize) {
    if log.is_empty() {
        println!("暂无命令记录");
        return;
    }
    for entry in log.entries().take(limit) {
        let icon = match entry.status {
            CommandStatus::Success => "✅",
            CommandStatus::Error => "❌",
            CommandStatus::Sent => "⏳",
        };
        println!("{} {}", icon, entry);
    }
}
