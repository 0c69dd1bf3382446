//! REPL 模式（交互式 Shell）
//!
//! 专用输入线程 + tokio mpsc 通道：保留历史记录，不阻塞 tokio。
//! 控制台在整个会话内保留状态（关节角度、连接、程序、命令日志）。

use anyhow::{Context, Result};
use armdeck_sdk::prelude::*;
use armdeck_sdk::types::parse_number;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;
use tokio::sync::mpsc;

use crate::commands::stop;
use crate::display::{print_configs, print_joints, print_log, print_outcome, print_status};
use crate::modes::oneshot::Settings;

/// Ctrl+C 在输入线程中转换为该命令
const INTERRUPT: &str = "\u{3}SIGINT";

/// 默认显示的日志条数
const DEFAULT_LOG_LINES: usize = 20;

/// REPL 输入（专用输入线程）
pub struct ReplInput {
    command_rx: mpsc::Receiver<String>,
    input_thread: thread::JoinHandle<()>,
}

impl ReplInput {
    /// 创建专用输入线程（保留历史记录）
    pub fn new() -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<String>(10);
        let mut rl = DefaultEditor::new().context("Failed to initialize readline")?;
        let history_path = history_path();

        let input_thread = thread::spawn(move || {
            // 首次运行没有历史文件
            rl.load_history(&history_path).ok();

            loop {
                match rl.readline("armdeck> ") {
                    Ok(line) => {
                        let line = line.trim().to_string();
                        if line.is_empty() {
                            continue;
                        }
                        let _ = rl.add_history_entry(line.as_str());

                        let exit = line == "exit" || line == "quit";
                        if command_tx.blocking_send(line).is_err() || exit {
                            break;
                        }
                    },

                    Err(ReadlineError::Interrupted) => {
                        // Ctrl+C：在主线程执行急停
                        println!("^C");
                        if command_tx.blocking_send(INTERRUPT.to_string()).is_err() {
                            break;
                        }
                    },

                    Err(ReadlineError::Eof) => break,

                    Err(err) => {
                        eprintln!("Error: {:?}", err);
                        break;
                    },
                }
            }

            if let Some(parent) = history_path.parent() {
                std::fs::create_dir_all(parent).ok();
            }
            rl.save_history(&history_path).ok();
        });

        Ok(Self {
            command_rx,
            input_thread,
        })
    }

    /// 等待下一行输入（输入线程退出时返回 `None`）
    pub async fn recv_command(&mut self) -> Option<String> {
        self.command_rx.recv().await
    }

    /// 等待输入线程保存历史记录
    ///
    /// 只在收到 `exit` 或通道关闭后调用，此时输入线程已经退出循环。
    pub fn finish(self) {
        drop(self.command_rx);
        if self.input_thread.join().is_err() {
            eprintln!("⚠️  输入线程异常退出");
        }
    }
}

fn history_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("armdeck").join("history.txt"))
        .unwrap_or_else(|| PathBuf::from(".armdeck_history"))
}

/// 运行 REPL 模式
pub async fn run_repl(settings: &Settings) -> Result<()> {
    let mut console = settings.open_console()?;
    let mut input = ReplInput::new()?;

    println!("armdeck CLI v{} - 交互式 Shell", env!("CARGO_PKG_VERSION"));
    println!("模式: {}，输入 'help' 查看帮助，'exit' 退出", console.mode());
    println!();

    while let Some(line) = input.recv_command().await {
        match line.as_str() {
            "exit" | "quit" => {
                println!("👋 再见！");
                break;
            },

            INTERRUPT => {
                eprintln!("🛑 Ctrl+C: emergency stop");
                if let Err(err) = stop::emergency_stop(&mut console).await {
                    eprintln!("❌ Error: {}", err);
                }
            },

            "help" => print_help(),

            _ => {
                if let Err(err) = handle_command(&line, &mut console).await {
                    eprintln!("❌ Error: {:#}", err);
                    print_help_hint(&line);
                }
            },
        }
    }

    input.finish();
    Ok(())
}

/// 处理命令
async fn handle_command<T: Transport>(line: &str, console: &mut RobotConsole<T>) -> Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = parts.first() else {
        return Ok(());
    };

    match command {
        "status" => print_status(console),

        "joints" => print_joints(console.store()),

        "connect" => {
            if console.store().is_connected() {
                println!("⚠️  已经连接");
                return Ok(());
            }
            if let Some(host) = parts.get(1) {
                let port = match parts.get(2) {
                    Some(_) => arg::<u16>(&parts, 2, "port")?,
                    None => console.store().robot_port(),
                };
                console.set_robot_address(*host, port);
            }
            let outcome = console.toggle_connection().await?;
            print_outcome(
                &format!(
                    "已连接 {}:{}",
                    console.store().robot_ip(),
                    console.store().robot_port()
                ),
                outcome,
            );
        },

        "disconnect" => {
            if !console.store().is_connected() {
                println!("⚠️  未连接");
                return Ok(());
            }
            let outcome = console.toggle_connection().await?;
            print_outcome("已断开", outcome);
        },

        "jog" => {
            let joint: JointId = arg(&parts, 1, "joint")?;
            let dir: Direction = arg(&parts, 2, "direction")?;
            let outcome = console.jog_joint(joint, dir).await?;
            if let Some(j) = console.store().joint(joint) {
                print_outcome(&format!("J{} {} → {}", joint, dir, j.angle), outcome);
            }
        },

        "set" => {
            let joint: JointId = arg(&parts, 1, "joint")?;
            let text = parts.get(2).copied().unwrap_or_default();
            let value = parse_number(text)
                .with_context(|| format!("无效的角度: {:?}", text))?;
            let angle = console.set_joint_angle(joint, Deg(value))?;
            println!("✅ J{} = {}", joint, angle);
        },

        "enter" => {
            let joint: JointId = arg(&parts, 1, "joint")?;
            let text = rest(line, 2);
            let angle = console.enter_joint_angle(joint, text)?;
            println!("✅ J{} = {}", joint, angle);
        },

        "enable" | "disable" => {
            let joint: JointId = arg(&parts, 1, "joint")?;
            let enabled = command == "enable";
            console.set_joint_enabled(joint, enabled)?;
            println!("✅ J{} {}", joint, if enabled { "已使能" } else { "已禁用" });
        },

        "reset" => {
            console.reset_joints()?;
            println!("✅ 所有关节已归零");
        },

        "translate" => {
            let jog: TcpJog = arg(&parts, 1, "direction")?;
            let step = match parts.get(2) {
                Some(_) => arg::<f64>(&parts, 2, "step")?,
                None => console.steps().tcp_step_m(),
            };
            let outcome = console.jog_tcp(jog, step).await?;
            print_outcome(&format!("TCP {} {} m", jog, step), outcome);
        },

        "rotate" => {
            let axis: RotationAxis = arg(&parts, 1, "axis")?;
            let dir: Direction = arg(&parts, 2, "direction")?;
            let value: f64 = arg(&parts, 3, "value")?;
            let outcome = console.rotate_tcp(axis, value, dir).await?;
            print_outcome(&format!("TCP {}{} {}", axis, dir, value), outcome);
        },

        "goto" => {
            let x: f64 = arg(&parts, 1, "x")?;
            let y: f64 = arg(&parts, 2, "y")?;
            let z: f64 = arg(&parts, 3, "z")?;
            let outcome = console.go_to_position(Position::new(x, y, z))?;
            print_outcome(&format!("位置 {}", console.store().position()), outcome);
        },

        "program" => match parts.get(1).copied() {
            Some("start") => {
                let name = rest(line, 2);
                let outcome = console.start_program(name).await?;
                print_outcome(&format!("程序 \"{}\" 已启动", name), outcome);
            },
            Some("stop") => {
                let outcome = console.stop_program().await?;
                print_outcome("程序已停止", outcome);
            },
            _ => anyhow::bail!("用法: program start <name> | program stop"),
        },

        "stop" => stop::emergency_stop(console).await?,

        "import" => {
            let path = PathBuf::from(rest(line, 1));
            crate::commands::ImportCommand { file: path }.execute(console)?;
        },

        "send" => {
            let id = console.submit_command(rest(line, 1))?;
            println!("⏳ #{} Command queued (demo mode)", id);
        },

        "log" => {
            let limit = match parts.get(1) {
                Some(_) => arg::<usize>(&parts, 1, "count")?,
                None => DEFAULT_LOG_LINES,
            };
            print_log(console.log(), limit);
        },

        "clear-log" => {
            console.clear_log();
            println!("✅ 命令日志已清空");
        },

        "configs" => print_configs(console.store()),

        "select" => {
            let id = parts.get(1).context("缺少配置 ID")?;
            console.select_config(id)?;
            println!("✅ 当前配置: {}", id);
        },

        "mode" => match parts.get(1) {
            Some(_) => {
                let mode: ControlMode = arg(&parts, 1, "mode")?;
                console.set_mode(mode);
                println!("✅ 模式: {}", mode);
            },
            None => println!("{}", console.mode()),
        },

        _ => anyhow::bail!("未知命令: {}", command),
    }

    Ok(())
}

/// 解析第 `index` 个参数
fn arg<V>(parts: &[&str], index: usize, name: &str) -> Result<V>
where
    V: FromStr,
    V::Err: std::fmt::Display,
{
    let raw = parts
        .get(index)
        .with_context(|| format!("缺少参数 <{}>", name))?;
    raw.parse::<V>()
        .map_err(|e| anyhow::anyhow!("无效的 <{}> {:?}: {}", name, raw, e))
}

/// 跳过前 `skip` 个词后的剩余文本
fn rest(line: &str, skip: usize) -> &str {
    let mut remaining = line.trim_start();
    for _ in 0..skip {
        remaining = match remaining.find(char::is_whitespace) {
            Some(end) => remaining[end..].trim_start(),
            None => "",
        };
    }
    remaining.trim_end()
}

/// 打印帮助信息
fn print_help() {
    println!("可用命令:");
    println!("  status                        显示会话状态");
    println!("  joints                        显示关节表");
    println!("  connect [host] [port]         连接到机器人");
    println!("  disconnect                    断开连接");
    println!("  jog <joint> <+|->             关节点动");
    println!("  set <joint> <deg>             设置关节角度（限幅）");
    println!("  enter <joint> <text>          手动输入关节角度");
    println!("  enable|disable <joint>        使能/禁用关节");
    println!("  reset                         所有关节归零");
    println!("  translate <dir> [step]        TCP 平移（up/down/left/right/z-up/z-down）");
    println!("  rotate <rx|ry|rz> <+|-> <v>   TCP 旋转");
    println!("  goto <x> <y> <z>              移动到位置（仅演示模式）");
    println!("  program start <name>|stop     程序控制");
    println!("  stop                          急停");
    println!("  import <file>                 导入 URDF 描述文件");
    println!("  send <command>                发送原始命令");
    println!("  log [n]                       显示命令日志");
    println!("  clear-log                     清空命令日志");
    println!("  configs                       列出机器人配置");
    println!("  select <id>                   选择机器人配置");
    println!("  mode [demo|live]              查看/切换运行模式");
    println!("  help                          显示帮助");
    println!("  exit / quit                   退出");
    println!();
    println!("快捷键:");
    println!("  Ctrl+C                        急停");
    println!("  Ctrl+D                        退出");
    println!();
}

/// 提供基于错误的帮助提示
fn print_help_hint(command: &str) {
    if command.starts_with("jog") {
        eprintln!("💡 提示: 使用 'jog 1 +' 点动关节 1");
    } else if command.starts_with("translate") {
        eprintln!("💡 提示: 使用 'translate up 0.01' 平移 TCP");
    } else if command.starts_with("goto") {
        eprintln!("💡 提示: 控制服务没有位置接口，使用 'mode demo' 后再试");
    } else {
        eprintln!("💡 提示: 输入 'help' 查看所有命令");
    }
}
