//! 运行模式
//!
//! 支持两种模式：
//! - One-shot 模式：每个命令使用全新的控制台
//! - REPL 模式：交互式 Shell，状态在会话内保留

pub mod oneshot;
pub mod repl;
