//! 命令日志
//!
//! 最新条目在前，容量有限，超出时丢弃最旧的条目。

use std::collections::VecDeque;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// 命令状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// 已排队（原始命令面板）
    Sent,
    Success,
    Error,
}

impl CommandStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            CommandStatus::Sent => "sent",
            CommandStatus::Success => "success",
            CommandStatus::Error => "error",
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 日志条目
#[derive(Debug, Clone, PartialEq)]
pub struct CommandEntry {
    /// 单调递增序号
    pub id: u64,
    /// Unix 毫秒时间戳
    pub timestamp_ms: u64,
    pub command: String,
    pub status: CommandStatus,
    pub response: Option<String>,
}

impl fmt::Display for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:<4} [{:>7}] {}", self.id, self.status, self.command)?;
        if let Some(response) = &self.response {
            write!(f, " → {}", response)?;
        }
        Ok(())
    }
}

/// 有界命令日志
#[derive(Debug, Clone)]
pub struct CommandLog {
    entries: VecDeque<CommandEntry>,
    capacity: usize,
    next_id: u64,
}

impl CommandLog {
    /// 创建日志（容量至少为 1）
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 1,
        }
    }

    /// 记录一条命令，返回条目 ID
    pub fn push(
        &mut self,
        command: impl Into<String>,
        status: CommandStatus,
        response: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.push_front(CommandEntry {
            id,
            timestamp_ms: now_millis(),
            command: command.into(),
            status,
            response,
        });
        self.entries.truncate(self.capacity);
        id
    }

    /// 最新条目在前
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&CommandEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 清空日志（序号继续递增）
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LOG_CAPACITY)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = CommandLog::new(10);
        log.push("HOME", CommandStatus::Sent, None);
        log.push("RESET", CommandStatus::Sent, None);

        let commands: Vec<_> = log.entries().map(|e| e.command.as_str()).collect();
        assert_eq!(commands, ["RESET", "HOME"]);
        assert_eq!(log.latest().map(|e| e.id), Some(2));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = CommandLog::new(3);
        for i in 0..5 {
            log.push(format!("CMD {}", i), CommandStatus::Success, None);
        }
        assert_eq!(log.len(), 3);
        let ids: Vec<_> = log.entries().map(|e| e.id).collect();
        assert_eq!(ids, [5, 4, 3]);
    }

    #[test]
    fn test_clear_keeps_ids_increasing() {
        let mut log = CommandLog::new(2);
        log.push("GET_STATUS", CommandStatus::Success, Some("ok".into()));
        assert_eq!(log.latest().unwrap().status, CommandStatus::Success);

        log.clear();
        assert!(log.is_empty());
        // 序号不回退
        assert_eq!(log.push("HOME", CommandStatus::Sent, None), 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut log = CommandLog::new(0);
        log.push("A", CommandStatus::Sent, None);
        log.push("B", CommandStatus::Sent, None);
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
    }
}
