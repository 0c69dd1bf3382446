//! 控制服务接口定义
//!
//! | 接口 | 路径 | 请求体 |
//! |---|---|---|
//! | `Connect` | `/connect` | `{host, port}` |
//! | `TranslateTcp` | `/tcp/translate` | `{axis, value, direction}` |
//! | `RotateTcp` | `/tcp/rotate` | `{axis, value, direction}` |
//! | `MoveJoint` | `/joint/move` | `{joint, value, direction}` |
//! | `StartProgram` | `/program/start` | `{programName}` |
//! | `StopProgram` | `/program/stop` | 无 |
//! | `EmergencyStop` | `/emergency-stop` | 无 |
//!
//! 全部为 `POST`，响应为 `{success: boolean}`。

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Connect,
    TranslateTcp,
    RotateTcp,
    MoveJoint,
    StartProgram,
    StopProgram,
    EmergencyStop,
}

impl Endpoint {
    pub const ALL: [Endpoint; 7] = [
        Endpoint::Connect,
        Endpoint::TranslateTcp,
        Endpoint::RotateTcp,
        Endpoint::MoveJoint,
        Endpoint::StartProgram,
        Endpoint::StopProgram,
        Endpoint::EmergencyStop,
    ];

    /// 相对于 API 根地址的路径
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Connect => "/connect",
            Endpoint::TranslateTcp => "/tcp/translate",
            Endpoint::RotateTcp => "/tcp/rotate",
            Endpoint::MoveJoint => "/joint/move",
            Endpoint::StartProgram => "/program/start",
            Endpoint::StopProgram => "/program/stop",
            Endpoint::EmergencyStop => "/emergency-stop",
        }
    }

    /// 用于错误消息与日志的名称
    pub const fn label(self) -> &'static str {
        match self {
            Endpoint::Connect => "Connection",
            Endpoint::TranslateTcp => "Translation",
            Endpoint::RotateTcp => "Rotation",
            Endpoint::MoveJoint => "Joint move",
            Endpoint::StartProgram => "Program start",
            Endpoint::StopProgram => "Program stop",
            Endpoint::EmergencyStop => "Emergency stop",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }
}
