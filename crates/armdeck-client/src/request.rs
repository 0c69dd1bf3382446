//! 请求体定义
//!
//! 字段名与控制服务的 JSON 保持一致。

use armdeck_types::{Direction, JointId, RotationAxis, TranslationAxis};
use serde::{Deserialize, Serialize};

/// 默认控制端口
pub const DEFAULT_CONTROL_PORT: u16 = 30002;

/// `/connect` 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub host: String,
    pub port: u16,
}

/// `/tcp/translate` 请求体（TCP 沿单轴平移点动）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub axis: TranslationAxis,
    /// 步长（预期 >= 0，方向由 `direction` 给出）
    pub value: f64,
    pub direction: Direction,
}

/// `/tcp/rotate` 请求体（TCP 姿态旋转点动）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotateRequest {
    pub axis: RotationAxis,
    pub value: f64,
    pub direction: Direction,
}

/// `/joint/move` 请求体（单关节点动，`value` 为弧度步长）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointMoveRequest {
    pub joint: JointId,
    pub value: f64,
    pub direction: Direction,
}

/// `/program/start` 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartProgramRequest {
    pub program_name: String,
}

/// 控制服务的统一响应
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let req = TranslateRequest {
            axis: TranslationAxis::Y,
            value: 0.01,
            direction: Direction::Negative,
        };
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({"axis": "y", "value": 0.01, "direction": "-"})
        );

        let req = JointMoveRequest {
            joint: 3,
            value: 0.03,
            direction: Direction::Positive,
        };
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({"joint": 3, "value": 0.03, "direction": "+"})
        );

        let req = StartProgramRequest {
            program_name: "palletize".to_string(),
        };
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({"programName": "palletize"})
        );
    }

    #[test]
    fn test_api_response_requires_bool() {
        assert!(serde_json::from_str::<ApiResponse>(r#"{"success":true}"#).is_ok());
        assert!(serde_json::from_str::<ApiResponse>(r#"{"success":"yes"}"#).is_err());
        assert!(serde_json::from_str::<ApiResponse>(r#"{}"#).is_err());
    }
}
