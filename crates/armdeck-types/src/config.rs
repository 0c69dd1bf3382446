//! 机器人配置与末端位置

use crate::joint::{Joint, JointId};
use crate::units::Deg;
use std::fmt;

/// 默认配置 ID
pub const DEFAULT_CONFIG_ID: &str = "default-6dof";

/// 一个具名的机器人型号/实例
///
/// `dof` 与 `joints.len()` 的一致性不做强制检查，见 [`RobotConfig::dof_mismatch`]。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotConfig {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub dof: usize,
    pub joints: Vec<Joint>,
}

impl RobotConfig {
    /// 通用 6 轴机械臂（启动时的默认配置）
    pub fn default_6dof() -> Self {
        const JOINTS: [(&str, f64); 6] = [
            ("Base", 180.0),
            ("Shoulder", 90.0),
            ("Elbow", 135.0),
            ("Wrist 1", 180.0),
            ("Wrist 2", 180.0),
            ("Wrist 3", 180.0),
        ];

        let joints = JOINTS
            .iter()
            .zip(1..)
            .map(|(&(name, limit), id)| Joint {
                id,
                name: name.to_string(),
                angle: Deg::ZERO,
                target_angle: Deg::ZERO,
                min_limit: Deg(-limit),
                max_limit: Deg(limit),
                velocity: 0.0,
                torque: 0.0,
                enabled: true,
            })
            .collect();

        Self {
            id: DEFAULT_CONFIG_ID.to_string(),
            name: "Generic 6-DOF Robot".to_string(),
            manufacturer: "Generic".to_string(),
            model: "6-Axis".to_string(),
            dof: 6,
            joints,
        }
    }

    /// 按 ID 查找关节
    pub fn joint(&self, id: JointId) -> Option<&Joint> {
        self.joints.iter().find(|j| j.id == id)
    }

    /// 按 ID 查找关节（可变）
    pub fn joint_mut(&mut self, id: JointId) -> Option<&mut Joint> {
        self.joints.iter_mut().find(|j| j.id == id)
    }

    /// 所有关节 ID（保持顺序）
    pub fn joint_ids(&self) -> Vec<JointId> {
        self.joints.iter().map(|j| j.id).collect()
    }

    /// 已使能关节数量
    pub fn enabled_count(&self) -> usize {
        self.joints.iter().filter(|j| j.enabled).count()
    }

    /// 声明的自由度与关节数量是否不一致
    pub fn dof_mismatch(&self) -> bool {
        self.dof != self.joints.len()
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self::default_6dof()
    }
}

impl fmt::Display for RobotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} DOF)", self.name, self.dof)
    }
}

/// 末端执行器笛卡尔坐标（米）
///
/// 与关节角度相互独立，没有正运动学关联。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// 原点
    pub const ORIGIN: Self = Position {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// 三个分量是否都是有限值
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {:7.2}  Y: {:7.2}  Z: {:7.2}", self.x, self.y, self.z)
    }
}
