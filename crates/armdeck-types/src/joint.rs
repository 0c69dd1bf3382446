//! 关节模型
//!
//! 单个旋转轴的状态与限位。角度均以度为单位。
//!
//! # 不变量
//!
//! 任何修改之后都满足 `min_limit <= angle <= max_limit`（`target_angle` 同理）。
//! 越界写入会被限幅，而不是被拒绝。
//!
//! # 示例
//!
//! ```rust
//! use armdeck_types::{Deg, Joint, JointPatch};
//!
//! let mut joint = Joint::new(2, "Shoulder", Deg(-90.0), Deg(90.0)).unwrap();
//! joint.apply(&JointPatch::new().angle(Deg(120.0)));
//! assert_eq!(joint.angle, Deg(90.0));
//! ```

use crate::error::ModelError;
use crate::units::Deg;
use std::fmt;

/// 关节 ID（配置内从 1 开始，稳定且唯一）
pub type JointId = u32;

/// 负载百分比上限
pub const MAX_TORQUE_PERCENT: f64 = 100.0;

/// 机械臂的一个旋转关节
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Joint {
    /// 关节 ID
    pub id: JointId,
    /// 显示名称
    pub name: String,
    /// 当前角度
    pub angle: Deg,
    /// 目标角度
    pub target_angle: Deg,
    /// 角度下限
    pub min_limit: Deg,
    /// 角度上限
    pub max_limit: Deg,
    /// 速度（度/秒，仅显示）
    pub velocity: f64,
    /// 负载（百分比 0-100，仅显示）
    pub torque: f64,
    /// 是否允许操作
    pub enabled: bool,
}

impl Joint {
    /// 创建归零、已使能的关节
    ///
    /// # 错误
    ///
    /// 限位非有限值或 `min > max` 时返回 [`ModelError::InvalidLimits`]。
    pub fn new(
        id: JointId,
        name: impl Into<String>,
        min_limit: Deg,
        max_limit: Deg,
    ) -> Result<Self, ModelError> {
        if !valid_limits(min_limit, max_limit) {
            return Err(ModelError::InvalidLimits {
                joint: id,
                min: min_limit.0,
                max: max_limit.0,
            });
        }

        let mut joint = Self {
            id,
            name: name.into(),
            angle: Deg::ZERO,
            target_angle: Deg::ZERO,
            min_limit,
            max_limit,
            velocity: 0.0,
            torque: 0.0,
            enabled: true,
        };
        // 限位不包含 0 时，零位也必须落在限位内
        joint.angle = joint.clamp_angle(Deg::ZERO);
        joint.target_angle = joint.angle;
        Ok(joint)
    }

    /// 将角度限制到 `[min_limit, max_limit]`
    ///
    /// NaN 原样返回，调用方需先用 [`parse_number`](crate::parse_number) 过滤。
    #[inline]
    pub fn clamp_angle(&self, angle: Deg) -> Deg {
        angle.clamp(self.min_limit, self.max_limit)
    }

    /// 角度是否在限位内
    #[inline]
    pub fn within_limits(&self, angle: Deg) -> bool {
        angle >= self.min_limit && angle <= self.max_limit
    }

    /// 同时设置当前角度与目标角度（限幅）
    ///
    /// 非有限值被忽略，返回是否发生了写入。
    pub fn set_angle(&mut self, angle: Deg) -> bool {
        if !angle.is_finite() {
            return false;
        }
        let clamped = self.clamp_angle(angle);
        self.angle = clamped;
        self.target_angle = clamped;
        true
    }

    /// 合并部分字段
    ///
    /// - 只写入 `patch` 中存在的字段
    /// - 若修改后的限位 `min > max`，限位保持不变
    /// - 角度在合并后重新限幅，保证不变量
    pub fn apply(&mut self, patch: &JointPatch) {
        if patch.min_limit.is_some() || patch.max_limit.is_some() {
            let min = patch.min_limit.unwrap_or(self.min_limit);
            let max = patch.max_limit.unwrap_or(self.max_limit);
            if valid_limits(min, max) {
                self.min_limit = min;
                self.max_limit = max;
            }
        }

        if let Some(ref name) = patch.name {
            self.name = name.clone();
        }
        if let Some(angle) = patch.angle.filter(|a| a.is_finite()) {
            self.angle = angle;
        }
        if let Some(target) = patch.target_angle.filter(|a| a.is_finite()) {
            self.target_angle = target;
        }
        if let Some(velocity) = patch.velocity.filter(|v| v.is_finite()) {
            self.velocity = velocity;
        }
        if let Some(torque) = patch.torque.filter(|t| t.is_finite()) {
            self.torque = torque.clamp(0.0, MAX_TORQUE_PERCENT);
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }

        self.angle = self.clamp_angle(self.angle);
        self.target_angle = self.clamp_angle(self.target_angle);
    }

    /// 归零运动量（角度、目标、速度、负载），限位/名称/使能不变
    pub fn reset_motion(&mut self) {
        self.angle = self.clamp_angle(Deg::ZERO);
        self.target_angle = self.angle;
        self.velocity = 0.0;
        self.torque = 0.0;
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "J{} {:<10} {:>8.1}° [{:.0}, {:.0}]{}",
            self.id,
            self.name,
            self.angle.0,
            self.min_limit.0,
            self.max_limit.0,
            if self.enabled { "" } else { " (disabled)" }
        )
    }
}

fn valid_limits(min: Deg, max: Deg) -> bool {
    min.is_finite() && max.is_finite() && min <= max
}

/// 关节的部分更新
///
/// 对应界面上的单字段修改（使能开关、负载显示等）。关节 ID 不可修改。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointPatch {
    pub name: Option<String>,
    pub angle: Option<Deg>,
    pub target_angle: Option<Deg>,
    pub min_limit: Option<Deg>,
    pub max_limit: Option<Deg>,
    pub velocity: Option<f64>,
    pub torque: Option<f64>,
    pub enabled: Option<bool>,
}

impl JointPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn angle(mut self, angle: Deg) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn target_angle(mut self, angle: Deg) -> Self {
        self.target_angle = Some(angle);
        self
    }

    pub fn limits(mut self, min: Deg, max: Deg) -> Self {
        self.min_limit = Some(min);
        self.max_limit = Some(max);
        self
    }

    pub fn velocity(mut self, velocity: f64) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn torque(mut self, torque: f64) -> Self {
        self.torque = Some(torque);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// 是否不包含任何字段
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoulder() -> Joint {
        Joint::new(2, "Shoulder", Deg(-90.0), Deg(90.0)).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_limits() {
        let err = Joint::new(1, "Base", Deg(10.0), Deg(-10.0)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidLimits { joint: 1, .. }));
        assert!(Joint::new(1, "Base", Deg(f64::NAN), Deg(10.0)).is_err());
    }

    #[test]
    fn test_new_zero_outside_limits() {
        let joint = Joint::new(1, "Offset", Deg(10.0), Deg(20.0)).unwrap();
        assert_eq!(joint.angle, Deg(10.0));
        assert_eq!(joint.target_angle, Deg(10.0));
    }

    #[test]
    fn test_set_angle_clamps() {
        let mut joint = shoulder();
        assert!(joint.set_angle(Deg(135.0)));
        assert_eq!(joint.angle, Deg(90.0));
        assert_eq!(joint.target_angle, Deg(90.0));

        assert!(joint.set_angle(Deg(-135.0)));
        assert_eq!(joint.angle, Deg(-90.0));
    }

    #[test]
    fn test_set_angle_ignores_nan() {
        let mut joint = shoulder();
        joint.set_angle(Deg(45.0));
        assert!(!joint.set_angle(Deg(f64::NAN)));
        assert_eq!(joint.angle, Deg(45.0));
    }

    #[test]
    fn test_apply_enabled_only() {
        let mut joint = shoulder();
        joint.set_angle(Deg(30.0));
        joint.apply(&JointPatch::new().enabled(false));
        assert!(!joint.enabled);
        assert_eq!(joint.angle, Deg(30.0));
    }

    #[test]
    fn test_apply_narrowed_limits_reclamps() {
        let mut joint = shoulder();
        joint.set_angle(Deg(80.0));
        joint.apply(&JointPatch::new().limits(Deg(-45.0), Deg(45.0)));
        assert_eq!(joint.max_limit, Deg(45.0));
        assert_eq!(joint.angle, Deg(45.0));
        assert_eq!(joint.target_angle, Deg(45.0));
    }

    #[test]
    fn test_apply_inverted_limits_ignored() {
        let mut joint = shoulder();
        joint.apply(&JointPatch::new().limits(Deg(50.0), Deg(-50.0)));
        assert_eq!(joint.min_limit, Deg(-90.0));
        assert_eq!(joint.max_limit, Deg(90.0));
    }

    #[test]
    fn test_apply_torque_bounded() {
        let mut joint = shoulder();
        joint.apply(&JointPatch::new().torque(150.0).velocity(12.5));
        assert_eq!(joint.torque, 100.0);
        assert_eq!(joint.velocity, 12.5);
    }

    #[test]
    fn test_reset_motion_keeps_limits_and_flags() {
        let mut joint = shoulder();
        joint.apply(
            &JointPatch::new()
                .angle(Deg(10.0))
                .torque(40.0)
                .velocity(3.0)
                .enabled(false),
        );
        joint.reset_motion();
        assert_eq!(joint.angle, Deg::ZERO);
        assert_eq!(joint.target_angle, Deg::ZERO);
        assert_eq!(joint.velocity, 0.0);
        assert_eq!(joint.torque, 0.0);
        assert!(!joint.enabled);
        assert_eq!(joint.min_limit, Deg(-90.0));
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(JointPatch::new().is_empty());
        assert!(!JointPatch::new().enabled(true).is_empty());
    }
}
