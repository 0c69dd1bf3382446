//! 单位与限幅的属性测试
//!
//! 使用 proptest 验证数学属性。

use armdeck_types::{Deg, Joint, JointPatch, Rad};
use proptest::prelude::*;

proptest! {
    /// 测试弧度到角度的往返转换
    #[test]
    fn rad_deg_roundtrip(rad in -100.0..100.0f64) {
        let r = Rad(rad);
        let r2 = r.to_deg().to_rad();
        prop_assert!((r.0 - r2.0).abs() < 1e-10);
    }

    /// 测试角度加法交换律
    #[test]
    fn deg_addition_commutative(a in -360.0..360.0f64, b in -360.0..360.0f64) {
        prop_assert_eq!(Deg(a) + Deg(b), Deg(b) + Deg(a));
    }

    /// 任意写入后角度都在限位内
    #[test]
    fn set_angle_stays_within_limits(
        lo in -180.0..0.0f64,
        span in 0.0..360.0f64,
        value in -1000.0..1000.0f64,
    ) {
        let mut joint = Joint::new(1, "J", Deg(lo), Deg(lo + span)).unwrap();
        joint.set_angle(Deg(value));
        prop_assert!(joint.within_limits(joint.angle));
        prop_assert_eq!(joint.angle, joint.target_angle);
        prop_assert_eq!(joint.angle, Deg(value).clamp(joint.min_limit, joint.max_limit));
    }

    /// 部分更新（含限位修改）后不变量仍然成立
    #[test]
    fn patch_preserves_invariant(
        angle in -500.0..500.0f64,
        min in -200.0..200.0f64,
        max in -200.0..200.0f64,
        torque in -50.0..150.0f64,
    ) {
        let mut joint = Joint::new(3, "Elbow", Deg(-135.0), Deg(135.0)).unwrap();
        joint.apply(
            &JointPatch::new()
                .angle(Deg(angle))
                .limits(Deg(min), Deg(max))
                .torque(torque),
        );
        prop_assert!(joint.min_limit <= joint.max_limit);
        prop_assert!(joint.within_limits(joint.angle));
        prop_assert!(joint.within_limits(joint.target_angle));
        prop_assert!((0.0..=100.0).contains(&joint.torque));
    }

    /// 限位颠倒时限幅也不会 panic，结果不超过上限
    #[test]
    fn clamp_with_any_limits(
        value in -1000.0..1000.0f64,
        min in -200.0..200.0f64,
        max in -200.0..200.0f64,
    ) {
        let clamped = Deg(value).clamp(Deg(min), Deg(max));
        prop_assert!(clamped <= Deg(max));
        if min <= max {
            prop_assert!(clamped >= Deg(min));
        }
    }
}
