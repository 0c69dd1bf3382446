//! 强类型角度单位
//!
//! 关节表格、滑块与数据模型使用角度（度），而点动步长以弧度给出。
//! 使用 NewType 区分两者，换算只在这里发生。
//!
//! # 示例
//!
//! ```rust
//! use armdeck_types::{Deg, Rad};
//!
//! let step = Rad(0.01);
//! let delta = step.to_deg();
//! assert!((delta.0 - 0.5729577951308232).abs() < 1e-12);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 弧度（NewType）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rad(pub f64);

impl Rad {
    /// 零弧度常量
    pub const ZERO: Self = Rad(0.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Rad(value)
    }

    /// 转换为角度
    #[inline]
    pub fn to_deg(self) -> Deg {
        Deg(self.0.to_degrees())
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Rad(self.0.abs())
    }

    /// 是否为有限值（排除 NaN 与无穷大）
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Rad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

impl Add for Rad {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Rad(self.0 + rhs.0)
    }
}

impl Sub for Rad {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Rad(self.0 - rhs.0)
    }
}

impl Mul<f64> for Rad {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Rad(self.0 * rhs)
    }
}

impl Neg for Rad {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Rad(-self.0)
    }
}

/// 角度（NewType）
///
/// 关节角度、限位与目标角度全部以度存储。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Deg(pub f64);

impl Deg {
    /// 零角度常量
    pub const ZERO: Self = Deg(0.0);

    /// 180 度
    pub const DEG_180: Self = Deg(180.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Deg(value)
    }

    /// 转换为弧度
    #[inline]
    pub fn to_rad(self) -> Rad {
        Rad(self.0.to_radians())
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Deg(self.0.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// 限制范围
    ///
    /// 不会 panic：`min > max` 时结果为 `max`，NaN 原样返回。
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        if self.0.is_nan() {
            return self;
        }
        Deg(self.0.max(min.0).min(max.0))
    }
}

impl fmt::Display for Deg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

impl Add for Deg {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Deg(self.0 + rhs.0)
    }
}

impl Sub for Deg {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Deg(self.0 - rhs.0)
    }
}

impl Mul<f64> for Deg {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Deg(self.0 * rhs)
    }
}

impl Neg for Deg {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Deg(-self.0)
    }
}

impl AddAssign for Deg {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Deg {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<Rad> for Deg {
    fn from(rad: Rad) -> Self {
        rad.to_deg()
    }
}

impl From<Deg> for Rad {
    fn from(deg: Deg) -> Self {
        deg.to_rad()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rad_to_deg() {
        let deg = Rad(std::f64::consts::PI).to_deg();
        assert!((deg.0 - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_deg_to_rad() {
        let rad = Deg::DEG_180.to_rad();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-10);
    }

    #[test]
    fn test_jog_step_conversion() {
        // 0.01 rad 约等于 0.573°
        let delta = Rad(0.01).to_deg();
        assert!((delta.0 - 0.573).abs() < 1e-3);
    }

    #[test]
    fn test_deg_clamp() {
        assert_eq!(Deg(200.0).clamp(Deg(-180.0), Deg(180.0)), Deg(180.0));
        assert_eq!(Deg(-200.0).clamp(Deg(-180.0), Deg(180.0)), Deg(-180.0));
        assert_eq!(Deg(12.5).clamp(Deg(-180.0), Deg(180.0)), Deg(12.5));
    }

    #[test]
    fn test_deg_clamp_inverted_limits() {
        // 限位颠倒时不 panic，统一落到上限
        assert_eq!(Deg(5.0).clamp(Deg(10.0), Deg(-10.0)), Deg(-10.0));
        assert_eq!(Deg(-50.0).clamp(Deg(10.0), Deg(-10.0)), Deg(-10.0));
        assert!(Deg(f64::NAN).clamp(Deg(-1.0), Deg(1.0)).0.is_nan());
        assert_eq!(Deg(3.0).clamp(Deg(f64::NAN), Deg(1.0)), Deg(1.0));
    }

    #[test]
    fn test_deg_operations() {
        let mut a = Deg(10.0);
        a += Deg(5.0);
        assert_eq!(a, Deg(15.0));
        a -= Deg(20.0);
        assert_eq!(a, Deg(-5.0));
        assert_eq!(-a, Deg(5.0));
        assert_eq!(Deg(2.0) * 3.0, Deg(6.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Deg(12.345)), "12.3°");
        assert_eq!(format!("{}", Rad(0.01)), "0.0100 rad");
    }
}
