//! 点动（Jog）词汇
//!
//! 方向、平移轴、旋转轴，以及控制面板方向键到 (轴, 方向) 的映射。
//! 启用 `serde` feature 后，序列化形式与控制服务的 JSON 字段一致
//! （`"+"`/`"-"`、`"x"`、`"rx"`）。

use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// 点动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Positive,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Negative,
}

impl Direction {
    /// 符号（+1.0 / -1.0）
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Positive => "+",
            Direction::Negative => "-",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "pos" | "positive" => Ok(Direction::Positive),
            "-" | "neg" | "negative" => Ok(Direction::Negative),
            other => Err(ModelError::UnknownDirection(other.to_string())),
        }
    }
}

/// TCP 平移轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TranslationAxis {
    X,
    Y,
    Z,
}

impl TranslationAxis {
    pub const fn as_str(self) -> &'static str {
        match self {
            TranslationAxis::X => "x",
            TranslationAxis::Y => "y",
            TranslationAxis::Z => "z",
        }
    }
}

impl fmt::Display for TranslationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationAxis {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(TranslationAxis::X),
            "y" => Ok(TranslationAxis::Y),
            "z" => Ok(TranslationAxis::Z),
            other => Err(ModelError::UnknownAxis(other.to_string())),
        }
    }
}

/// TCP 旋转轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RotationAxis {
    Rx,
    Ry,
    Rz,
}

impl RotationAxis {
    pub const fn as_str(self) -> &'static str {
        match self {
            RotationAxis::Rx => "rx",
            RotationAxis::Ry => "ry",
            RotationAxis::Rz => "rz",
        }
    }
}

impl fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationAxis {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rx" => Ok(RotationAxis::Rx),
            "ry" => Ok(RotationAxis::Ry),
            "rz" => Ok(RotationAxis::Rz),
            other => Err(ModelError::UnknownAxis(other.to_string())),
        }
    }
}

/// 控制面板上的 TCP 方向键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TcpJog {
    Up,
    Down,
    Left,
    Right,
    ZUp,
    ZDown,
}

impl TcpJog {
    pub const ALL: [TcpJog; 6] = [
        TcpJog::Up,
        TcpJog::Down,
        TcpJog::Left,
        TcpJog::Right,
        TcpJog::ZUp,
        TcpJog::ZDown,
    ];

    /// 方向键对应的平移轴与方向
    ///
    /// 上下为 Y 轴，左右为 X 轴，Z+/Z- 为 Z 轴。
    pub const fn axis_direction(self) -> (TranslationAxis, Direction) {
        match self {
            TcpJog::Up => (TranslationAxis::Y, Direction::Positive),
            TcpJog::Down => (TranslationAxis::Y, Direction::Negative),
            TcpJog::Left => (TranslationAxis::X, Direction::Negative),
            TcpJog::Right => (TranslationAxis::X, Direction::Positive),
            TcpJog::ZUp => (TranslationAxis::Z, Direction::Positive),
            TcpJog::ZDown => (TranslationAxis::Z, Direction::Negative),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TcpJog::Up => "up",
            TcpJog::Down => "down",
            TcpJog::Left => "left",
            TcpJog::Right => "right",
            TcpJog::ZUp => "z-up",
            TcpJog::ZDown => "z-down",
        }
    }
}

impl fmt::Display for TcpJog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TcpJog {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        TcpJog::ALL
            .into_iter()
            .find(|jog| jog.as_str() == key)
            .ok_or(ModelError::UnknownDirection(key))
    }
}
