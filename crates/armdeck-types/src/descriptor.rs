//! 机器人描述文件（URDF）导入
//!
//! 这里只做最简单的识别：统计带 `name` 属性的 `<joint>` 标签数量，
//! 为每个关节生成 ±180° 的默认限位。几何、限位和父子关系都不解析。

use crate::config::RobotConfig;
use crate::error::ModelError;
use crate::joint::Joint;
use crate::units::Deg;
use regex::Regex;
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

static JOINT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<joint[^>]*name="([^"]*)"[^>]*>"#).expect("static joint tag pattern")
});

/// 导入关节的默认限位（度）
pub const IMPORTED_JOINT_LIMIT: f64 = 180.0;

/// 解析 URDF 文本，生成 `urdf-<毫秒时间戳>` 形式的配置 ID
pub fn parse_urdf(file_name: &str, content: &str) -> Result<RobotConfig, ModelError> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    parse_urdf_with_id(format!("urdf-{}", millis), file_name, content)
}

/// 使用指定 ID 解析 URDF 文本
///
/// # 错误
///
/// 文件中没有任何 `<joint name="...">` 标签时返回 [`ModelError::EmptyDescriptor`]。
pub fn parse_urdf_with_id(
    id: impl Into<String>,
    file_name: &str,
    content: &str,
) -> Result<RobotConfig, ModelError> {
    let joint_count = JOINT_TAG.captures_iter(content).count();
    if joint_count == 0 {
        return Err(ModelError::EmptyDescriptor {
            file_name: file_name.to_string(),
        });
    }

    let joints = (1..=joint_count as u32)
        .map(|id| {
            Joint::new(
                id,
                format!("Joint {}", id),
                Deg(-IMPORTED_JOINT_LIMIT),
                Deg(IMPORTED_JOINT_LIMIT),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RobotConfig {
        id: id.into(),
        name: display_name(file_name),
        manufacturer: "Custom".to_string(),
        model: "URDF Import".to_string(),
        dof: joint_count,
        joints,
    })
}

/// 去掉目录与 `.urdf` / `.xml` 扩展名
fn display_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    base.strip_suffix(".urdf")
        .or_else(|| base.strip_suffix(".xml"))
        .unwrap_or(base)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LINK: &str = r#"<?xml version="1.0"?>
<robot name="two_link">
  <link name="base"/>
  <link name="upper"/>
  <link name="lower"/>
  <joint name="shoulder" type="revolute">
    <parent link="base"/><child link="upper"/>
  </joint>
  <joint type="revolute" name="elbow">
    <parent link="upper"/><child link="lower"/>
  </joint>
</robot>"#;

    #[test]
    fn test_parse_two_joints() {
        let config = parse_urdf_with_id("urdf-1", "two_link.urdf", TWO_LINK).unwrap();
        assert_eq!(config.id, "urdf-1");
        assert_eq!(config.name, "two_link");
        assert_eq!(config.manufacturer, "Custom");
        assert_eq!(config.model, "URDF Import");
        assert_eq!(config.dof, 2);
        assert_eq!(config.joint_ids(), vec![1, 2]);
        assert_eq!(config.joints[1].name, "Joint 2");
        assert_eq!(config.joints[0].min_limit, Deg(-180.0));
        assert!(config.joints.iter().all(|j| j.enabled));
    }

    #[test]
    fn test_parse_generated_id() {
        let config = parse_urdf("arm.xml", TWO_LINK).unwrap();
        assert!(config.id.starts_with("urdf-"));
        assert_eq!(config.name, "arm");
    }

    #[test]
    fn test_parse_no_joints() {
        let err = parse_urdf_with_id("x", "empty.urdf", "<robot name=\"e\"/>").unwrap_err();
        assert_eq!(
            err,
            ModelError::EmptyDescriptor {
                file_name: "empty.urdf".to_string()
            }
        );
    }

    #[test]
    fn test_display_name_strips_directories() {
        assert_eq!(display_name("/tmp/models/ur5.urdf"), "ur5");
        assert_eq!(display_name("C:\\robots\\arm.xml"), "arm");
        assert_eq!(display_name("plain"), "plain");
    }
}
