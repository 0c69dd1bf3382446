//! Builder 模式实现
//!
//! 提供链式构造 `RobotStore` 实例的便捷方式。

use crate::store::{DEFAULT_CONNECTION_URL, DEFAULT_ROBOT_IP, DEFAULT_ROBOT_PORT, RobotStore};
use armdeck_types::{Position, RobotConfig};

/// RobotStore Builder（链式构造）
///
/// # Example
///
/// ```
/// use armdeck_store::StoreBuilder;
///
/// let store = StoreBuilder::new()
///     .robot_ip("10.0.0.7")
///     .robot_port(30003)
///     .build();
/// assert_eq!(store.robot_port(), 30003);
/// assert!(store.current_config().is_some());
/// ```
pub struct StoreBuilder {
    /// 初始当前配置（`None` 表示未加载任何配置）
    initial: Option<RobotConfig>,
    /// 额外的可选配置
    extra_configs: Vec<RobotConfig>,
    connection_url: Option<String>,
    robot_ip: Option<String>,
    robot_port: Option<u16>,
    position: Option<Position>,
}

impl StoreBuilder {
    /// 创建新的 Builder（默认 6 轴配置）
    pub fn new() -> Self {
        Self {
            initial: Some(RobotConfig::default_6dof()),
            extra_configs: Vec::new(),
            connection_url: None,
            robot_ip: None,
            robot_port: None,
            position: None,
        }
    }

    /// 使用指定配置作为初始配置（同时加入可选列表）
    pub fn config(mut self, config: RobotConfig) -> Self {
        self.initial = Some(config);
        self
    }

    /// 不加载任何配置（可选列表也为空）
    pub fn without_config(mut self) -> Self {
        self.initial = None;
        self
    }

    /// 追加可选配置（不会成为当前配置）
    pub fn with_configs(mut self, configs: impl IntoIterator<Item = RobotConfig>) -> Self {
        self.extra_configs.extend(configs);
        self
    }

    pub fn connection_url(mut self, url: impl Into<String>) -> Self {
        self.connection_url = Some(url.into());
        self
    }

    pub fn robot_ip(mut self, ip: impl Into<String>) -> Self {
        self.robot_ip = Some(ip.into());
        self
    }

    pub fn robot_port(mut self, port: u16) -> Self {
        self.robot_port = Some(port);
        self
    }

    /// 初始末端位置（例如目录服务中记录的坐标）
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// 构建存储
    pub fn build(self) -> RobotStore {
        let mut store = RobotStore {
            current_config: None,
            available_configs: Vec::new(),
            is_connected: false,
            connection_url: self
                .connection_url
                .unwrap_or_else(|| DEFAULT_CONNECTION_URL.to_string()),
            robot_ip: self.robot_ip.unwrap_or_else(|| DEFAULT_ROBOT_IP.to_string()),
            robot_port: self.robot_port.unwrap_or(DEFAULT_ROBOT_PORT),
            is_program_running: false,
            current_program_name: String::new(),
            position: self.position.unwrap_or(Position::ORIGIN),
        };

        if let Some(config) = self.initial {
            store.add_config(config.clone());
            store.set_current_config(config);
        }
        for config in self.extra_configs {
            store.add_config(config);
        }
        store
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_matches_new() {
        assert_eq!(StoreBuilder::new().build(), RobotStore::new());
    }

    #[test]
    fn test_builder_without_config() {
        let store = StoreBuilder::new().without_config().build();
        assert!(store.current_config().is_none());
        assert!(store.available_configs().is_empty());
    }

    #[test]
    fn test_builder_extra_configs() {
        let mut extra = RobotConfig::default_6dof();
        extra.id = "ur10".to_string();
        let store = StoreBuilder::new()
            .with_configs([extra])
            .position(Position::new(0.1, 0.2, 0.3))
            .build();

        assert_eq!(store.available_configs().len(), 2);
        assert_eq!(store.current_config().unwrap().id, "default-6dof");
        assert!(store.find_config("ur10").is_some());
        assert_eq!(store.position(), Position::new(0.1, 0.2, 0.3));
    }
}
