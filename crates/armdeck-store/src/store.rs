//! 机器人状态存储
//!
//! 配置、关节、末端位置、连接与程序状态的唯一数据源。
//! 不感知网络与渲染；所有修改都是同步、不会失败的状态转换。
//!
//! # 所有权
//!
//! `RobotStore` 是普通值，由应用在启动时构造一次并以引用传递给使用方。
//! 没有模块级静态实例，测试中可以同时存在多个独立实例。

use armdeck_types::{Deg, Joint, JointId, JointPatch, Position, RobotConfig};
use tracing::{debug, trace};

/// 默认连接地址（仅用于显示）
pub const DEFAULT_CONNECTION_URL: &str = "ws://localhost:8080";
/// 默认机器人 IP
pub const DEFAULT_ROBOT_IP: &str = "192.168.1.100";
/// 默认机器人端口
pub const DEFAULT_ROBOT_PORT: u16 = 30002;

/// 机器人状态存储
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotStore {
    pub(crate) current_config: Option<RobotConfig>,
    pub(crate) available_configs: Vec<RobotConfig>,
    pub(crate) is_connected: bool,
    pub(crate) connection_url: String,
    pub(crate) robot_ip: String,
    pub(crate) robot_port: u16,
    pub(crate) is_program_running: bool,
    pub(crate) current_program_name: String,
    pub(crate) position: Position,
}

/// 存储的只读快照
///
/// 用于结构相等比较（例如验证无效操作不改变任何状态）。
pub type StoreSnapshot = RobotStore;

impl RobotStore {
    /// 以默认 6 轴配置创建存储
    pub fn new() -> Self {
        let config = RobotConfig::default_6dof();
        Self {
            available_configs: vec![config.clone()],
            current_config: Some(config),
            is_connected: false,
            connection_url: DEFAULT_CONNECTION_URL.to_string(),
            robot_ip: DEFAULT_ROBOT_IP.to_string(),
            robot_port: DEFAULT_ROBOT_PORT,
            is_program_running: false,
            current_program_name: String::new(),
            position: Position::ORIGIN,
        }
    }

    // ==================== 读取 ====================

    /// 当前配置
    pub fn current_config(&self) -> Option<&RobotConfig> {
        self.current_config.as_ref()
    }

    /// 可选配置列表
    pub fn available_configs(&self) -> &[RobotConfig] {
        &self.available_configs
    }

    /// 在可选列表中按 ID 查找配置
    pub fn find_config(&self, id: &str) -> Option<&RobotConfig> {
        self.available_configs.iter().find(|c| c.id == id)
    }

    /// 当前配置中的关节
    pub fn joint(&self, joint_id: JointId) -> Option<&Joint> {
        self.current_config.as_ref()?.joint(joint_id)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn connection_url(&self) -> &str {
        &self.connection_url
    }

    pub fn robot_ip(&self) -> &str {
        &self.robot_ip
    }

    pub fn robot_port(&self) -> u16 {
        self.robot_port
    }

    pub fn is_program_running(&self) -> bool {
        self.is_program_running
    }

    pub fn current_program_name(&self) -> &str {
        &self.current_program_name
    }

    /// 获取快照（克隆）
    pub fn snapshot(&self) -> StoreSnapshot {
        self.clone()
    }

    // ==================== 配置 ====================

    /// 整体替换当前配置（不校验 DOF 与关节数量）
    pub fn set_current_config(&mut self, config: RobotConfig) {
        debug!(config_id = %config.id, dof = config.dof, "set current config");
        self.current_config = Some(config);
    }

    /// 加入可选配置列表
    ///
    /// ID 已存在时原位替换旧条目，列表中不会出现重复 ID。当前配置不受影响。
    pub fn add_config(&mut self, config: RobotConfig) {
        match self.available_configs.iter_mut().find(|c| c.id == config.id) {
            Some(existing) => {
                debug!(config_id = %config.id, "replace existing config");
                *existing = config;
            },
            None => {
                debug!(config_id = %config.id, "add config");
                self.available_configs.push(config);
            },
        }
    }

    // ==================== 关节 ====================

    /// 合并部分字段到指定关节
    ///
    /// 没有当前配置或关节不存在时静默忽略。
    pub fn update_joint(&mut self, joint_id: JointId, patch: &JointPatch) {
        let Some(joint) = self.joint_mut(joint_id) else {
            trace!(joint_id, "update_joint ignored: no such joint");
            return;
        };
        joint.apply(patch);
    }

    /// 同时设置当前角度与目标角度
    ///
    /// 调用方应先按限位限幅；存储本身仍会限幅并忽略非有限值，以保证不变量。
    /// 没有当前配置或关节不存在时静默忽略。
    pub fn set_joint_angle(&mut self, joint_id: JointId, angle: Deg) {
        let Some(joint) = self.joint_mut(joint_id) else {
            trace!(joint_id, "set_joint_angle ignored: no such joint");
            return;
        };
        if !joint.set_angle(angle) {
            debug!(joint_id, angle = angle.0, "set_joint_angle ignored: non-finite angle");
        }
    }

    /// 所有关节归零（角度、目标、速度、负载），末端位置回到原点
    ///
    /// 限位、使能与名称不变。幂等。
    pub fn reset_joints(&mut self) {
        let Some(config) = self.current_config.as_mut() else {
            return;
        };
        config.joints.iter_mut().for_each(Joint::reset_motion);
        self.position = Position::ORIGIN;
        debug!(config_id = %config.id, "joints reset");
    }

    fn joint_mut(&mut self, joint_id: JointId) -> Option<&mut Joint> {
        self.current_config.as_mut()?.joint_mut(joint_id)
    }

    // ==================== 位置与会话 ====================

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_connection_status(&mut self, connected: bool) {
        debug!(connected, "connection status");
        self.is_connected = connected;
    }

    pub fn set_connection_url(&mut self, url: impl Into<String>) {
        self.connection_url = url.into();
    }

    pub fn set_robot_ip(&mut self, ip: impl Into<String>) {
        self.robot_ip = ip.into();
    }

    pub fn set_robot_port(&mut self, port: u16) {
        self.robot_port = port;
    }

    pub fn set_program_running(&mut self, running: bool) {
        debug!(running, "program running");
        self.is_program_running = running;
    }

    pub fn set_current_program_name(&mut self, name: impl Into<String>) {
        self.current_program_name = name.into();
    }
}

impl Default for RobotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreBuilder;

    fn store() -> RobotStore {
        RobotStore::new()
    }

    #[test]
    fn test_defaults() {
        let store = store();
        let config = store.current_config().unwrap();
        assert_eq!(config.id, "default-6dof");
        assert_eq!(store.available_configs().len(), 1);
        assert!(!store.is_connected());
        assert_eq!(store.connection_url(), "ws://localhost:8080");
        assert_eq!(store.robot_ip(), "192.168.1.100");
        assert_eq!(store.robot_port(), 30002);
        assert!(!store.is_program_running());
        assert_eq!(store.current_program_name(), "");
        assert_eq!(store.position(), Position::ORIGIN);
    }

    #[test]
    fn test_set_joint_angle_sets_target() {
        let mut store = store();
        store.set_joint_angle(2, Deg(45.0));
        let joint = store.joint(2).unwrap();
        assert_eq!(joint.angle, Deg(45.0));
        assert_eq!(joint.target_angle, Deg(45.0));
    }

    #[test]
    fn test_set_joint_angle_keeps_limits() {
        let mut store = store();
        store.set_joint_angle(2, Deg(120.0));
        assert_eq!(store.joint(2).unwrap().angle, Deg(90.0));
        store.set_joint_angle(2, Deg(f64::NAN));
        assert_eq!(store.joint(2).unwrap().angle, Deg(90.0));
    }

    #[test]
    fn test_unknown_joint_is_noop() {
        let mut store = store();
        let before = store.snapshot();
        store.set_joint_angle(42, Deg(10.0));
        store.update_joint(0, &JointPatch::new().enabled(false));
        assert_eq!(store, before);
    }

    #[test]
    fn test_no_config_is_noop() {
        let mut store = StoreBuilder::new().without_config().build();
        let before = store.snapshot();
        store.set_joint_angle(1, Deg(10.0));
        store.update_joint(1, &JointPatch::new().torque(50.0));
        store.reset_joints();
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_joint_merges() {
        let mut store = store();
        store.set_joint_angle(4, Deg(30.0));
        store.update_joint(4, &JointPatch::new().enabled(false).torque(55.0));
        let joint = store.joint(4).unwrap();
        assert!(!joint.enabled);
        assert_eq!(joint.torque, 55.0);
        assert_eq!(joint.angle, Deg(30.0));
        assert_eq!(joint.name, "Wrist 1");
    }

    #[test]
    fn test_reset_joints() {
        let mut store = store();
        store.set_joint_angle(1, Deg(100.0));
        store.update_joint(3, &JointPatch::new().velocity(20.0).torque(70.0).enabled(false));
        store.set_position(Position::new(0.4, 0.1, 0.8));

        store.reset_joints();
        let config = store.current_config().unwrap();
        for joint in &config.joints {
            assert_eq!(joint.angle, Deg::ZERO);
            assert_eq!(joint.target_angle, Deg::ZERO);
            assert_eq!(joint.velocity, 0.0);
            assert_eq!(joint.torque, 0.0);
        }
        assert!(!store.joint(3).unwrap().enabled);
        assert_eq!(store.joint(3).unwrap().max_limit, Deg(135.0));
        assert_eq!(store.position(), Position::ORIGIN);
    }

    #[test]
    fn test_reset_joints_idempotent() {
        let mut store = store();
        store.set_joint_angle(5, Deg(-60.0));
        store.set_position(Position::new(1.0, 2.0, 3.0));
        store.reset_joints();
        let once = store.snapshot();
        store.reset_joints();
        assert_eq!(store, once);
    }

    #[test]
    fn test_add_then_select_roundtrip() {
        let mut store = store();
        let mut config = RobotConfig::default_6dof();
        config.id = "ur5".to_string();
        config.name = "UR5".to_string();
        config.joints.truncate(4);
        config.dof = 4;

        store.add_config(config.clone());
        store.set_current_config(config.clone());

        let current = store.current_config().unwrap();
        assert_eq!(current.id, "ur5");
        assert_eq!(current.dof, 4);
        assert_eq!(current.joint_ids(), config.joint_ids());
        assert_eq!(store.available_configs().len(), 2);
    }

    #[test]
    fn test_add_config_duplicate_id_replaces() {
        let mut store = store();
        let mut config = RobotConfig::default_6dof();
        config.name = "Renamed".to_string();
        store.add_config(config);

        assert_eq!(store.available_configs().len(), 1);
        assert_eq!(store.find_config("default-6dof").unwrap().name, "Renamed");
        // 当前配置不受影响
        assert_eq!(store.current_config().unwrap().name, "Generic 6-DOF Robot");
    }

    #[test]
    fn test_independent_flags() {
        let mut store = store();
        store.set_program_running(true);
        store.set_current_program_name("pick_and_place");
        assert!(store.is_program_running());
        assert!(!store.is_connected());

        store.set_connection_status(true);
        store.set_connection_url("ws://robot:9090");
        store.set_robot_ip("10.0.0.5");
        store.set_robot_port(30003);
        assert_eq!(store.connection_url(), "ws://robot:9090");
        assert_eq!(store.robot_ip(), "10.0.0.5");
        assert_eq!(store.robot_port(), 30003);
        assert_eq!(store.current_program_name(), "pick_and_place");
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = store();
        let b = store();
        a.set_joint_angle(1, Deg(10.0));
        assert_eq!(b.joint(1).unwrap().angle, Deg::ZERO);
    }
}
