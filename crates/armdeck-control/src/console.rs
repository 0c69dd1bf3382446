//! 控制台
//!
//! 每个用户动作对应一个协调函数：校验输入、换算单位、调用控制服务、
//! 同步状态存储，并写入命令日志。
//!
//! # 状态同步
//!
//! - `Demo` 模式：只修改本地状态，返回 [`Outcome::Simulated`]
//! - `Live` 模式：等待远端结果后再修改本地状态
//!   - `Ok(true)` → 修改，返回 [`Outcome::Applied`]
//!   - `Ok(false)` → 不修改，返回 [`Outcome::Rejected`]
//!   - `Err(_)` → 不修改，返回错误

use crate::config::{ConsoleConfig, ControlMode, JogSteps};
use crate::error::ControlError;
use crate::log::{CommandLog, CommandStatus};
use armdeck_client::{CommandClient, Transport};
use armdeck_store::RobotStore;
use armdeck_types::{
    Deg, Direction, Joint, JointId, JointPatch, ModelError, Position, RotationAxis, TcpJog,
    parse_number, parse_urdf,
};
use tracing::{info, warn};

#[cfg(feature = "http")]
use armdeck_client::HttpTransport;

/// 命令面板的快捷命令
pub const QUICK_COMMANDS: [&str; 4] = ["HOME", "RESET", "GET_STATUS", "EMERGENCY_STOP"];

/// 原始命令的固定响应（控制服务没有原始命令接口）
pub const QUEUED_COMMAND_RESPONSE: &str = "Command queued (demo mode)";

/// 动作结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 已执行（远端接受，或纯本地动作）
    Applied,
    /// 演示模式下只修改了本地状态
    Simulated,
    /// 远端返回 `success: false`，本地状态未修改
    Rejected,
}

impl Outcome {
    fn from_remote(accepted: bool) -> Self {
        if accepted {
            Outcome::Applied
        } else {
            Outcome::Rejected
        }
    }

    /// 本地状态是否应当随之修改
    pub fn is_applied(self) -> bool {
        !self.is_rejected()
    }

    pub fn is_rejected(self) -> bool {
        self == Outcome::Rejected
    }
}

/// 机械臂控制台
pub struct RobotConsole<T: Transport> {
    store: RobotStore,
    client: CommandClient<T>,
    mode: ControlMode,
    steps: JogSteps,
    log: CommandLog,
}

#[cfg(feature = "http")]
impl RobotConsole<HttpTransport> {
    /// 按配置创建使用 HTTP 传输层的控制台
    ///
    /// 配置先经过 [`ConsoleConfig::issues`] 校验。
    pub fn from_config(config: &ConsoleConfig) -> Result<Self, ControlError> {
        let client = CommandClient::new(config.client_config())?;
        Self::with_config(config, client)
    }
}

impl<T: Transport> RobotConsole<T> {
    pub fn new(store: RobotStore, client: CommandClient<T>, mode: ControlMode) -> Self {
        Self {
            store,
            client,
            mode,
            steps: JogSteps::default(),
            log: CommandLog::default(),
        }
    }

    /// 按配置创建（使用指定客户端）
    ///
    /// 限位颠倒、步长无效等问题返回 [`ControlError::InvalidConfig`]。
    pub fn with_config(
        config: &ConsoleConfig,
        client: CommandClient<T>,
    ) -> Result<Self, ControlError> {
        check_config(config)?;
        Ok(Self::new(config.build_store(), client, config.mode)
            .with_steps(config.jog.steps())
            .with_log_capacity(config.jog.log_capacity))
    }

    pub fn with_steps(mut self, steps: JogSteps) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log = CommandLog::new(capacity);
        self
    }

    // ==================== 访问 ====================

    pub fn store(&self) -> &RobotStore {
        &self.store
    }

    pub fn client(&self) -> &CommandClient<T> {
        &self.client
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        info!(%mode, "control mode changed");
        self.mode = mode;
    }

    pub fn steps(&self) -> &JogSteps {
        &self.steps
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// 设置 `connect` 使用的机器人地址
    pub fn set_robot_address(&mut self, ip: impl Into<String>, port: u16) {
        self.store.set_robot_ip(ip);
        self.store.set_robot_port(port);
    }

    // ==================== 关节 ====================

    /// 关节点动
    ///
    /// 步长按关节 ID 查表（弧度），换算为角度后叠加并限幅；
    /// 远端请求中发送弧度步长。
    pub async fn jog_joint(
        &mut self,
        joint_id: JointId,
        direction: Direction,
    ) -> Result<Outcome, ControlError> {
        let step = self.steps.joint_step(joint_id);
        let command = format!("JOINT_MOVE J{} {} {:.4} rad", joint_id, direction, step.0);

        let result: Result<Outcome, ControlError> = async {
            let target = {
                let joint = self.enabled_joint(joint_id)?;
                joint.clamp_angle(joint.angle + Deg::from(step) * direction.sign())
            };

            let outcome = match self.mode {
                ControlMode::Demo => Outcome::Simulated,
                ControlMode::Live => Outcome::from_remote(
                    self.client.move_joint(joint_id, step.0, direction).await?,
                ),
            };
            if outcome.is_applied() {
                self.store.set_joint_angle(joint_id, target);
            }
            Ok(outcome)
        }
        .await;

        self.record(command, result.as_ref().copied());
        result
    }

    /// 滑块设置关节角度（本地，限幅）
    ///
    /// 返回实际写入的角度。
    pub fn set_joint_angle(&mut self, joint_id: JointId, angle: Deg) -> Result<Deg, ControlError> {
        let command = format!("SET_JOINT J{} {}", joint_id, angle);
        let result = self.apply_joint_angle(joint_id, angle);
        self.record(command, result.as_ref().map(|_| Outcome::Applied));
        result
    }

    /// 手动输入关节角度（文本）
    pub fn enter_joint_angle(&mut self, joint_id: JointId, text: &str) -> Result<Deg, ControlError> {
        let command = format!("SET_JOINT J{} {:?}", joint_id, text.trim());
        let result = match parse_number(text) {
            Some(value) => self.apply_joint_angle(joint_id, Deg(value)),
            None => Err(ModelError::InvalidNumber(text.trim().to_string()).into()),
        };
        self.record(command, result.as_ref().map(|_| Outcome::Applied));
        result
    }

    fn apply_joint_angle(&mut self, joint_id: JointId, angle: Deg) -> Result<Deg, ControlError> {
        if !angle.is_finite() {
            return Err(ModelError::InvalidNumber(angle.0.to_string()).into());
        }
        let clamped = self.enabled_joint(joint_id)?.clamp_angle(angle);
        self.store.set_joint_angle(joint_id, clamped);
        Ok(clamped)
    }

    /// 使能/禁用关节（本地）
    pub fn set_joint_enabled(
        &mut self,
        joint_id: JointId,
        enabled: bool,
    ) -> Result<(), ControlError> {
        let command = format!("{} J{}", if enabled { "ENABLE" } else { "DISABLE" }, joint_id);
        let result = self.joint(joint_id).map(|_| ());
        if result.is_ok() {
            self.store
                .update_joint(joint_id, &JointPatch::new().enabled(enabled));
        }
        self.record(command, result.as_ref().map(|_| Outcome::Applied));
        result
    }

    /// 所有关节归零（本地，幂等）
    pub fn reset_joints(&mut self) -> Result<(), ControlError> {
        let result = if self.store.current_config().is_some() {
            self.store.reset_joints();
            Ok(())
        } else {
            Err(ControlError::NoConfig)
        };
        self.record("RESET_JOINTS".to_string(), result.as_ref().map(|_| Outcome::Applied));
        result
    }

    fn joint(&self, joint_id: JointId) -> Result<&Joint, ControlError> {
        let config = self.store.current_config().ok_or(ControlError::NoConfig)?;
        config
            .joint(joint_id)
            .ok_or(ControlError::UnknownJoint(joint_id))
    }

    fn enabled_joint(&self, joint_id: JointId) -> Result<&Joint, ControlError> {
        let joint = self.joint(joint_id)?;
        if !joint.enabled {
            return Err(ControlError::JointDisabled(joint_id));
        }
        Ok(joint)
    }

    // ==================== TCP ====================

    /// TCP 平移点动
    ///
    /// 没有位置反馈通道，末端位置不随之改变。
    pub async fn jog_tcp(&mut self, jog: TcpJog, step_m: f64) -> Result<Outcome, ControlError> {
        let (axis, direction) = jog.axis_direction();
        let command = format!("TCP_TRANSLATE {} {}{} {:.4} m", jog, axis, direction, step_m);

        let result: Result<Outcome, ControlError> = async {
            check_step(step_m)?;
            match self.mode {
                ControlMode::Demo => Ok(Outcome::Simulated),
                ControlMode::Live => Ok(Outcome::from_remote(
                    self.client.translate_tcp(axis, step_m, direction).await?,
                )),
            }
        }
        .await;

        self.record(command, result.as_ref().copied());
        result
    }

    /// TCP 旋转点动
    pub async fn rotate_tcp(
        &mut self,
        axis: RotationAxis,
        value: f64,
        direction: Direction,
    ) -> Result<Outcome, ControlError> {
        let command = format!("TCP_ROTATE {}{} {:.4}", axis, direction, value);

        let result: Result<Outcome, ControlError> = async {
            check_step(value)?;
            match self.mode {
                ControlMode::Demo => Ok(Outcome::Simulated),
                ControlMode::Live => Ok(Outcome::from_remote(
                    self.client.rotate_tcp(axis, value, direction).await?,
                )),
            }
        }
        .await;

        self.record(command, result.as_ref().copied());
        result
    }

    /// 移动到目标位置
    ///
    /// 控制服务没有对应接口：演示模式直接写入位置，实机模式返回
    /// [`ControlError::Unsupported`]。
    pub fn go_to_position(&mut self, target: Position) -> Result<Outcome, ControlError> {
        let command = format!("GOTO {:.2} {:.2} {:.2}", target.x, target.y, target.z);

        let result = if !target.is_finite() {
            Err(ControlError::InvalidPosition)
        } else {
            match self.mode {
                ControlMode::Demo => {
                    self.store.set_position(target);
                    Ok(Outcome::Simulated)
                },
                ControlMode::Live => Err(ControlError::Unsupported("Go to position")),
            }
        };

        self.record(command, result.as_ref().copied());
        result
    }

    // ==================== 会话 ====================

    /// 切换连接状态
    ///
    /// 已连接时只在本地断开；未连接时实机模式请求控制服务连接
    /// `robot_ip:robot_port`，仅在 `success == true` 时标记为已连接。
    pub async fn toggle_connection(&mut self) -> Result<Outcome, ControlError> {
        if self.store.is_connected() {
            self.store.set_connection_status(false);
            let result = Ok(Outcome::Applied);
            self.record("DISCONNECT".to_string(), result.as_ref().copied());
            return result;
        }

        let host = self.store.robot_ip().to_string();
        let port = self.store.robot_port();
        let command = format!("CONNECT {}:{}", host, port);

        let result = match self.mode {
            ControlMode::Demo => Ok(Outcome::Simulated),
            ControlMode::Live => self
                .client
                .connect(&host, port)
                .await
                .map(Outcome::from_remote)
                .map_err(ControlError::from),
        };
        if matches!(result, Ok(outcome) if outcome.is_applied()) {
            self.store.set_connection_status(true);
        }

        self.record(command, result.as_ref().copied());
        result
    }

    /// 启动程序（名称去除首尾空白后不能为空）
    pub async fn start_program(&mut self, name: &str) -> Result<Outcome, ControlError> {
        let name = name.trim();
        let command = format!("PROGRAM_START {:?}", name);

        let result: Result<Outcome, ControlError> = async {
            if name.is_empty() {
                return Err(ControlError::EmptyProgramName);
            }
            let outcome = match self.mode {
                ControlMode::Demo => Outcome::Simulated,
                ControlMode::Live => Outcome::from_remote(self.client.start_program(name).await?),
            };
            if outcome.is_applied() {
                self.store.set_current_program_name(name);
                self.store.set_program_running(true);
            }
            Ok(outcome)
        }
        .await;

        self.record(command, result.as_ref().copied());
        result
    }

    /// 停止程序
    pub async fn stop_program(&mut self) -> Result<Outcome, ControlError> {
        let result: Result<Outcome, ControlError> = async {
            let outcome = match self.mode {
                ControlMode::Demo => Outcome::Simulated,
                ControlMode::Live => Outcome::from_remote(self.client.stop_program().await?),
            };
            if outcome.is_applied() {
                self.store.set_program_running(false);
            }
            Ok(outcome)
        }
        .await;

        self.record("PROGRAM_STOP".to_string(), result.as_ref().copied());
        result
    }

    /// 急停
    ///
    /// 不修改程序运行状态；远端返回 `success: false` 时结果为
    /// [`Outcome::Rejected`]。
    pub async fn emergency_stop(&mut self) -> Result<Outcome, ControlError> {
        warn!(mode = %self.mode, "emergency stop requested");
        let result = match self.mode {
            ControlMode::Demo => Ok(Outcome::Simulated),
            ControlMode::Live => self
                .client
                .emergency_stop()
                .await
                .map(Outcome::from_remote)
                .map_err(ControlError::from),
        };

        self.record("EMERGENCY_STOP".to_string(), result.as_ref().copied());
        result
    }

    // ==================== 配置 ====================

    /// 导入 URDF 描述文件并设为当前配置，返回新配置 ID
    pub fn import_descriptor(
        &mut self,
        file_name: &str,
        content: &str,
    ) -> Result<String, ControlError> {
        let command = format!("IMPORT {}", file_name);
        let result = parse_urdf(file_name, content)
            .map_err(ControlError::from)
            .map(|config| {
                let id = config.id.clone();
                info!(config_id = %id, joints = config.joints.len(), "imported robot descriptor");
                self.store.add_config(config.clone());
                self.store.set_current_config(config);
                id
            });
        self.record(command, result.as_ref().map(|_| Outcome::Applied));
        result
    }

    /// 从可选列表中选择当前配置
    pub fn select_config(&mut self, id: &str) -> Result<(), ControlError> {
        let command = format!("SELECT {}", id);
        let result = match self.store.find_config(id).cloned() {
            Some(config) => {
                self.store.set_current_config(config);
                Ok(())
            },
            None => Err(ControlError::UnknownConfig(id.to_string())),
        };
        self.record(command, result.as_ref().map(|_| Outcome::Applied));
        result
    }

    // ==================== 命令面板 ====================

    /// 提交原始命令文本
    ///
    /// 只记录到日志（状态 `Sent`），不发送到控制服务。空命令被拒绝且不记录。
    pub fn submit_command(&mut self, text: &str) -> Result<u64, ControlError> {
        let command = text.trim();
        if command.is_empty() {
            return Err(ControlError::EmptyCommand);
        }
        if !self.store.is_connected() {
            warn!("not connected to robot, command is only queued locally");
        }
        Ok(self.log.push(
            command,
            CommandStatus::Sent,
            Some(QUEUED_COMMAND_RESPONSE.to_string()),
        ))
    }

    fn record(&mut self, command: String, result: Result<Outcome, &ControlError>) {
        let (status, response) = match result {
            Ok(Outcome::Applied) => {
                info!(%command, "ok");
                (CommandStatus::Success, "ok".to_string())
            },
            Ok(Outcome::Simulated) => {
                info!(%command, "simulated");
                (CommandStatus::Success, "simulated (demo mode)".to_string())
            },
            Ok(Outcome::Rejected) => {
                warn!(%command, "rejected by controller");
                (CommandStatus::Error, "rejected by controller".to_string())
            },
            Err(e) => {
                warn!(%command, error = %e, "command failed");
                (CommandStatus::Error, e.to_string())
            },
        };
        self.log.push(command, status, Some(response));
    }
}

fn check_config(config: &ConsoleConfig) -> Result<(), ControlError> {
    match config.issues().into_iter().next() {
        Some(issue) => Err(ControlError::InvalidConfig(issue)),
        None => Ok(()),
    }
}

fn check_step(step: f64) -> Result<(), ControlError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(ControlError::InvalidStep(step))
    }
}
