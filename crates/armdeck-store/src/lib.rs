//! # armdeck Store
//!
//! 机器人状态存储：当前配置、可选配置、关节、末端位置、连接与程序状态。
//!
//! 所有修改都是同步且不会失败的；输入校验（数值解析、限幅）由调用方负责，
//! 存储只保证关节角度始终落在限位内。

mod builder;
mod store;

pub use builder::StoreBuilder;
pub use store::{
    DEFAULT_CONNECTION_URL, DEFAULT_ROBOT_IP, DEFAULT_ROBOT_PORT, RobotStore, StoreSnapshot,
};
