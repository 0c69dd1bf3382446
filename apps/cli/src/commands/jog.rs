//! 点动命令
//!
//! 关节点动、TCP 平移与旋转

use crate::display::print_outcome;
use anyhow::Result;
use armdeck_sdk::prelude::*;
use clap::Args;

/// 关节点动参数
#[derive(Args, Debug)]
pub struct JogCommand {
    /// 关节 ID（1 起）
    #[arg(short, long)]
    pub joint: JointId,

    /// 方向（+ / -）
    #[arg(short, long, allow_hyphen_values = true)]
    pub dir: Direction,
}

impl JogCommand {
    pub async fn execute<T: Transport>(&self, console: &mut RobotConsole<T>) -> Result<()> {
        let step = console.steps().joint_step(self.joint);
        let outcome = console.jog_joint(self.joint, self.dir).await?;
        print_outcome(
            &format!("J{} {} {:.4} rad ({})", self.joint, self.dir, step.0, step.to_deg()),
            outcome,
        );
        if let Some(joint) = console.store().joint(self.joint) {
            println!("   J{} = {}", joint.id, joint.angle);
        }
        Ok(())
    }
}

/// TCP 平移参数
#[derive(Args, Debug)]
pub struct TranslateCommand {
    /// 方向（up / down / left / right / z-up / z-down）
    #[arg(short, long)]
    pub dir: TcpJog,

    /// 步长（米，默认读取配置）
    #[arg(short, long)]
    pub step: Option<f64>,
}

impl TranslateCommand {
    pub async fn execute<T: Transport>(&self, console: &mut RobotConsole<T>) -> Result<()> {
        let step = self.step.unwrap_or_else(|| console.steps().tcp_step_m());
        let outcome = console.jog_tcp(self.dir, step).await?;
        let (axis, direction) = self.dir.axis_direction();
        print_outcome(
            &format!("TCP {} ({}{} {} m)", self.dir, axis, direction, step),
            outcome,
        );
        Ok(())
    }
}

/// TCP 旋转参数
#[derive(Args, Debug)]
pub struct RotateCommand {
    /// 旋转轴（rx / ry / rz）
    #[arg(short, long)]
    pub axis: RotationAxis,

    /// 方向（+ / -）
    #[arg(short, long, allow_hyphen_values = true)]
    pub dir: Direction,

    /// 旋转量
    #[arg(short, long)]
    pub value: f64,
}

impl RotateCommand {
    pub async fn execute<T: Transport>(&self, console: &mut RobotConsole<T>) -> Result<()> {
        let outcome = console.rotate_tcp(self.axis, self.value, self.dir).await?;
        print_outcome(
            &format!("TCP {}{} {}", self.axis, self.dir, self.value),
            outcome,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: TestCommand,
    }

    #[derive(clap::Subcommand, Debug)]
    enum TestCommand {
        Jog(JogCommand),
        Translate(TranslateCommand),
        Rotate(RotateCommand),
    }

    #[test]
    fn test_parse_jog() {
        let cli = TestCli::try_parse_from(["t", "jog", "--joint", "2", "--dir", "-"]).unwrap();
        match cli.command {
            TestCommand::Jog(cmd) => {
                assert_eq!(cmd.joint, 2);
                assert_eq!(cmd.dir, Direction::Negative);
            },
            other => panic!("unexpected {:?}", other),
        }

        assert!(TestCli::try_parse_from(["t", "jog", "--joint", "2", "--dir", "up"]).is_err());
    }

    #[test]
    fn test_parse_translate_and_rotate() {
        let cli = TestCli::try_parse_from(["t", "translate", "--dir", "z-down"]).unwrap();
        match cli.command {
            TestCommand::Translate(cmd) => {
                assert_eq!(cmd.dir, TcpJog::ZDown);
                assert_eq!(cmd.step, None);
            },
            other => panic!("unexpected {:?}", other),
        }

        let cli = TestCli::try_parse_from([
            "t", "rotate", "--axis", "rz", "--dir", "+", "--value", "0.1",
        ])
        .unwrap();
        match cli.command {
            TestCommand::Rotate(cmd) => {
                assert_eq!(cmd.axis, RotationAxis::Rz);
                assert_eq!(cmd.dir, Direction::Positive);
                assert_eq!(cmd.value, 0.1);
            },
            other => panic!("unexpected {:?}", other),
        }
    }
}
