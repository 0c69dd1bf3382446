//! 控制台端到端测试（模拟传输层）

use armdeck_client::{MockReply, MockTransport};
use armdeck_sdk::control::CommandStatus;
use armdeck_sdk::prelude::*;
use armdeck_sdk::Endpoint;
use tempfile::TempDir;

const BASE_URL: &str = "http://controller.test/api";

fn console(mode: ControlMode, replies: Vec<MockReply>) -> RobotConsole<MockTransport> {
    let client = CommandClient::with_transport(BASE_URL, MockTransport::with_replies(replies));
    RobotConsole::new(RobotStore::new(), client, mode)
}

/// 连续 50 次 J1 正向点动：0.5 rad ≈ 28.65°，不超过上限
#[tokio::test]
async fn jog_base_joint_fifty_times() {
    for mode in [ControlMode::Demo, ControlMode::Live] {
        let mut console = console(mode, vec![]);
        for _ in 0..50 {
            let outcome = console.jog_joint(1, Direction::Positive).await.unwrap();
            assert!(outcome.is_applied());
        }

        let joint = console.store().joint(1).unwrap();
        assert!((joint.angle.0 - 28.65).abs() < 0.01, "angle = {}", joint.angle);
        assert!(joint.angle.0 <= joint.max_limit.0);
        assert_eq!(joint.angle, joint.target_angle);
    }
}

#[tokio::test]
async fn live_jog_sends_radian_step() {
    let mut console = console(ControlMode::Live, vec![]);
    console.jog_joint(6, Direction::Negative).await.unwrap();

    let request = console.client().transport().last_request().unwrap();
    assert_eq!(request.url, format!("{}/joint/move", BASE_URL));
    assert_eq!(
        request.body,
        Some(serde_json::json!({"joint": 6, "value": 0.06, "direction": "-"}))
    );
    // 0.06 rad ≈ -3.44°
    let angle = console.store().joint(6).unwrap().angle.0;
    assert!((angle + 3.4377).abs() < 1e-3);
}

#[tokio::test]
async fn failed_calls_never_touch_the_store() {
    let mut console = console(ControlMode::Live, vec![MockReply::status(503); 4]);
    let before = console.store().snapshot();

    let err = console.jog_joint(1, Direction::Positive).await.unwrap_err();
    assert!(matches!(
        err,
        ControlError::Client(ClientError::Status {
            endpoint: Endpoint::MoveJoint,
            status: 503
        })
    ));
    assert!(console.toggle_connection().await.is_err());
    assert!(console.start_program("pick").await.is_err());
    assert!(console.emergency_stop().await.is_err());

    assert_eq!(console.store().snapshot(), before);
    assert!(
        console
            .log()
            .entries()
            .all(|entry| entry.status == CommandStatus::Error)
    );
}

#[tokio::test]
async fn every_client_operation_rejects_non_2xx() {
    let client = CommandClient::with_transport(
        BASE_URL,
        MockTransport::with_replies(vec![MockReply::status(404); 7]),
    );

    let results = [
        client.connect("192.168.1.100", 30002).await,
        client
            .translate_tcp(TranslationAxis::Z, 0.01, Direction::Positive)
            .await,
        client
            .rotate_tcp(RotationAxis::Ry, 0.1, Direction::Negative)
            .await,
        client.move_joint(2, 0.02, Direction::Positive).await,
        client.start_program("main").await,
        client.stop_program().await,
        client.emergency_stop().await,
    ];

    for (result, endpoint) in results.into_iter().zip(Endpoint::ALL) {
        let err = result.unwrap_err();
        assert_eq!(err.endpoint(), Some(endpoint));
        assert_eq!(err.status(), Some(404));
    }
}

#[tokio::test]
async fn emergency_stop_reports_controller_refusal() {
    let client = CommandClient::with_transport(
        BASE_URL,
        MockTransport::with_replies(vec![MockReply::success(false)]),
    );
    assert_eq!(client.emergency_stop().await, Ok(false));
}

#[tokio::test]
async fn console_from_saved_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("console.toml");

    let mut config = ConsoleConfig::default_config();
    config.mode = ControlMode::Live;
    config.robot.ip = "10.20.30.40".to_string();
    config.robot.port = 30010;
    config.jog.joint_steps_rad = vec![0.1];
    config.save_to_file(&path).unwrap();

    let config = ConsoleConfig::load_from_file(&path).unwrap();
    let client = CommandClient::with_transport(BASE_URL, MockTransport::new());
    let mut console = RobotConsole::with_config(&config, client).unwrap();

    console.toggle_connection().await.unwrap();
    assert!(console.store().is_connected());
    let request = console.client().transport().last_request().unwrap();
    assert_eq!(
        request.body,
        Some(serde_json::json!({"host": "10.20.30.40", "port": 30010}))
    );

    console.jog_joint(1, Direction::Positive).await.unwrap();
    let request = console.client().transport().last_request().unwrap();
    assert_eq!(request.body.unwrap()["value"], serde_json::json!(0.1));
    // 表外关节使用默认步长
    console.jog_joint(2, Direction::Positive).await.unwrap();
    let request = console.client().transport().last_request().unwrap();
    assert_eq!(request.body.unwrap()["value"], serde_json::json!(0.01));
}
