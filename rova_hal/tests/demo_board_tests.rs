//! Demo board lifecycle tests against the shipped mock backend.
//!
//! Covers the full scenario: register a mock LED backend for the demo
//! board kind, construct a board with an explicit serial, operate its
//! LEDs, and enumerate boards through discovery.

use rova_common::config::MockConfig;
use rova_common::error::HalError;
use rova_common::types::ComponentKind;
use rova_hal::backends::{MockDemoBackend, mock_environment};
use rova_hal::boards::{Board, BoardGroup, BoardType, DemoBoard};
use rova_hal::components::Component;
use rova_hal::environment::Environment;
use std::sync::Arc;

fn mock_env() -> Environment {
    mock_environment(&MockConfig::default()).unwrap()
}

#[test]
fn demo_board_construction() {
    let env = mock_env();
    let board = DemoBoard::new("00000", &env).unwrap();

    assert_eq!(board.name(), "Demo Board");
    assert_eq!(board.serial(), "00000");
    assert_eq!(board.kind(), DemoBoard::KIND);
    assert_eq!(board.to_string(), "Demo Board - 00000");
}

#[test]
fn demo_board_exposes_three_leds() {
    let env = mock_env();
    let board = DemoBoard::new("00000", &env).unwrap();

    assert_eq!(board.leds().len(), 3);
    assert_eq!(board.component_kinds(), &[ComponentKind::Led]);
    for (n, led) in board.leds().iter().enumerate() {
        assert_eq!(led.kind(), ComponentKind::Led);
        assert_eq!(usize::from(led.identifier()), n);
    }
}

#[test]
fn demo_board_led_operation() {
    let env = mock_env();
    let board = DemoBoard::new("00000", &env).unwrap();

    for led in board.leds() {
        led.set_state(true).unwrap();
        assert!(led.state().unwrap());
    }
}

#[test]
fn led_roundtrip_preserves_value() {
    let env = mock_env();
    let board = DemoBoard::new("00000", &env).unwrap();
    let led = board.led(0).unwrap();

    led.set_state(false).unwrap();
    assert!(!led.state().unwrap());
    led.set_state(true).unwrap();
    assert!(led.state().unwrap());
}

#[test]
fn unwritten_led_reads_default() {
    let env = mock_env();
    let board = DemoBoard::new("00000", &env).unwrap();
    // The shipped mock defaults LED state to on.
    assert!(board.led(2).unwrap().state().unwrap());
}

#[test]
fn demo_board_detection() {
    let env = mock_env();
    let backend = env.backend_for(DemoBoard::KIND).unwrap();

    let boards = DemoBoard::discover(backend).unwrap();
    assert_eq!(boards.len(), 3);
    for board in &boards {
        assert_eq!(board.leds().len(), DemoBoard::LED_COUNT);
        assert_eq!(board.component_kinds(), &[ComponentKind::Led]);
    }
}

#[test]
fn firmware_version_reported() {
    let env = mock_env();
    let board = DemoBoard::new("00000", &env).unwrap();
    let version = board.firmware_version().unwrap();
    assert!(version.unwrap().starts_with("mock-"));
}

#[test]
fn make_safe_turns_leds_off() {
    let env = mock_env();
    let board = DemoBoard::new("00000", &env).unwrap();

    for led in board.leds() {
        led.set_state(true).unwrap();
    }
    board.make_safe().unwrap();
    for led in board.leds() {
        assert!(!led.state().unwrap());
    }
}

#[test]
fn board_group_from_environment() {
    let env = mock_env();
    let group: BoardGroup<DemoBoard> = BoardGroup::from_environment(&env).unwrap();

    assert_eq!(group.len(), 3);
    assert!(group.get("000001").is_some());
    assert!(group.get("999999").is_none());

    let serials: Vec<&str> = group.serials().collect();
    assert_eq!(serials, vec!["000000", "000001", "000002"]);

    // Three members: singular must refuse.
    assert!(matches!(
        group.singular(),
        Err(HalError::MultipleBoards { count: 3, .. })
    ));
}

#[test]
fn board_group_singular() {
    let env = mock_environment(&MockConfig {
        boards: 1,
        default_led_state: true,
    })
    .unwrap();
    let group: BoardGroup<DemoBoard> = BoardGroup::from_environment(&env).unwrap();

    let board = group.singular().unwrap();
    assert_eq!(board.serial(), "000000");
}

#[test]
fn board_group_make_safe() {
    let env = mock_env();
    let group: BoardGroup<DemoBoard> = BoardGroup::from_environment(&env).unwrap();

    group.make_safe().unwrap();
    for board in group.iter() {
        for led in board.leds() {
            assert!(!led.state().unwrap());
        }
    }
}

#[test]
fn boards_share_the_registered_backend() {
    let mut env = Environment::new("mock");
    env.register(Arc::new(MockDemoBackend::default())).unwrap();

    // State written through one handle is visible through another bound
    // to the same serial, because the environment hands out one backend.
    let first = DemoBoard::new("00000", &env).unwrap();
    let second = DemoBoard::new("00000", &env).unwrap();

    first.led(0).unwrap().set_state(false).unwrap();
    assert!(!second.led(0).unwrap().state().unwrap());
}
