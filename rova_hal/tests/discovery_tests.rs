//! Discovery validation tests - determinism and the board/backend
//! type-consistency invariant.

use rova_common::config::MockConfig;
use rova_common::error::{BackendError, HalError};
use rova_common::types::{BoardIdentity, BoardKind};
use rova_hal::backend::Backend;
use rova_hal::backends::MockDemoBackend;
use rova_hal::boards::{Board, BoardType, DemoBoard};
use rova_hal::components::LedInterface;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A backend that reports identities of a kind other than its own.
struct LyingBackend;

impl LedInterface for LyingBackend {
    fn set_led_state(
        &self,
        _board: &BoardIdentity,
        _identifier: u8,
        _state: bool,
    ) -> Result<(), BackendError> {
        Ok(())
    }

    fn get_led_state(&self, _board: &BoardIdentity, _identifier: u8) -> Result<bool, BackendError> {
        Ok(false)
    }
}

impl Backend for LyingBackend {
    fn board_kind(&self) -> BoardKind {
        DemoBoard::KIND
    }

    fn environment(&self) -> &str {
        "test"
    }

    fn discover(&self) -> Result<Vec<BoardIdentity>, BackendError> {
        Ok(vec![BoardIdentity::new(BoardKind("motor_board"), "0001")])
    }

    fn led(self: Arc<Self>) -> Option<Arc<dyn LedInterface>> {
        Some(self)
    }
}

/// A backend whose enumeration itself fails.
struct FailingBackend;

impl Backend for FailingBackend {
    fn board_kind(&self) -> BoardKind {
        DemoBoard::KIND
    }

    fn environment(&self) -> &str {
        "test"
    }

    fn discover(&self) -> Result<Vec<BoardIdentity>, BackendError> {
        Err(BackendError::Communication("bus scan failed".to_string()))
    }
}

#[test]
fn discovery_count_matches_backend_report() {
    for count in [1usize, 3, 8] {
        let backend: Arc<dyn Backend> = Arc::new(MockDemoBackend::new(MockConfig {
            boards: count,
            default_led_state: true,
        }));
        let boards = DemoBoard::discover(backend).unwrap();
        assert_eq!(boards.len(), count);
    }
}

#[test]
fn discovery_is_deterministic_across_calls() {
    let backend: Arc<dyn Backend> = Arc::new(MockDemoBackend::default());

    let first: BTreeSet<String> = DemoBoard::discover(Arc::clone(&backend))
        .unwrap()
        .iter()
        .map(|b| b.serial().to_string())
        .collect();
    let second: BTreeSet<String> = DemoBoard::discover(Arc::clone(&backend))
        .unwrap()
        .iter()
        .map(|b| b.serial().to_string())
        .collect();

    assert_eq!(first, second);

    for board in DemoBoard::discover(backend).unwrap() {
        assert_eq!(board.leds().len(), DemoBoard::LED_COUNT);
    }
}

#[test]
fn foreign_identity_is_rejected() {
    let backend: Arc<dyn Backend> = Arc::new(LyingBackend);
    let result = DemoBoard::discover(backend);
    assert!(matches!(
        result,
        Err(HalError::BoardKindMismatch { expected, actual, .. })
            if expected == DemoBoard::KIND && actual == BoardKind("motor_board")
    ));
}

#[test]
fn wrong_backend_kind_is_rejected() {
    // The mock drives demo boards; asking it to discover through a
    // board type of a different kind must fail before enumeration.
    struct OtherBoard;

    impl Board for OtherBoard {
        fn kind(&self) -> BoardKind {
            <Self as BoardType>::KIND
        }

        fn name(&self) -> &str {
            Self::NAME
        }

        fn serial(&self) -> &str {
            ""
        }

        fn firmware_version(&self) -> Result<Option<String>, HalError> {
            Ok(None)
        }

        fn component_kinds(&self) -> &'static [rova_common::types::ComponentKind] {
            &[]
        }

        fn make_safe(&self) -> Result<(), HalError> {
            Ok(())
        }
    }

    impl BoardType for OtherBoard {
        const KIND: BoardKind = BoardKind("other_board");
        const NAME: &'static str = "Other Board";

        fn attach(
            _identity: BoardIdentity,
            _backend: Arc<dyn Backend>,
        ) -> Result<Self, HalError> {
            Ok(Self)
        }
    }

    let backend: Arc<dyn Backend> = Arc::new(MockDemoBackend::default());
    let result = OtherBoard::discover(backend);
    assert!(matches!(
        result,
        Err(HalError::WrongBackend { expected, actual })
            if expected == BoardKind("other_board") && actual == DemoBoard::KIND
    ));
}

#[test]
fn enumeration_failure_passes_through() {
    let backend: Arc<dyn Backend> = Arc::new(FailingBackend);
    let result = DemoBoard::discover(backend);
    assert!(matches!(
        result,
        Err(HalError::Backend(BackendError::Communication(_)))
    ));
}

#[test]
fn direct_construction_against_wrong_backend_rejected() {
    let backend: Arc<dyn Backend> = Arc::new(LyingBackend);
    // The identity kind is wrong even though the backend kind matches.
    let result = DemoBoard::attach(
        BoardIdentity::new(BoardKind("motor_board"), "0001"),
        backend,
    );
    assert!(matches!(result, Err(HalError::BoardKindMismatch { .. })));
}
