use std::io;

use gridwalk_cli::{run_single, SimConfig};
use gridwalk_nav::{Cell, NavError, StepBudget};
use gridwalk_tools::AsciiRenderer;

#[derive(Debug)]
struct ClosedPipe;

impl io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn single_run_records_every_frame() {
    let config = SimConfig::default();
    let grid = config.build_grid().unwrap();

    let outcome = run_single(
        &grid,
        config.start_cell(),
        StepBudget::Limited(500),
        42,
        None::<AsciiRenderer<Vec<u8>>>,
    )
    .unwrap();

    assert_eq!(outcome.result, Ok(8));
    assert_eq!(outcome.frames.len(), 8);
    assert_eq!(outcome.frames.path().last().copied(), Some(Cell::new(4, 4)));
    assert!(outcome.render_error.is_none());
}

#[test]
fn broken_terminal_keeps_run_failure_and_frames() {
    let config = SimConfig::default();
    let grid = config.build_grid().unwrap();

    let outcome = run_single(
        &grid,
        config.start_cell(),
        StepBudget::Limited(3),
        42,
        Some(AsciiRenderer::new(ClosedPipe)),
    )
    .unwrap();

    assert_eq!(
        outcome.result,
        Err(NavError::NoProgress {
            max_steps: 3,
            position: Cell::new(2, 1)
        })
    );
    assert_eq!(outcome.frames.len(), 3);
    let err = outcome.render_error.expect("write failure kept");
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn invalid_start_fails_before_running() {
    let config = SimConfig::default();
    let grid = config.build_grid().unwrap();

    let err = run_single(
        &grid,
        Cell::new(2, 2),
        StepBudget::Unlimited,
        0,
        None::<AsciiRenderer<Vec<u8>>>,
    )
    .unwrap_err();
    assert!(matches!(err, NavError::InvalidConfiguration(_)));
}
