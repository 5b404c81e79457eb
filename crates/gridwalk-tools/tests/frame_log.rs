use gridwalk_core::SplitMix64;
use gridwalk_nav::{Cell, Grid, NavMode, Navigator, StepBudget};
use gridwalk_tools::FrameLog;

fn scenario() -> Grid {
    Grid::new(5, 5, [Cell::new(2, 2), Cell::new(3, 2)], Cell::new(4, 4)).expect("valid grid")
}

#[test]
fn frame_log_records_one_frame_per_step() {
    let grid = scenario();
    let mut nav = Navigator::at_origin(&grid, SplitMix64::new(11)).unwrap();
    let mut log = FrameLog::new();

    let steps = nav.run_until_goal(StepBudget::Limited(500), &mut log).unwrap();

    assert_eq!(log.len(), steps);
    assert_eq!(log.start, Some(Cell::new(0, 0)));
    assert_eq!(log.goal, Some(Cell::new(4, 4)));
    assert_eq!(log.path(), nav.path());
    for (i, frame) in log.frames.iter().enumerate() {
        assert_eq!(frame.step, i + 1);
    }
    // The visited set never shrinks.
    assert!(log.frames.windows(2).all(|w| w[0].visited <= w[1].visited));
}

#[test]
fn frame_log_counts_backtracking_steps() {
    // Dead-end corridor along y = 0; the goal sits below the start.
    let grid = Grid::new(3, 2, [Cell::new(1, 1), Cell::new(2, 1)], Cell::new(0, 1)).unwrap();
    let mut nav = Navigator::at_origin(&grid, SplitMix64::new(0)).unwrap();
    let mut log = FrameLog::new();
    let steps = nav.run_until_goal(StepBudget::Limited(100), &mut log).unwrap();

    // Once the corridor is fully visited the walker bounces inside it before leaving.
    assert_eq!(steps, 9);
    assert_eq!(
        log.path(),
        vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(1, 0),
            Cell::new(0, 0),
            Cell::new(0, 1),
        ]
    );
    let modes: Vec<NavMode> = log.frames.iter().map(|f| f.mode).collect();
    assert_eq!(modes.first(), Some(&NavMode::Exploring));
    assert_eq!(modes.last(), Some(&NavMode::Exploring));
    assert_eq!(log.backtracking_steps(), 6);
}

#[test]
fn empty_log_has_empty_path() {
    let log = FrameLog::new();
    assert!(log.is_empty());
    assert!(log.path().is_empty());
}
