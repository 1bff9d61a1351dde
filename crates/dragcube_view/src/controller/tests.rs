use std::task::{Context, Waker};
use std::time::Duration;

use cgmath::Vector3;
use dragcube_core::patterns::{self, RUBICON_PATTERN};
use dragcube_core::{Cubelet, SOLVED_PATTERN, SolverError, seeded_shuffle};
use dragcube_notation::{Axis, NotationError, Sign};
use dragcube_prefs::MemoryStore;
use pretty_assertions::assert_eq;

use super::*;
use crate::test_util::*;
use crate::{LayerGrip, OrbitCamera};

const CORNER: Cubelet = Cubelet([Sign::Pos, Sign::Pos, Sign::Pos]);

fn pt(x: f32, y: f32) -> Point2<f32> {
    Point2::new(x, y)
}

fn front_hit() -> SurfaceHit {
    SurfaceHit {
        cubelet: CORNER,
        normal: Vector3::new(0.0, 0.0, 1.0),
    }
}

fn controller<'a>(
    animator: &'a RecordingAnimator<'a>,
    store: &'a MemoryStore,
) -> CubeController<&'a RecordingAnimator<'a>, &'a MemoryStore> {
    CubeController::new(animator, store, Preferences::default())
}

struct FixedSolver(Result<Vec<String>, SolverError>);
impl Solver for FixedSolver {
    fn solve(&self, _pattern: &str) -> Result<Vec<String>, SolverError> {
        self.0.clone()
    }
}

#[test]
fn test_drag_commits_twist() {
    let store = MemoryStore::new();
    let animator = RecordingAnimator::default();
    let c = controller(&animator, &store);
    let camera = OrbitCamera::default();

    assert_eq!(Ok(true), c.pointer_down(pt(100.0, 100.0), front_hit()));
    assert!(c.is_dragging());
    assert_eq!(Ok(None), c.pointer_move(pt(104.0, 101.0), &camera));
    let pending = c.pointer_move(pt(270.0, 90.0), &camera).unwrap().unwrap();
    let grip = LayerGrip {
        axis: Axis::Y,
        layer: Sign::Pos,
    };
    assert_eq!(grip, pending.grip);
    assert_eq!(
        Some(&AnimEvent::SetAngle(grip, pending.angle)),
        animator.events().last(),
    );

    let committed = pollster::block_on(c.pointer_up()).unwrap();
    assert_eq!(Outcome::Done(parse_moves("U'").unwrap()), committed);
    assert!(!c.is_dragging());
    assert_eq!(state_after("U'"), c.state());
    assert_eq!(Some(state_after("U'").as_string()), store.get(STATE_KEY));
    assert_eq!(
        Some(&AnimEvent::Rotate(grip, std::f32::consts::FRAC_PI_2)),
        animator.events().last(),
    );
}

#[test]
fn test_short_drag_emits_nothing() {
    let store = MemoryStore::new();
    let animator = RecordingAnimator::default();
    let c = controller(&animator, &store);

    c.pointer_down(pt(100.0, 100.0), front_hit()).unwrap();
    c.pointer_move(pt(150.0, 100.0), &OrbitCamera::default())
        .unwrap();
    let committed = pollster::block_on(c.pointer_up()).unwrap();
    assert_eq!(Outcome::Done(vec![]), committed);
    assert_eq!(SOLVED_PATTERN, c.state().as_string());
    assert_eq!(None, store.get(STATE_KEY));
}

#[test]
fn test_gesture_error_returns_to_idle() {
    let store = MemoryStore::new();
    let animator = RecordingAnimator::default();
    let c = controller(&animator, &store);

    let hit = SurfaceHit {
        cubelet: CORNER,
        normal: Vector3::new(0.7, 0.7, 0.0),
    };
    let result = c.pointer_down(pt(0.0, 0.0), hit);
    assert!(matches!(
        result,
        Err(SequencerError::Gesture(GestureError::UnsnappedNormal { .. })),
    ));
    assert!(!c.is_dragging());
    assert_eq!(vec![AnimEvent::Reset], animator.events());

    // The next drag works normally.
    assert_eq!(Ok(true), c.pointer_down(pt(0.0, 0.0), front_hit()));
}

#[test]
fn test_repress_resets_previous_layer() {
    let store = MemoryStore::new();
    let animator = RecordingAnimator::default();
    let c = controller(&animator, &store);

    c.pointer_down(pt(100.0, 100.0), front_hit()).unwrap();
    let pending = c
        .pointer_move(pt(200.0, 100.0), &OrbitCamera::default())
        .unwrap()
        .unwrap();
    assert!(pending.angle.abs() > 0.5);

    // Pressing again without releasing abandons the first drag.
    let top_hit = SurfaceHit {
        cubelet: CORNER,
        normal: Vector3::new(0.0, 1.0, 0.0),
    };
    assert_eq!(Ok(true), c.pointer_down(pt(100.0, 100.0), top_hit));
    assert_eq!(
        Some(&AnimEvent::SetAngle(pending.grip, 0.0)),
        animator.events().last(),
    );
    assert!(c.is_dragging());

    let committed = pollster::block_on(c.pointer_up()).unwrap();
    assert_eq!(Outcome::Done(vec![]), committed);
    assert_eq!(SOLVED_PATTERN, c.state().as_string());
}

#[test]
fn test_drags_rejected_while_busy() {
    let store = MemoryStore::new();
    let animator = RecordingAnimator::yielding();
    let c = controller(&animator, &store);
    let camera = OrbitCamera::default();

    c.pointer_down(pt(100.0, 100.0), front_hit()).unwrap();
    let pending = c.pointer_move(pt(200.0, 100.0), &camera).unwrap().unwrap();

    let mut playing = std::pin::pin!(c.play("R"));
    let mut cx = Context::from_waker(Waker::noop());
    assert!(playing.as_mut().poll(&mut cx).is_pending());

    // Starting the move list revoked the drag and reset its layer.
    assert!(!c.is_dragging());
    let reset = AnimEvent::SetAngle(pending.grip, 0.0);
    assert!(animator.events().contains(&reset));

    assert_eq!(Ok(None), c.pointer_move(pt(300.0, 100.0), &camera));
    assert_eq!(Ok(false), c.pointer_down(pt(100.0, 100.0), front_hit()));
    assert_eq!(Ok(Outcome::Busy), pollster::block_on(c.pointer_up()));
    assert_eq!(Ok(Outcome::Busy), pollster::block_on(c.solve()));
    assert_eq!(Ok(Outcome::Busy), c.reset(None));
    assert_eq!(state_after("R"), c.state());

    let played = poll_to_end(playing.as_mut()).unwrap();
    assert_eq!(Outcome::Done(parse_moves("R").unwrap()), played);
    assert_eq!(Ok(true), c.pointer_down(pt(100.0, 100.0), front_hit()));
}

#[test]
fn test_solve_shortcuts() {
    let store = MemoryStore::new();
    let animator = RecordingAnimator::default();
    let c = CubeController::with_solver(
        &animator,
        &store,
        Preferences::default(),
        FixedSolver(Err(SolverError::NoSolution { max_depth: 0 })),
    );

    // Solved cubes are left alone.
    assert_eq!(Ok(Outcome::Done(vec![])), pollster::block_on(c.solve()));
    assert!(animator.rotations().is_empty());

    // The rubicon pattern is solved without the solver.
    c.reset(Some(RUBICON_PATTERN)).unwrap();
    let played = pollster::block_on(c.solve()).unwrap().done().unwrap();
    let expected = patterns::moves_of(&patterns::extended_rubicon_solve()).unwrap();
    assert_eq!(expected, played);
    assert_eq!(35, played.len());
    assert_eq!(SOLVED_PATTERN, c.state().as_string());
}

#[test]
fn test_bounded_solver() {
    let store = MemoryStore::new();
    let animator = RecordingAnimator::default();
    let c = controller(&animator, &store);

    pollster::block_on(c.play("R U F'")).unwrap();
    let played = pollster::block_on(c.solve()).unwrap().done().unwrap();
    assert_eq!(3, played.len());
    assert!(c.state().is_solved());
    assert_eq!(Some(SOLVED_PATTERN.to_owned()), store.get(STATE_KEY));
}

#[test]
fn test_solver_failure_leaves_state_untouched() {
    let animator = RecordingAnimator::default();
    let failures = [
        FixedSolver(Err(SolverError::NoSolution { max_depth: 5 })),
        FixedSolver(Ok(vec!["R".to_owned(), "Q2".to_owned()])),
    ];
    for solver in failures {
        let store = MemoryStore::new();
        let c = CubeController::with_solver(&animator, &store, Preferences::default(), solver);
        pollster::block_on(c.play("L D")).unwrap();
        let rotations = animator.rotations().len();

        let result = pollster::block_on(c.solve());
        assert!(
            matches!(result, Err(SequencerError::Solver(_))),
            "{result:?}"
        );
        assert_eq!(state_after("L D"), c.state());
        assert_eq!(rotations, animator.rotations().len());
        assert!(!c.sequencer().is_busy());
    }
}

#[test]
fn test_shuffle() {
    let store = MemoryStore::new();
    let animator = RecordingAnimator::default();
    let mut prefs = Preferences::default();
    prefs.shuffle.length = 12;
    let c = CubeController::new(&animator, &store, prefs);

    let played = pollster::block_on(c.shuffle(None, Some(7))).done().unwrap();
    assert_eq!(seeded_shuffle(12, 7), played);

    let mut expected = CubeState::solved();
    expected.apply_moves(&played);
    assert_eq!(expected, c.state());

    let played = pollster::block_on(c.shuffle(Some(3), None)).done().unwrap();
    assert_eq!(3, played.len());
}

#[test]
fn test_demo_scan_and_play() {
    let store = MemoryStore::new();
    let animator = RecordingAnimator::default();
    let mut prefs = Preferences::default();
    prefs.animation.pattern_cell_delay_ms = 0;
    let c = CubeController::new(&animator, &store, prefs);

    let played = pollster::block_on(c.demo()).unwrap().done().unwrap();
    assert_eq!(14, played.len());
    assert!(c.state().is_solved());

    assert_eq!(Ok(Outcome::Done(())), pollster::block_on(c.scan()));
    assert_eq!(RUBICON_PATTERN, c.state().as_string());
    assert_eq!(Some(RUBICON_PATTERN.to_owned()), store.get(STATE_KEY));
    let pause = AnimEvent::Pause(Duration::ZERO);
    assert_eq!(25, animator.count(|e| *e == pause));

    let result = pollster::block_on(c.play("R X"));
    assert_eq!(
        Err(SequencerError::Notation(NotationError::UnknownFamily('X'))),
        result,
    );
    assert_eq!(RUBICON_PATTERN, c.state().as_string());
}

#[test]
fn test_state_key_from_prefs() {
    let store = MemoryStore::with_value("cube", RUBICON_PATTERN);
    let animator = RecordingAnimator::default();
    let mut prefs = Preferences::default();
    prefs.persistence.state_key = "cube".to_owned();
    let c = CubeController::new(&animator, &store, prefs);
    assert_eq!(RUBICON_PATTERN, c.state().as_string());

    c.reset(None).unwrap();
    assert_eq!(Some(SOLVED_PATTERN.to_owned()), store.get("cube"));
    assert_eq!(None, store.get(STATE_KEY));
}
