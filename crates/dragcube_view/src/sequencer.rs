//! Single-flight execution of everything that mutates the cube.

use std::sync::Arc;
use std::time::Duration;

use dragcube_core::{CubeState, Cubelet, PatternError};
use dragcube_notation::Move;
use dragcube_prefs::StateStore;
use parking_lot::Mutex;

use crate::{LayerAnimator, LayerGrip, MoveProgress, Outcome, Release, SingleFlight};

/// Owner of the cube state. Every mutation goes through a [`SingleFlight`]
/// guard, so at most one of them is in flight at a time and the rest are
/// rejected with [`Outcome::Busy`].
///
/// The state lock is never held across an await point.
pub struct MoveSequencer<A, S> {
    state: Mutex<CubeState>,
    guard: SingleFlight,
    progress: Arc<MoveProgress>,

    animator: A,
    store: S,
    state_key: String,
}

impl<A: LayerAnimator, S: StateStore> MoveSequencer<A, S> {
    /// Constructs a sequencer, restoring the state stored under `state_key`.
    ///
    /// If nothing is stored, the cube starts solved. If the stored value
    /// cannot be read or parsed, a warning is logged and the cube starts
    /// solved.
    pub fn new(animator: A, store: S, state_key: impl Into<String>) -> Self {
        let state_key = state_key.into();
        let state = match store.load(&state_key) {
            Ok(Some(pattern)) => CubeState::from_pattern(&pattern).unwrap_or_else(|e| {
                log::warn!("Error loading cube state {pattern:?}: {e}");
                CubeState::solved()
            }),
            Ok(None) => CubeState::solved(),
            Err(e) => {
                log::warn!("Error loading cube state: {e}");
                CubeState::solved()
            }
        };
        log::debug!("initial cube state {state}");

        Self {
            state: Mutex::new(state),
            guard: SingleFlight::new(),
            progress: Arc::new(MoveProgress::new()),

            animator,
            store,
            state_key,
        }
    }

    /// Returns a copy of the cube state.
    pub fn state(&self) -> CubeState {
        self.state.lock().clone()
    }
    /// Returns the pattern string of the cube state.
    pub fn pattern(&self) -> String {
        self.state.lock().as_string()
    }
    /// Returns whether a guarded operation is in flight. While one is, drags
    /// are not allowed.
    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }
    /// Returns the progress of the move list being played.
    pub fn progress(&self) -> &Arc<MoveProgress> {
        &self.progress
    }
    /// Returns the animator.
    pub fn animator(&self) -> &A {
        &self.animator
    }
    /// Returns the persistence store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs `op` if no other guarded operation is in flight, or returns
    /// [`Outcome::Busy`] without running it. The guard is released however
    /// `op` exits.
    pub async fn run_exclusive<T, Fut: Future<Output = T>>(
        &self,
        op: impl FnOnce() -> Fut,
    ) -> Outcome<T> {
        let Some(_token) = self.guard.try_enter() else {
            log::debug!("rejecting operation because another is in flight");
            return Outcome::Busy;
        };
        Outcome::Done(op().await)
    }

    /// Plays a list of moves in order.
    ///
    /// For each move, the state is mutated first, then progress is reported,
    /// then the layer animation runs to completion, then the new state is
    /// persisted.
    pub async fn apply_move_list(&self, moves: &[Move]) -> Outcome<()> {
        self.run_exclusive(|| self.play_moves(moves)).await
    }

    async fn play_moves(&self, moves: &[Move]) {
        log::debug!("playing {} moves", moves.len());
        let total = moves.len() as u32;
        self.progress.start(total);

        for (i, &m) in moves.iter().enumerate() {
            self.state.lock().apply_move(m);
            self.progress.set_progress(i as u32);
            self.animator
                .rotate_layer(LayerGrip::of_move(m), m.angle())
                .await;
            self.persist();
        }

        self.progress.finish();
    }

    /// Recolors the cube one cubelet at a time, pausing between cubelets,
    /// then replaces the state with one read directly from `pattern`.
    ///
    /// Returns an error without doing anything if `pattern` is invalid.
    pub async fn transition_to_pattern(
        &self,
        pattern: &str,
        cell_delay: Duration,
    ) -> Result<Outcome<()>, PatternError> {
        let new_state = CubeState::from_pattern(pattern)?;
        Ok(self
            .run_exclusive(|| async {
                self.animator.reset_layers();

                for (i, cubelet) in Cubelet::iter().enumerate() {
                    if i > 0 {
                        self.animator.pause(cell_delay).await;
                    }
                    self.animator
                        .show_cubelet(cubelet, &new_state.cubelet_colors(cubelet));
                }

                log::debug!("transitioned to pattern {new_state}");
                *self.state.lock() = new_state;
                self.persist();
            })
            .await)
    }

    /// Replaces the state with one read from `pattern`, or the solved state
    /// if `pattern` is `None`.
    ///
    /// Returns an error without doing anything if `pattern` is invalid.
    pub fn reset(&self, pattern: Option<&str>) -> Result<Outcome<()>, PatternError> {
        let new_state = match pattern {
            Some(p) => CubeState::from_pattern(p)?,
            None => CubeState::solved(),
        };
        let Some(_token) = self.guard.try_enter() else {
            log::debug!("rejecting reset because another operation is in flight");
            return Ok(Outcome::Busy);
        };

        self.animator.reset_layers();
        for cubelet in Cubelet::iter() {
            self.animator
                .show_cubelet(cubelet, &new_state.cubelet_colors(cubelet));
        }
        log::debug!("reset to pattern {new_state}");
        *self.state.lock() = new_state;
        self.persist();
        Ok(Outcome::Done(()))
    }

    /// Commits the end of a drag: applies and persists the resolved moves,
    /// then animates the layer to its snapped angle. Returns the moves that
    /// were applied.
    pub async fn commit_release(&self, release: Release) -> Outcome<Vec<Move>> {
        self.run_exclusive(|| async {
            match release {
                Release::Nothing => vec![],
                Release::SpringBack(grip) => {
                    self.animator.rotate_layer(grip, 0.0).await;
                    vec![]
                }
                Release::Twist(twist) => {
                    let moves = twist.moves();
                    self.state.lock().apply_moves(&moves);
                    log::debug!("committed twist {}", twist.notation());
                    self.persist();
                    self.animator
                        .rotate_layer(twist.grip, twist.target_angle())
                        .await;
                    moves
                }
            }
        })
        .await
    }

    /// Writes the state to the store. Failures are logged and otherwise
    /// ignored.
    fn persist(&self) {
        let pattern = self.pattern();
        match self.store.save(&self.state_key, &pattern) {
            Ok(()) => log::trace!("persisted {}={pattern}", self.state_key),
            Err(e) => log::error!("Error saving cube state: {e}"),
        }
    }
}
