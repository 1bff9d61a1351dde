//! Command boundary: pointer input and named commands, all routed through one
//! [`MoveSequencer`].

use cgmath::Point2;
use dragcube_core::patterns::{self, RUBICON_PATTERN};
use dragcube_core::{
    BoundedSolver, CubeState, Solver, random_shuffle, seeded_shuffle, solution_moves,
};
use dragcube_notation::{Move, parse_moves};
use dragcube_prefs::{Preferences, StateStore};
use parking_lot::Mutex;

use crate::{
    CameraFrame, GestureClassifier, GestureConfig, GestureError, LayerAnimator, MoveSequencer,
    Outcome, PendingAnimation, SequencerError, SurfaceHit,
};

/// Interactive cube: a gesture classifier, a solver, and the sequencer that
/// owns the cube state.
pub struct CubeController<A, S> {
    sequencer: MoveSequencer<A, S>,
    gesture: Mutex<GestureClassifier>,
    solver: Box<dyn Solver>,
    prefs: Preferences,
}

impl<A: LayerAnimator, S: StateStore> CubeController<A, S> {
    /// Constructs a controller using the built-in [`BoundedSolver`].
    pub fn new(animator: A, store: S, prefs: Preferences) -> Self {
        let solver = BoundedSolver {
            max_depth: prefs.solver.max_depth,
        };
        Self::with_solver(animator, store, prefs, solver)
    }

    /// Constructs a controller using a custom solver.
    pub fn with_solver(
        animator: A,
        store: S,
        prefs: Preferences,
        solver: impl Solver + 'static,
    ) -> Self {
        let sequencer = MoveSequencer::new(animator, store, &prefs.persistence.state_key);
        let gesture = GestureClassifier::new(GestureConfig::from(&prefs.interaction));
        Self {
            sequencer,
            gesture: Mutex::new(gesture),
            solver: Box::new(solver),
            prefs,
        }
    }

    /// Returns the sequencer that owns the cube state.
    pub fn sequencer(&self) -> &MoveSequencer<A, S> {
        &self.sequencer
    }
    /// Returns the preferences the controller was constructed with.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
    /// Returns a copy of the cube state.
    pub fn state(&self) -> CubeState {
        self.sequencer.state()
    }
    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.lock().is_active()
    }

    /// Handles a pointer press on the cube surface. Returns `false` if drags
    /// are not allowed because another operation is in flight.
    ///
    /// An unfinished drag is discarded and its layer is reset.
    pub fn pointer_down(
        &self,
        point: Point2<f32>,
        hit: SurfaceHit,
    ) -> Result<bool, SequencerError> {
        if self.sequencer.is_busy() {
            log::trace!("ignoring press during another operation");
            return Ok(false);
        }
        self.cancel_gesture();
        let result = self.gesture.lock().press(point, hit);
        result.map_err(|e| self.abort_gesture(e))?;
        Ok(true)
    }

    /// Handles a pointer move, rotating the gripped layer to follow it.
    ///
    /// If another operation has started since the press, the drag is
    /// canceled and its layer is reset.
    pub fn pointer_move(
        &self,
        point: Point2<f32>,
        camera: &impl CameraFrame,
    ) -> Result<Option<PendingAnimation>, SequencerError> {
        if self.sequencer.is_busy() {
            self.cancel_gesture();
            return Ok(None);
        }
        let result = self.gesture.lock().drag(point, camera);
        let pending = result.map_err(|e| self.abort_gesture(e))?;
        if let Some(p) = pending {
            self.sequencer.animator().set_layer_angle(p.grip, p.angle);
        }
        Ok(pending)
    }

    /// Handles a pointer release, committing the resolved twist. Returns the
    /// moves that were applied.
    pub async fn pointer_up(&self) -> Result<Outcome<Vec<Move>>, SequencerError> {
        let result = self.gesture.lock().release();
        let release = result.map_err(|e| self.abort_gesture(e))?;
        let grip = release.grip();

        let outcome = self.sequencer.commit_release(release).await;
        if outcome.is_busy()
            && let Some(grip) = grip
        {
            self.sequencer.animator().set_layer_angle(grip, 0.0);
        }
        Ok(outcome)
    }

    /// Discards the drag in progress, if any, without emitting a move.
    pub fn cancel_gesture(&self) {
        let grip = self.gesture.lock().cancel();
        if let Some(grip) = grip {
            self.sequencer.animator().set_layer_angle(grip, 0.0);
        }
    }

    /// Returns the cube to a safe idle state after an invariant violation.
    fn abort_gesture(&self, e: GestureError) -> SequencerError {
        log::error!("Error during drag: {e}");
        self.gesture.lock().cancel();
        self.sequencer.animator().reset_layers();
        e.into()
    }

    /// Resets the cube to the solved state, or to a pattern.
    pub fn reset(&self, pattern: Option<&str>) -> Result<Outcome<()>, SequencerError> {
        self.cancel_gesture();
        Ok(self.sequencer.reset(pattern)?)
    }

    /// Plays a solution for the cube. Returns the moves that were played.
    ///
    /// Nothing is played if the cube is already solved. A cube showing
    /// [`RUBICON_PATTERN`] is solved with [`patterns::extended_rubicon_solve`]
    /// without calling the solver. If the solver fails, the cube state is
    /// untouched.
    pub async fn solve(&self) -> Result<Outcome<Vec<Move>>, SequencerError> {
        if self.sequencer.is_busy() {
            log::debug!("rejecting solve because another operation is in flight");
            return Ok(Outcome::Busy);
        }

        let state = self.sequencer.state();
        if state.is_solved() {
            log::debug!("cube is already solved");
            return Ok(Outcome::Done(vec![]));
        }
        let moves = if state.as_string() == RUBICON_PATTERN {
            patterns::moves_of(&patterns::extended_rubicon_solve())?
        } else {
            solution_moves(&*self.solver, &state)?
        };
        Ok(self.play_moves(moves).await)
    }

    /// Plays a random shuffle. `length` defaults to the configured shuffle
    /// length. If `seed` is given, the shuffle is deterministic.
    pub async fn shuffle(&self, length: Option<usize>, seed: Option<u64>) -> Outcome<Vec<Move>> {
        let len = length.unwrap_or(self.prefs.shuffle.length);
        let moves = match seed {
            Some(seed) => seeded_shuffle(len, seed),
            None => random_shuffle(len),
        };
        self.play_moves(moves).await
    }

    /// Plays the demonstration sequence, which leaves the cube unchanged.
    pub async fn demo(&self) -> Result<Outcome<Vec<Move>>, SequencerError> {
        let moves = patterns::moves_of(&patterns::rubicon_setup_and_solve())?;
        Ok(self.play_moves(moves).await)
    }

    /// Plays a notation string such as `R U R' U'`.
    pub async fn play(&self, notation: &str) -> Result<Outcome<Vec<Move>>, SequencerError> {
        let moves = parse_moves(notation)?;
        Ok(self.play_moves(moves).await)
    }

    /// Recolors the cube to [`RUBICON_PATTERN`] one cubelet at a time.
    pub async fn scan(&self) -> Result<Outcome<()>, SequencerError> {
        self.cancel_gesture();
        let delay = self.prefs.animation.pattern_cell_delay();
        Ok(self
            .sequencer
            .transition_to_pattern(RUBICON_PATTERN, delay)
            .await?)
    }

    async fn play_moves(&self, moves: Vec<Move>) -> Outcome<Vec<Move>> {
        self.cancel_gesture();
        let outcome = self.sequencer.apply_move_list(&moves).await;
        outcome.map(|()| moves)
    }
}

#[cfg(test)]
mod tests;
