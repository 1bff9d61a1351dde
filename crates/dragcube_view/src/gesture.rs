//! State machine converting pointer samples into a resolved layer twist.

use cgmath::{Basis2, InnerSpace, MetricSpace, Point2, Rotation, Rotation2, Vector2, Vector3};
use dragcube_core::{Cubelet, Face};
use dragcube_notation::{Axis, Direction, Move, Sign, format_moves};
use dragcube_prefs::InteractionPreferences;

use crate::{
    CameraFrame, DragRule, GestureError, ScreenAxis, SnapAngle, correction_angle, drag_rule,
    is_camera_dependent,
};

/// Result of casting a pointer ray onto the cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceHit {
    /// Cubelet that was hit.
    pub cubelet: Cubelet,
    /// Outward normal of the surface that was hit, in world space.
    pub normal: Vector3<f32>,
}
impl SurfaceHit {
    /// Constructs a hit from the intersection point on the cube surface, using
    /// the dominant axis of the point as the normal. This is robust against
    /// rounded cubelet corners whose surface normals point the wrong way.
    pub fn from_point(cubelet: Cubelet, point: Vector3<f32>) -> Self {
        let p = point.normalize();
        let (axis, value) = Axis::iter()
            .map(|axis| (axis, p[axis.int()]))
            .fold((Axis::X, 0.0_f32), |best, (axis, value)| {
                if value.abs() > best.1.abs() {
                    (axis, value)
                } else {
                    best
                }
            });
        let mut normal = Vector3::new(0.0, 0.0, 0.0);
        normal[axis.int()] = Sign::of_f32(value).float();
        Self { cubelet, normal }
    }

    /// Snaps the normal to a face of the cube.
    fn snap_normal(&self, threshold: f32) -> Result<Face, GestureError> {
        Axis::iter()
            .find_map(|axis| {
                let value = self.normal[axis.int()];
                (value.abs() > threshold)
                    .then(|| Face::from_normal(axis, Sign::of_f32(value)))
                    .flatten()
            })
            .ok_or(GestureError::UnsnappedNormal {
                normal: self.normal.into(),
            })
    }
}

/// Layer of cubelets sharing a coordinate along an axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerGrip {
    /// Rotation axis.
    pub axis: Axis,
    /// Position of the layer along the axis.
    pub layer: Sign,
}
impl LayerGrip {
    /// Returns the grip turned by a move.
    pub fn of_move(m: Move) -> Self {
        Self {
            axis: m.axis,
            layer: m.layer,
        }
    }
    /// Returns the cubelets in the layer.
    pub fn cubelets(self) -> impl Iterator<Item = Cubelet> {
        Cubelet::iter().filter(move |c| c[self.axis] == self.layer)
    }
}

/// Live rotation of a layer during a drag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PendingAnimation {
    /// Layer being rotated.
    pub grip: LayerGrip,
    /// Rotation about the positive end of the axis, in radians.
    pub angle: f32,
}

/// Rotation locked in once a drag travels far enough.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisLock {
    /// Screen axis along which displacement is measured.
    pub screen_axis: ScreenAxis,
    /// Rotation axis and sign.
    pub rule: DragRule,
    /// Layer being rotated.
    pub grip: LayerGrip,
    /// Sign of the first nonzero displacement along `screen_axis`.
    pub initial_sign: Sign,
    /// Current rotation angle, in radians.
    pub angle: f32,
}

/// Ephemeral state of one drag, from pointer-down to pointer-up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureSession {
    /// Screen position at pointer-down.
    pub anchor: Point2<f32>,
    /// Latest screen position.
    pub current: Point2<f32>,
    /// Cubelet under the pointer at pointer-down.
    pub cubelet: Cubelet,
    /// Face whose outward normal was hit, snapped to an axis.
    pub face: Face,
    /// Rotation, once locked.
    pub lock: Option<AxisLock>,
}
impl GestureSession {
    /// Returns the displacement from the anchor, rotated into the
    /// camera-corrected frame for faces that need it.
    fn corrected_delta(&self, camera: &impl CameraFrame) -> Vector2<f32> {
        let delta = self.current - self.anchor;
        if is_camera_dependent(self.face) {
            let angle = correction_angle(self.face, camera.azimuth());
            let rot: Basis2<f32> = Rotation2::from_angle(angle);
            rot.rotate_vector(delta)
        } else {
            delta
        }
    }
}

/// State of a drag.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum DragState {
    /// No drag is happening.
    #[default]
    Idle,
    /// Pressed on the cube. Once the user has dragged far enough to determine
    /// a direction, the state changes to [`DragState::AxisLocked`].
    Armed(GestureSession),
    /// Dragging a layer.
    AxisLocked(GestureSession),
}

/// Twist resolved when a locked drag is released.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResolvedTwist {
    /// Layer that was twisted.
    pub grip: LayerGrip,
    /// Turn sense about the positive end of the axis.
    pub direction: Direction,
    /// Snapped angle. Never [`SnapAngle::Zero`].
    pub snap: SnapAngle,
}
impl ResolvedTwist {
    /// Returns the moves for the twist, one quarter turn per token.
    pub fn moves(self) -> Vec<Move> {
        let quarter = Move::quarter_turn(self.grip.axis, self.grip.layer, self.direction);
        vec![quarter; self.snap.quarter_turns() as usize]
    }
    /// Returns the notation for the twist, such as `R' R'`.
    pub fn notation(self) -> String {
        format_moves(&self.moves())
    }
    /// Returns the final angle of the layer, in radians.
    pub fn target_angle(self) -> f32 {
        self.direction.float() * self.snap.radians()
    }
}

/// Outcome of releasing the pointer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Release {
    /// No layer was rotated.
    Nothing,
    /// The layer springs back to its original position without emitting a
    /// move.
    SpringBack(LayerGrip),
    /// The layer snaps to a new position.
    Twist(ResolvedTwist),
}
impl Release {
    /// Returns the layer that was rotated, if any.
    pub fn grip(&self) -> Option<LayerGrip> {
        match self {
            Release::Nothing => None,
            Release::SpringBack(grip) => Some(*grip),
            Release::Twist(twist) => Some(twist.grip),
        }
    }
}

/// Parameters for classifying drags.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureConfig {
    /// Screen distance that a drag must travel before its axis is locked.
    pub min_move_distance: f32,
    /// Layer rotation per pixel, in radians.
    pub rotation_rad_per_px: f32,
    /// Minimum magnitude of a normal component for it to snap to that axis.
    pub normal_snap_threshold: f32,
}
impl Default for GestureConfig {
    fn default() -> Self {
        Self::from(&InteractionPreferences::default())
    }
}
impl From<&InteractionPreferences> for GestureConfig {
    fn from(prefs: &InteractionPreferences) -> Self {
        Self {
            min_move_distance: prefs.min_move_distance,
            rotation_rad_per_px: prefs.rotation_rad_per_px,
            normal_snap_threshold: prefs.normal_snap_threshold,
        }
    }
}

/// Converts pointer samples into layer twists.
///
/// The classifier never touches the cube state. It hands off a
/// [`Release`] that the caller commits.
#[derive(Debug, Default, Clone)]
pub struct GestureClassifier {
    config: GestureConfig,
    state: DragState,
}
impl GestureClassifier {
    /// Constructs an idle classifier.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: DragState::Idle,
        }
    }

    /// Returns the drag state.
    pub fn state(&self) -> &DragState {
        &self.state
    }
    /// Returns the current session, if there is one.
    pub fn session(&self) -> Option<&GestureSession> {
        match &self.state {
            DragState::Idle => None,
            DragState::Armed(session) | DragState::AxisLocked(session) => Some(session),
        }
    }
    /// Returns whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.session().is_some()
    }

    /// Begins a drag on the cube surface.
    ///
    /// Returns an error if the hit normal is not near any axis. Any previous
    /// session is discarded without resetting its layer, so call
    /// [`Self::cancel`] first to find out which layer to reset.
    pub fn press(&mut self, anchor: Point2<f32>, hit: SurfaceHit) -> Result<(), GestureError> {
        if self.is_active() {
            log::trace!("discarding unfinished drag");
        }
        self.state = DragState::Idle;

        let face = hit.snap_normal(self.config.normal_snap_threshold)?;
        log::trace!("pressed {face} face of cubelet {}", hit.cubelet);
        self.state = DragState::Armed(GestureSession {
            anchor,
            current: anchor,
            cubelet: hit.cubelet,
            face,
            lock: None,
        });
        Ok(())
    }

    /// Updates the drag with a new pointer position. Returns the live rotation
    /// of the gripped layer once the axis is locked.
    pub fn drag(
        &mut self,
        point: Point2<f32>,
        camera: &impl CameraFrame,
    ) -> Result<Option<PendingAnimation>, GestureError> {
        let config = self.config;
        match &mut self.state {
            DragState::Idle => Ok(None),

            DragState::Armed(session) => {
                session.current = point;
                if session.anchor.distance(point) < config.min_move_distance {
                    return Ok(None);
                }

                let delta = session.corrected_delta(camera);
                if !(delta.x.is_finite() && delta.y.is_finite()) {
                    return Err(GestureError::UnresolvedAxis {
                        delta: delta.into(),
                    });
                }
                let screen_axis = ScreenAxis::dominant(delta);
                let rule = drag_rule(session.face, screen_axis);
                let grip = LayerGrip {
                    axis: rule.axis,
                    layer: session.cubelet[rule.axis],
                };
                log::trace!(
                    "locked {screen_axis:?} drag on {} face to layer {} of axis {}",
                    session.face,
                    grip.layer.int(),
                    grip.axis,
                );
                session.lock = Some(AxisLock {
                    screen_axis,
                    rule,
                    grip,
                    initial_sign: Sign::Zero,
                    angle: 0.0,
                });

                let mut session = *session;
                let pending = Self::update_angle(&mut session, config, delta);
                self.state = DragState::AxisLocked(session);
                Ok(pending)
            }

            DragState::AxisLocked(session) => {
                session.current = point;
                let delta = session.corrected_delta(camera);
                Ok(Self::update_angle(session, config, delta))
            }
        }
    }

    fn update_angle(
        session: &mut GestureSession,
        config: GestureConfig,
        delta: Vector2<f32>,
    ) -> Option<PendingAnimation> {
        let lock = session.lock.as_mut()?;
        let distance = lock.screen_axis.component(delta);
        if lock.initial_sign.is_zero() {
            lock.initial_sign = Sign::of_f32(distance);
        }
        // Offset by the threshold so that rotation starts from zero.
        lock.angle = (distance - config.min_move_distance * lock.initial_sign.float())
            * config.rotation_rad_per_px
            * lock.rule.sign.float();
        Some(PendingAnimation {
            grip: lock.grip,
            angle: lock.angle,
        })
    }

    /// Ends the drag and resolves the twist, returning to [`DragState::Idle`].
    pub fn release(&mut self) -> Result<Release, GestureError> {
        let lock = match std::mem::take(&mut self.state) {
            DragState::Idle | DragState::Armed(_) => return Ok(Release::Nothing),
            DragState::AxisLocked(session) => session.lock,
        };
        let Some(lock) = lock else {
            return Err(GestureError::UnresolvedAxis { delta: [0.0; 2] });
        };

        let snap = SnapAngle::from_radians(lock.angle)?;
        if snap == SnapAngle::Zero {
            log::trace!("springing back layer");
            return Ok(Release::SpringBack(lock.grip));
        }
        let direction = Direction::from_sign(Sign::of_f32(lock.angle)).ok_or(
            GestureError::BadSnapAngle {
                degrees: lock.angle.to_degrees(),
            },
        )?;
        let twist = ResolvedTwist {
            grip: lock.grip,
            direction,
            snap,
        };
        log::trace!("resolved twist {}", twist.notation());
        Ok(Release::Twist(twist))
    }

    /// Discards the drag without emitting a move. Returns the layer that was
    /// being rotated, if any, so that it can be reset.
    pub fn cancel(&mut self) -> Option<LayerGrip> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Armed(_) => {
                log::trace!("canceled drag");
                None
            }
            DragState::AxisLocked(session) => {
                log::trace!("canceled drag");
                Some(session.lock?.grip)
            }
        }
    }
}
