use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use dragcube_core::{CubeState, Cubelet, Face};
use dragcube_prefs::MemoryStore;
use parking_lot::Mutex;

use crate::{LayerAnimator, LayerGrip, MoveProgress};

pub const STATE_KEY: &str = "fd";

#[derive(Debug, Clone, PartialEq)]
pub enum AnimEvent {
    SetAngle(LayerGrip, f32),
    Rotate(LayerGrip, f32),
    Reset,
    Show(Cubelet),
    Pause(Duration),
}

/// What the animator saw at the start of a layer rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub progress: (u32, u32),
    pub stored: Option<String>,
}

/// Animator that records every call and finishes animations immediately,
/// optionally after yielding once.
#[derive(Debug, Default)]
pub struct RecordingAnimator<'a> {
    pub events: Mutex<Vec<AnimEvent>>,
    pub snapshots: Mutex<Vec<Snapshot>>,
    pub progress: Mutex<Option<Arc<MoveProgress>>>,
    pub store: Option<&'a MemoryStore>,
    pub yield_once: bool,
}
impl<'a> RecordingAnimator<'a> {
    pub fn yielding() -> Self {
        Self {
            yield_once: true,
            ..Self::default()
        }
    }
    pub fn observing(store: &'a MemoryStore) -> Self {
        Self {
            store: Some(store),
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<AnimEvent> {
        self.events.lock().clone()
    }
    pub fn rotations(&self) -> Vec<(LayerGrip, f32)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                AnimEvent::Rotate(grip, angle) => Some((grip, angle)),
                _ => None,
            })
            .collect()
    }
    pub fn count(&self, f: impl Fn(&AnimEvent) -> bool) -> usize {
        self.events.lock().iter().filter(|e| f(e)).count()
    }
}
impl LayerAnimator for RecordingAnimator<'_> {
    fn set_layer_angle(&self, grip: LayerGrip, angle: f32) {
        self.events.lock().push(AnimEvent::SetAngle(grip, angle));
    }
    fn rotate_layer(&self, grip: LayerGrip, target: f32) -> impl Future<Output = ()> {
        self.events.lock().push(AnimEvent::Rotate(grip, target));
        let progress = self
            .progress
            .lock()
            .as_ref()
            .map_or((0, 0), |p| p.fraction());
        let stored = self.store.and_then(|s| s.get(STATE_KEY));
        self.snapshots.lock().push(Snapshot { progress, stored });

        let yield_once = self.yield_once;
        async move {
            if yield_once {
                YieldOnce(false).await;
            }
        }
    }
    fn reset_layers(&self) {
        self.events.lock().push(AnimEvent::Reset);
    }
    fn show_cubelet(&self, cubelet: Cubelet, _colors: &[(Face, Face)]) {
        self.events.lock().push(AnimEvent::Show(cubelet));
    }
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> {
        self.events.lock().push(AnimEvent::Pause(duration));
        std::future::ready(())
    }
}

/// Future that is pending the first time it is polled.
struct YieldOnce(bool);
impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Returns the solved state after a notation string.
pub fn state_after(notation: &str) -> CubeState {
    let mut state = CubeState::solved();
    state.apply(notation).unwrap();
    state
}

/// Polls a future to completion on the current thread.
pub fn poll_to_end<F: Future>(mut fut: Pin<&mut F>) -> F::Output {
    let mut cx = Context::from_waker(std::task::Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
