use std::time::Duration;

use cgmath::{Deg, Rad};
use dragcube_core::{Cubelet, Face};
use dragcube_view::{LayerAnimator, LayerGrip};
use itertools::Itertools;

/// Animator without a display. Layer animations are logged and take as long
/// as they would on screen, unless `instant` is set.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TerminalAnimator {
    pub twist_duration: Duration,
    pub instant: bool,
}
impl TerminalAnimator {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + use<> {
        let duration = if self.instant {
            Duration::ZERO
        } else {
            duration
        };
        async move {
            if !duration.is_zero() {
                // Blocks the executor thread. Only one operation runs per
                // invocation, so nothing else is waiting on it.
                std::thread::sleep(duration);
            }
        }
    }
}
impl LayerAnimator for TerminalAnimator {
    fn set_layer_angle(&self, grip: LayerGrip, angle: f32) {
        let Deg(degrees) = Rad(angle).into();
        log::trace!(
            "layer {} of axis {} at {degrees:.0} degrees",
            grip.layer.int(),
            grip.axis,
        );
    }

    fn rotate_layer(&self, grip: LayerGrip, target: f32) -> impl Future<Output = ()> {
        let Deg(degrees) = Rad(target).into();
        log::debug!(
            "turning layer {} of axis {} to {degrees:.0} degrees",
            grip.layer.int(),
            grip.axis,
        );
        self.wait(self.twist_duration)
    }

    fn reset_layers(&self) {
        log::trace!("resetting layers");
    }

    fn show_cubelet(&self, cubelet: Cubelet, colors: &[(Face, Face)]) {
        let colors = colors
            .iter()
            .map(|(face, color)| format!("{face}={color}"))
            .join(" ");
        log::debug!("cubelet {cubelet}: {colors}");
    }

    fn pause(&self, duration: Duration) -> impl Future<Output = ()> {
        self.wait(duration)
    }
}
