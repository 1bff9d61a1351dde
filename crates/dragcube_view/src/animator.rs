use std::time::Duration;

use dragcube_core::{Cubelet, Face};

use crate::LayerGrip;

/// Visual side of the cube, driven by the sequencer and the gesture
/// classifier.
///
/// Implementations must resolve [`LayerAnimator::rotate_layer`] only after the
/// layer reaches exactly the target angle and has been regrouped into the
/// whole-cube frame, so that later drags see clean, unrotated transforms.
pub trait LayerAnimator {
    /// Sets the live angle of a layer during a drag, in radians about the
    /// positive end of its axis.
    fn set_layer_angle(&self, grip: LayerGrip, angle: f32);

    /// Animates a layer to a target angle, then regroups it into the
    /// whole-cube frame with its rotation baked in.
    fn rotate_layer(&self, grip: LayerGrip, target: f32) -> impl Future<Output = ()>;

    /// Clears any partial layer rotation without animating.
    fn reset_layers(&self);

    /// Recolors the facelets of a cubelet. Each entry is a face the cubelet
    /// touches and the color shown there.
    fn show_cubelet(&self, cubelet: Cubelet, colors: &[(Face, Face)]);

    /// Waits between animation steps.
    fn pause(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: LayerAnimator + ?Sized> LayerAnimator for &T {
    fn set_layer_angle(&self, grip: LayerGrip, angle: f32) {
        (**self).set_layer_angle(grip, angle);
    }
    fn rotate_layer(&self, grip: LayerGrip, target: f32) -> impl Future<Output = ()> {
        (**self).rotate_layer(grip, target)
    }
    fn reset_layers(&self) {
        (**self).reset_layers();
    }
    fn show_cubelet(&self, cubelet: Cubelet, colors: &[(Face, Face)]) {
        (**self).show_cubelet(cubelet, colors);
    }
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).pause(duration)
    }
}
