use std::f32::consts::TAU;

use cgmath::{Deg, InnerSpace, Rad, Vector3};

/// Read-only view of the camera.
pub trait CameraFrame {
    /// Returns the position of the camera in world space. The cube is centered
    /// at the origin with Y up.
    fn position(&self) -> Vector3<f32>;

    /// Returns the horizontal angle of the camera about the vertical axis, in
    /// the range `0..2π`. A camera on the +Z axis has azimuth 0 and a camera
    /// on the +X axis has azimuth `π/2`.
    fn azimuth(&self) -> Rad<f32> {
        let p = self.position();
        Rad(f32::atan2(p.x, p.z).rem_euclid(TAU))
    }
}

impl CameraFrame for Vector3<f32> {
    fn position(&self) -> Vector3<f32> {
        *self
    }
}

/// Camera orbiting the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Horizontal angle about the vertical axis, measured from +Z toward +X.
    pub azimuth: Rad<f32>,
    /// Angle above the horizontal plane.
    pub elevation: Rad<f32>,
    /// Distance from the origin.
    pub distance: f32,
}
impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(Vector3::new(3.0, 3.0, 3.0))
    }
}
impl CameraFrame for OrbitCamera {
    fn position(&self) -> Vector3<f32> {
        let horizontal = self.distance * self.elevation.0.cos();
        Vector3::new(
            horizontal * self.azimuth.0.sin(),
            self.distance * self.elevation.0.sin(),
            horizontal * self.azimuth.0.cos(),
        )
    }
}
impl OrbitCamera {
    /// Constructs a camera at a position.
    pub fn from_position(p: Vector3<f32>) -> Self {
        let distance = p.magnitude();
        let horizontal = f32::hypot(p.x, p.z);
        Self {
            azimuth: Rad(f32::atan2(p.x, p.z)),
            elevation: Rad(f32::atan2(p.y, horizontal)),
            distance,
        }
    }
    /// Constructs a camera at an azimuth in degrees, looking down at the cube
    /// from the default elevation and distance.
    pub fn at_azimuth(degrees: f32) -> Self {
        Self {
            azimuth: Deg(degrees).into(),
            ..Self::default()
        }
    }
    /// Orbits the camera about the vertical axis.
    pub fn rotate_about_vertical(&mut self, angle: impl Into<Rad<f32>>) {
        self.azimuth = Rad((self.azimuth + angle.into()).0.rem_euclid(TAU));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(expected: f32, actual: f32) {
        assert!((expected - actual).abs() < 1e-4, "{expected} != {actual}");
    }

    #[test]
    fn test_azimuth() {
        assert_approx(0.0, Vector3::new(0.0, 2.0, 5.0).azimuth().0);
        assert_approx(TAU / 4.0, Vector3::new(5.0, 2.0, 0.0).azimuth().0);
        assert_approx(TAU / 2.0, Vector3::new(0.0, 2.0, -5.0).azimuth().0);
        assert_approx(TAU * 3.0 / 4.0, Vector3::new(-5.0, 2.0, 0.0).azimuth().0);
        assert_approx(TAU / 8.0, OrbitCamera::default().azimuth().0);
    }

    #[test]
    fn test_orbit_camera() {
        let mut camera = OrbitCamera::default();
        let p = camera.position();
        assert_approx(3.0, p.x);
        assert_approx(3.0, p.y);
        assert_approx(3.0, p.z);

        camera.rotate_about_vertical(Deg(-90.0));
        assert_approx(TAU * 7.0 / 8.0, camera.azimuth().0);
        assert_approx(-3.0, camera.position().x);
        assert_approx(3.0, camera.position().z);

        assert_approx(TAU / 2.0, OrbitCamera::at_azimuth(180.0).azimuth().0);
    }
}
