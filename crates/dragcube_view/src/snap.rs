//! Snapping a released layer to a multiple of 90 degrees.

use crate::GestureError;

/// Canonical stop for a released layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SnapAngle {
    /// 0 degrees. The layer springs back and no move is emitted.
    Zero,
    /// 90 degrees.
    Quarter,
    /// 180 degrees.
    Half,
    /// 270 degrees.
    ThreeQuarter,
    /// 360 degrees.
    Full,
}
impl SnapAngle {
    /// Snaps an unsigned angle in degrees, in the range `0..=360`.
    ///
    /// Each bin includes its upper bound: `[0, 40]` snaps to 0, `(40, 130]` to
    /// 90, `(130, 220]` to 180, `(220, 310]` to 270, and `(310, 360]` to 360.
    pub fn from_degrees(degrees: f32) -> Result<Self, GestureError> {
        match degrees {
            d if (0.0..=40.0).contains(&d) => Ok(SnapAngle::Zero),
            d if d > 40.0 && d <= 130.0 => Ok(SnapAngle::Quarter),
            d if d > 130.0 && d <= 220.0 => Ok(SnapAngle::Half),
            d if d > 220.0 && d <= 310.0 => Ok(SnapAngle::ThreeQuarter),
            d if d > 310.0 && d <= 360.0 => Ok(SnapAngle::Full),
            _ => Err(GestureError::BadSnapAngle { degrees }),
        }
    }

    /// Snaps a signed angle in radians. The magnitude is reduced modulo 360
    /// degrees before snapping.
    pub fn from_radians(radians: f32) -> Result<Self, GestureError> {
        Self::from_degrees(radians.to_degrees().abs() % 360.0)
    }

    /// Returns the angle in degrees.
    pub const fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }
    /// Returns the number of quarter turns, from 0 to 4.
    pub const fn quarter_turns(self) -> u8 {
        match self {
            SnapAngle::Zero => 0,
            SnapAngle::Quarter => 1,
            SnapAngle::Half => 2,
            SnapAngle::ThreeQuarter => 3,
            SnapAngle::Full => 4,
        }
    }
    /// Returns the angle in radians.
    pub fn radians(self) -> f32 {
        self.quarter_turns() as f32 * std::f32::consts::FRAC_PI_2
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_snap_bins() {
        let cases = [
            (0.0, 0),
            (39.0, 0),
            (40.0, 0),
            (41.0, 90),
            (90.0, 90),
            (129.0, 90),
            (130.0, 90),
            (131.0, 180),
            (219.0, 180),
            (220.0, 180),
            (221.0, 270),
            (309.0, 270),
            (310.0, 270),
            (311.0, 360),
            (359.0, 360),
            (360.0, 360),
        ];
        for (input, expected) in cases {
            let snapped = SnapAngle::from_degrees(input).unwrap();
            assert_eq!(expected, snapped.degrees(), "{input}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(SnapAngle::from_degrees(-1.0).is_err());
        assert!(SnapAngle::from_degrees(360.5).is_err());
        assert!(SnapAngle::from_degrees(f32::NAN).is_err());
        assert!(SnapAngle::from_radians(f32::NAN).is_err());
        assert!(SnapAngle::from_radians(f32::INFINITY).is_err());
    }

    #[test]
    fn test_from_radians() {
        assert_eq!(SnapAngle::Quarter, SnapAngle::from_radians(-1.5).unwrap());
        assert_eq!(SnapAngle::Zero, SnapAngle::from_radians(0.5).unwrap());
        assert_eq!(SnapAngle::Half, SnapAngle::from_radians(3.0).unwrap());
        // 380 degrees wraps around to 20.
        let wrapped = SnapAngle::from_radians(380_f32.to_radians()).unwrap();
        assert_eq!(SnapAngle::Zero, wrapped);
        assert_eq!(4, SnapAngle::Full.quarter_turns());
    }
}
