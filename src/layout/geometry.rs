// 2-D vector helpers for the radial layout.
//
// Positions and directions share one type; the widget only ever sees
// positions.

use std::ops::{Add, Mul, Sub};

use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` along `angle` (radians, y grows downward
    /// on screen so positive angles turn clockwise).
    pub fn polar(center: PointF, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: &PointF) -> f64 {
        (*self - *other).length()
    }

    /// Unit vector in the same direction. Caller guarantees non-zero length.
    pub fn normalized(&self) -> PointF {
        let len = self.length();
        PointF { x: self.x / len, y: self.y / len }
    }

    /// Rotated a quarter turn: `(-y, x)`.
    pub fn perpendicular(&self) -> PointF {
        PointF { x: -self.y, y: self.x }
    }

    /// Rotate the unit vector `self` by `alpha` within the plane spanned by
    /// `self` and its perpendicular.
    pub fn rotated(&self, alpha: f64) -> PointF {
        *self * alpha.cos() + self.perpendicular() * alpha.sin()
    }

    /// Angle of this vector in radians, in (-pi, pi].
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Add for PointF {
    type Output = PointF;
    fn add(self, rhs: PointF) -> PointF {
        PointF { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for PointF {
    type Output = PointF;
    fn sub(self, rhs: PointF) -> PointF {
        PointF { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f64> for PointF {
    type Output = PointF;
    fn mul(self, rhs: f64) -> PointF {
        PointF { x: self.x * rhs, y: self.y * rhs }
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for PointF {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        <f64 as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        approx::abs_diff_eq!(self.x, other.x, epsilon = epsilon)
            && approx::abs_diff_eq!(self.y, other.y, epsilon = epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_polar_quarter_turn() {
        let p = PointF::polar(PointF::new(10.0, 10.0), 5.0, FRAC_PI_2);
        assert_abs_diff_eq!(p, PointF::new(10.0, 15.0), epsilon = EPS);
    }

    #[test]
    fn test_rotated_keeps_unit_length() {
        let d = PointF::new(3.0, 4.0).normalized();
        for alpha in [-PI / 3.0, 0.0, 0.25, PI / 2.0] {
            assert_abs_diff_eq!(d.rotated(alpha).length(), 1.0, epsilon = EPS);
        }
    }

    #[test]
    fn test_rotated_turns_toward_perpendicular() {
        let d = PointF::new(1.0, 0.0);
        assert_abs_diff_eq!(d.rotated(FRAC_PI_2), d.perpendicular(), epsilon = EPS);
    }
}
