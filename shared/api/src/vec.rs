/// A two-dimensional vector in field coordinates.
///
/// `x` grows to the right and `y` grows "up" (north).
pub type Vec2 = nalgebra::Vector2<f64>;

/// Returns a [Vec2] with the given coordinates.
pub fn vec2(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

/// Returns the offset of length `distance` along the compass `bearing`.
///
/// Bearings are measured clockwise from north, so `x` uses the sine and `y`
/// the cosine.
pub fn project(bearing: f64, distance: f64) -> Vec2 {
    vec2(bearing.sin() * distance, bearing.cos() * distance)
}

/// Extra methods for Vec2.
pub trait Vec2Extras {
    /// Returns the length (or distance from origin).
    fn length(self) -> f64;

    /// Returns the distance to `other`.
    fn distance(self, other: Vec2) -> f64;

    /// Returns the compass bearing of the vector (in radians, clockwise from
    /// north, in `(-π, π]`).
    fn bearing(self) -> f64;

    /// Returns the compass bearing from this point towards `other`.
    fn bearing_to(self, other: Vec2) -> f64;
}

impl Vec2Extras for Vec2 {
    fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    fn bearing(self) -> f64 {
        self.x.atan2(self.y)
    }

    fn bearing_to(self, other: Vec2) -> f64 {
        (other - self).bearing()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_compass_bearing() {
        assert_abs_diff_eq!(vec2(0.0, 1.0).bearing(), 0.0);
        assert_abs_diff_eq!(vec2(1.0, 0.0).bearing(), FRAC_PI_2);
        assert_abs_diff_eq!(vec2(-1.0, 0.0).bearing(), -FRAC_PI_2);
        assert_abs_diff_eq!(vec2(0.0, -1.0).bearing(), PI);
    }

    #[test]
    fn test_project() {
        let p = project(FRAC_PI_2, 10.0);
        assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.bearing(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(vec2(3.0, 4.0).distance(vec2(0.0, 0.0)), 5.0);
    }
}
