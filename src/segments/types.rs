use crate::angle::segment_angle_deg;
use serde::{Deserialize, Serialize};

/// Line segment with integer pixel endpoints and a characteristic angle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p0: [i32; 2],
    pub p1: [i32; 2],
    /// Angle in degrees, `abs(atan2(dy, dx))`, range [0, 180].
    pub angle_deg: f32,
}

impl LineSegment {
    /// Build a segment with the angle derived from its endpoints.
    pub fn from_endpoints(p0: [i32; 2], p1: [i32; 2]) -> Self {
        Self {
            p0,
            p1,
            angle_deg: segment_angle_deg(p0, p1),
        }
    }

    /// Build a segment with an already-characterized angle.
    ///
    /// Used for merged representatives, whose angle is the mean of their
    /// group members rather than a value re-derived from the averaged
    /// endpoints.
    pub fn new(p0: [i32; 2], p1: [i32; 2], angle_deg: f32) -> Self {
        Self { p0, p1, angle_deg }
    }

    /// Euclidean distance between the endpoints (derived, not stored).
    pub fn length(&self) -> f32 {
        let dx = (self.p1[0] - self.p0[0]) as f32;
        let dy = (self.p1[1] - self.p0[1]) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_is_derived_from_endpoints() {
        let seg = LineSegment::from_endpoints([0, 0], [10, 10]);
        assert!((seg.angle_deg - 45.0).abs() < 1e-4);
        assert!((seg.length() - 200f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn zero_length_segment_is_harmless() {
        let seg = LineSegment::from_endpoints([5, 5], [5, 5]);
        assert_eq!(seg.length(), 0.0);
        assert_eq!(seg.angle_deg, 0.0);
    }
}
