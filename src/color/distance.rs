//! Squared Euclidean distance between colors.
//!
//! The tree compares these values both to pick the best match and to decide
//! whether a far subtree can be skipped, so the metric must stay a true
//! coordinate-wise norm.

use super::rgb::{Axis, Rgb};

pub type Distance = i32;

const MAX_CHANNEL_DELTA: i64 = u8::MAX as i64;

/// Largest value [`squared_distance`] can produce: black to white.
pub const MAX_SQUARED_DISTANCE: i64 = 3 * MAX_CHANNEL_DELTA * MAX_CHANNEL_DELTA;

const _: () = assert!(MAX_SQUARED_DISTANCE <= Distance::MAX as i64);

#[inline(always)]
pub fn squared_distance(p: Rgb, q: Rgb) -> Distance {
    let r = p.red as Distance - q.red as Distance;
    let g = p.green as Distance - q.green as Distance;
    let b = p.blue as Distance - q.blue as Distance;
    r * r + g * g + b * b
}

/// Squared distance from `target` to the plane `channel(axis) == split`.
///
/// Every point on the other side of the plane is at least this far away.
#[inline(always)]
pub fn squared_plane_distance(target: Rgb, split: Rgb, axis: Axis) -> Distance {
    let delta = target.channel(axis) as Distance - split.channel(axis) as Distance;
    delta * delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_to_white_is_the_maximum() {
        let d = squared_distance(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
        assert_eq!(d as i64, MAX_SQUARED_DISTANCE);
        assert_eq!(d, 195_075);
    }

    #[test]
    fn symmetric_and_zero_on_identity() {
        let a = Rgb::new(12, 200, 99);
        let b = Rgb::new(250, 3, 101);
        assert_eq!(squared_distance(a, b), squared_distance(b, a));
        assert_eq!(squared_distance(a, a), 0);
        assert_eq!(squared_distance(a, b), 238 * 238 + 197 * 197 + 2 * 2);
    }

    #[test]
    fn plane_distance_never_exceeds_point_distance() {
        let t = Rgb::new(10, 240, 30);
        let p = Rgb::new(200, 100, 35);
        for axis in Axis::ALL {
            assert!(squared_plane_distance(t, p, axis) <= squared_distance(t, p));
        }
        assert_eq!(squared_plane_distance(t, p, Axis::Red), 190 * 190);
    }
}
