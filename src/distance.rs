//! Approximate Euclidean magnitude of a 3D integer vector.

use crate::rsqrt::{reciprocal_sqrt_q16, FRAC_BITS};

/// Result of [`distance3_checked`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Magnitude {
    /// The sum of squares fitted in 32 bits.
    InRange(u32),
    /// The sum of squares exceeded `u32::MAX` and was clamped before the
    /// square root, so the value is only a lower bound.
    Saturated(u32),
}

impl Magnitude {
    pub fn value(self) -> u32 {
        match self {
            Magnitude::InRange(v) | Magnitude::Saturated(v) => v,
        }
    }
    pub fn is_saturated(self) -> bool {
        matches!(self, Magnitude::Saturated(_))
    }
}

/// Exact `x² + y² + z²`.  At most `3 * 2^62`, so no overflow.
pub fn sum_of_squares(x: i32, y: i32, z: i32) -> u64 {
    let sq = |v: i32| {
        let a = v.unsigned_abs() as u64;
        a * a
    };
    sq(x) + sq(y) + sq(z)
}

/// `sqrt(x² + y² + z²)` as `sum * rsqrt(sum)`, flagging saturation.
pub fn distance3_checked(x: i32, y: i32, z: i32) -> Magnitude {
    let wide = sum_of_squares(x, y, z);
    let sum = wide.min(u32::MAX as u64) as u32;
    // rsqrt(0) saturates, but the product is still 0.
    let inv = reciprocal_sqrt_q16(sum);
    let dist = (inv as u64 * sum as u64 >> FRAC_BITS) as u32;
    if wide > u32::MAX as u64 {
        Magnitude::Saturated(dist)
    }
    else {
        Magnitude::InRange(dist)
    }
}

/// Approximate magnitude of `(x, y, z)`.  A sum of squares beyond 32 bits
/// is silently clamped; use [`distance3_checked`] to find out.
pub fn distance3(x: i32, y: i32, z: i32) -> u32 {
    distance3_checked(x, y, z).value()
}

#[test]
fn small_values() {
    assert_eq!(distance3(0, 0, 0), 0);
    // rsqrt(25) = 13107 is a hair under 65536/5, so 5 truncates to 4.
    assert_eq!(distance3(3, 4, 0), 4);
    assert_eq!(distance3(1, 2, 3), 3);
    assert_eq!(distance3(100, 200, 300), 373);
    assert_eq!(distance3(46341, 0, 0), 32768);
}

#[test]
fn sign_and_order() {
    for &(x, y, z) in &[(3, 4, 0), (1, 2, 3), (-7, 11, 13), (1000, -2000, 5)] {
        let d = distance3(x, y, z);
        assert_eq!(distance3(-x, -y, -z), d);
        assert_eq!(distance3(z, x, y), d);
        assert_eq!(distance3(y, z, x), d);
    }
}

#[test]
fn never_above_true_length() {
    for x in -20 ..= 20 {
        for y in -20 ..= 20 {
            for z in -20 ..= 20 {
                let d = distance3(x, y, z) as f64;
                let t = (sum_of_squares(x, y, z) as f64).sqrt();
                assert!(d <= t && t - d <= 1.0, "({x}, {y}, {z}) d={d} t={t}");
            }
        }
    }
}

#[test]
fn saturation() {
    assert_eq!(sum_of_squares(i32::MIN, i32::MIN, i32::MIN), 3 << 62);

    // Just fits.
    assert_eq!(distance3_checked(65535, 0, 0), Magnitude::InRange(65534));
    // 2^32 is one too many.
    assert_eq!(distance3_checked(65536, 0, 0), Magnitude::Saturated(65535));

    let m = distance3_checked(100000, 100000, 100000);
    assert!(m.is_saturated());
    assert_eq!(m.value(), 65535);
    assert_eq!(distance3(i32::MIN, i32::MIN, i32::MIN), 65535);
    assert_eq!(distance3(i32::MAX, i32::MIN, 0), 65535);
    assert!(!distance3_checked(0, 0, 0).is_saturated());
}
