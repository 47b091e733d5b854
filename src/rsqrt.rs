//! Reciprocal square root in Q16 fixed point.
//!
//! Parameters named `x` are raw integers.  Anything typed [`Q16`] is fixed
//! point, `v` representing `v / 65536`.  The estimate is seeded from a table
//! of exact powers of two, linearly interpolated across the bucket, and then
//! polished by Newton-Raphson.

use crate::bits::exponent;

/// Unsigned Q16 fixed point.
pub type Q16 = u32;

pub const FRAC_BITS: u32 = 16;
/// 1.0
pub const ONE: Q16 = 1 << FRAC_BITS;

/// Newton-Raphson steps after interpolation.  Two is enough for the coarse
/// distance checks this is used for.
pub const NEWTON_STEPS: usize = 2;

/// `SEED[e] ≈ 2^16 / sqrt(2^e)`, i.e. 1/sqrt at the bottom of bucket `e`.
pub const SEED: [Q16; 32] = [
    65536, 46341, 32768, 23170, 16384, 11585, 8192, 5793,
    4096,  2896,  2048,  1448,  1024,  724,   512,  362,
    256,   181,   128,   90,    64,    45,    32,   23,
    16,    11,    8,     6,     4,     3,     2,    1];

static_assertions::const_assert_eq!(SEED[0], ONE);
static_assertions::const_assert_eq!(SEED[31], 1);

const _: () = {
    let mut e = 1;
    while e < SEED.len() {
        assert!(SEED[e] < SEED[e - 1], "SEED must be strictly decreasing");
        e += 1;
    }
};

/// Initial estimate for raw `x` in bucket `e`, interpolated between the
/// seeds at either end of the bucket.
pub fn interpolate(x: u32, e: u32) -> Q16 {
    let y_base = SEED[e as usize];
    // There is no bucket 32.
    let y_next = if e < 31 {SEED[e as usize + 1]} else {1};
    // The top bucket uses base 0, so frac overshoots 1.0 there.  That is
    // harmless as y_base == y_next.
    let base = if e < 31 {1u32 << e} else {0};

    // How far x sits into its bucket, Q16.
    let frac = ((x as u64 - base as u64) << FRAC_BITS >> e) as u32;
    let delta = y_base - y_next;
    y_base - (delta as u64 * frac as u64 >> FRAC_BITS) as u32
}

/// One Newton-Raphson step for `y ≈ 1/sqrt(x)`: `y' = y (3 - x y²) / 2`.
///
/// `y` must not exceed [`ONE`], which keeps `x y²` inside 64 bits.  Every
/// interpolated or refined estimate satisfies that, since the step never
/// lands above the true root.  An estimate so high that `x y² > 3` has no
/// positive successor and collapses to zero.
pub fn newton_step(y: Q16, x: u32) -> Q16 {
    debug_assert!(y <= ONE, "y={y}");
    // Q32.
    let y2 = y as u64 * y as u64;
    let term = (3u64 << 32).saturating_sub(x as u64 * y2);
    // Q16 * Q32 = Q48, back to Q16 and halved in one shift.
    (y as u64 * term >> 33) as Q16
}

/// Approximate `2^16 / sqrt(x)` for raw `x`.
///
/// `x == 0` saturates to `u32::MAX`; treat that as a degenerate input, not
/// a value.
pub fn reciprocal_sqrt_q16(x: u32) -> Q16 {
    if x == 0 {
        return Q16::MAX;
    }
    let mut y = interpolate(x, exponent(x));
    for _ in 0..NEWTON_STEPS {
        y = newton_step(y, x);
    }
    y
}

#[cfg(test)]
fn ideal(x: u32) -> f64 {
    ONE as f64 / (x as f64).sqrt()
}

#[cfg(test)]
fn rel_error(x: u32) -> f64 {
    let r = reciprocal_sqrt_q16(x) as f64;
    (r * r * x as f64 / 4294967296.0 - 1.0).abs()
}

#[test]
fn seed_table() {
    for (e, &s) in SEED.iter().enumerate() {
        let want = ideal(1 << e);
        assert!((s as f64 - want).abs() < 1.0, "e={e} seed={s} want={want}");
    }
}

#[test]
fn interpolate_bucket_ends() {
    // The bottom of every bucket lands exactly on its seed.
    for e in 0..32 {
        assert_eq!(interpolate(1 << e, e), SEED[e as usize], "e={e}");
    }
    assert_eq!(interpolate(3, 1), 39555);
    assert_eq!(interpolate(6, 2), 27969);
    assert_eq!(interpolate(1536, 10), 1748);
    assert_eq!(interpolate(u32::MAX, 31), 1);
    // Never above the bucket's seed, never below the next.
    for x in 1 ..= 1 << 16 {
        let e = exponent(x);
        let y = interpolate(x, e);
        assert!(y <= SEED[e as usize] && y >= SEED[e as usize + 1], "x={x}");
    }
}

#[test]
fn newton() {
    // Exact roots are fixed points.
    assert_eq!(newton_step(ONE, 1), ONE);
    assert_eq!(newton_step(16384, 16), 16384);
    assert_eq!(newton_step(46341, 2), 46340);
    assert_eq!(newton_step(39555, 3), 37718);
    assert_eq!(newton_step(1, 1), 1);
    // 1.0 is far too high for 1/sqrt(4).
    assert_eq!(newton_step(ONE, 4), 0);
}

#[test]
fn refinement_never_overshoots() {
    // Both steps must see x y² <= 3, so the saturating subtraction in
    // newton_step never changes a result.
    let check = |x: u32| {
        let mut y = interpolate(x, exponent(x));
        for step in 0..NEWTON_STEPS {
            let y2 = y as u64 * y as u64;
            assert!(x as u64 * y2 <= 3 << 32, "x={x} step={step} y={y}");
            y = newton_step(y, x);
        }
        assert_eq!(y, reciprocal_sqrt_q16(x));
    };
    for e in 0..32 {
        let bottom = 1u32 << e;
        check(bottom);
        check(bottom + 1);
        check(bottom.wrapping_sub(1).max(1));
        check(bottom | bottom - 1);
    }
    let mut x = 1u32;
    while let Some(next) = x.checked_add(4099) {
        check(x);
        x = next;
    }
    check(u32::MAX);
}

#[test]
fn special_values() {
    assert_eq!(reciprocal_sqrt_q16(0), u32::MAX);
    assert_eq!(reciprocal_sqrt_q16(1), ONE);
    assert_eq!(reciprocal_sqrt_q16(2), 46340);
    assert_eq!(reciprocal_sqrt_q16(5), 29308);
    assert_eq!(reciprocal_sqrt_q16(16), 16384);
    assert_eq!(reciprocal_sqrt_q16(1000000), 65);
    assert_eq!(reciprocal_sqrt_q16(u32::MAX), 1);
}

#[test]
fn powers_of_four() {
    for k in 0..16 {
        assert_eq!(reciprocal_sqrt_q16(1 << 2 * k), ONE >> k, "k={k}");
    }
}

#[test]
fn monotonic() {
    let mut prev = reciprocal_sqrt_q16(1);
    for x in 2 ..= 1 << 20 {
        let r = reciprocal_sqrt_q16(x);
        assert!(r <= prev + 1, "x={x} {r} > {prev}");
        assert!(reciprocal_sqrt_q16(4 * x) < r, "x={x}");
        prev = r;
    }
    for e in 0..31 {
        assert!(reciprocal_sqrt_q16(2 << e) <= reciprocal_sqrt_q16(1 << e));
    }
}

#[test]
fn accuracy() {
    for x in 1 .. 1024 {
        assert!(rel_error(x) < 0.001, "x={x} err={}", rel_error(x));
    }
    for x in 1024 .. 65536 {
        assert!(rel_error(x) < 0.008, "x={x} err={}", rel_error(x));
    }
    // Beyond that the Q16 result is only a few bits wide; bound it absolutely.
    let mut x = 1u32;
    while let Some(next) = x.checked_add(12345) {
        let r = reciprocal_sqrt_q16(x) as f64;
        assert!((r - ideal(x)).abs() < 2.0, "x={x} r={r}");
        x = next;
    }
}
