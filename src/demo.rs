//! The demonstration run: a few reciprocal square roots and one distance.

use crate::emit::Emit;
use crate::{config, distance3_checked, reciprocal_sqrt_q16, Magnitude};

pub fn run(out: &mut impl Emit) {
    let [x, y, z] = config::DEMO_VECTOR;
    if report(out, &config::DEMO_INPUTS, config::DEMO_VECTOR).is_saturated() {
        dbgln!("warning: |({x}, {y}, {z})|² exceeds 32 bits, distance saturated");
    }
}

/// Write the demo text and return the distance it printed.
pub fn report(out: &mut impl Emit, inputs: &[u32], [x, y, z]: [i32; 3])
        -> Magnitude {
    let distance = distance3_checked(x, y, z);
    out.emit_text("===== Fast Reciprocal Square Root Demo =====\n");

    for &n in inputs {
        out.emit_text("fast_rsqrt(");
        out.emit_uint(n);
        out.emit_text(") = ");
        out.emit_uint(reciprocal_sqrt_q16(n));
        out.emit_text("\n");
    }

    out.emit_text("Distance of (");
    out.emit_int(x);
    out.emit_text(", ");
    out.emit_int(y);
    out.emit_text(", ");
    out.emit_int(z);
    out.emit_text(") = ");
    out.emit_uint(distance.value());
    out.emit_text("\n");
    distance
}

#[test]
fn default_report() {
    let mut s = String::new();
    let d = report(&mut s, &[1, 5, 16, 1000000], [1, 2, 3]);
    assert_eq!(d, Magnitude::InRange(3));
    assert_eq!(s, "\
===== Fast Reciprocal Square Root Demo =====
fast_rsqrt(1) = 65536
fast_rsqrt(5) = 29308
fast_rsqrt(16) = 16384
fast_rsqrt(1000000) = 65
Distance of (1, 2, 3) = 3
");
}

#[test]
fn signed_and_degenerate() {
    let mut s = String::new();
    report(&mut s, &[0], [-3, 4, 0]);
    assert_eq!(s, "\
===== Fast Reciprocal Square Root Demo =====
fast_rsqrt(0) = 4294967295
Distance of (-3, 4, 0) = 4
");
}

#[test]
fn saturated_report() {
    let mut s = String::new();
    let d = report(&mut s, &[], [100000, 100000, 100000]);
    assert_eq!(d, Magnitude::Saturated(65535));
    assert!(s.ends_with("Distance of (100000, 100000, 100000) = 65535\n"));
}
