//! Bit scanning for the exponent bucket.

/// Count leading zeros by binary search over halves.  Returns 32 for 0.
pub const fn leading_zeros(mut x: u32) -> u32 {
    if x == 0 {
        return 32;
    }
    let mut n = 0;
    if x >> 16 == 0 { n += 16; x <<= 16; }
    if x >> 24 == 0 { n += 8;  x <<= 8;  }
    if x >> 28 == 0 { n += 4;  x <<= 4;  }
    if x >> 30 == 0 { n += 2;  x <<= 2;  }
    if x >> 31 == 0 { n += 1; }
    n
}

/// Exponent bucket of raw `x`: the bit position of its top set bit, so that
/// `2^e <= x < 2^(e+1)`.  `x` must be non-zero.
#[inline]
pub const fn exponent(x: u32) -> u32 {
    debug_assert!(x != 0);
    31 - leading_zeros(x)
}

#[test]
fn test_leading_zeros() {
    for x in 0 ..= 1 << 16 {
        assert_eq!(leading_zeros(x), x.leading_zeros(), "x={x}");
        let y = x << 16 | x;
        assert_eq!(leading_zeros(y), y.leading_zeros(), "y={y:#x}");
    }
    for i in 0..32 {
        let bit = 1u32 << i;
        assert_eq!(leading_zeros(bit), 31 - i);
        assert_eq!(leading_zeros(bit | bit - 1), 31 - i);
        assert_eq!(leading_zeros(!0 >> i), i);
    }
}

#[test]
fn test_exponent_bucket() {
    let check = |x: u32| {
        let e = exponent(x);
        assert!(1 << e <= x, "x={x} e={e}");
        assert!(e == 31 || x < 2 << e, "x={x} e={e}");
    };
    for x in 1 ..= 1 << 20 {
        check(x);
    }
    for i in 0..32 {
        check(1 << i);
        check(!0 >> i);
    }
    assert_eq!(exponent(1), 0);
    assert_eq!(exponent(1000000), 19);
    assert_eq!(exponent(u32::MAX), 31);
    const E: u32 = exponent(1 << 20);
    assert_eq!(E, 20);
}
