use arrayvec::ArrayString;

/// Longest u32 in decimal.
pub const MAX_DIGITS: usize = 10;

/// All ten decimal digits of `v` as packed BCD, one nibble per digit, most
/// significant digit in bits 36..40.
pub const fn to_bcd(mut v: u32) -> u64 {
    // One in the low bit of each of the ten digit nibbles.
    const POS: u64 = 0x11_1111_1111;
    let mut bcd = 0u64;
    let mut remain = 32;
    // Leading zero bits only double zero.
    while remain > 0 && v >> 31 == 0 {
        v <<= 1;
        remain -= 1;
    }
    while remain > 0 {
        // Digits >= 5 carry into bit 3 once 3 is added; double dabble adds
        // 3 to those before the shift, i.e. 6 after it.
        let carry = bcd + 3 * POS & POS * 8;
        bcd = 2 * bcd + (carry >> 1) + (carry >> 2) + (v >> 31) as u64;
        v <<= 1;
        remain -= 1;
    }
    bcd
}

/// Decimal digits of `v`, no leading zeros, no sign or grouping.  Zero is
/// `"0"`.
pub fn format_u32(v: u32) -> ArrayString<MAX_DIGITS> {
    let bcd = to_bcd(v);
    // Always at least one digit.
    let digits = 16 - (bcd.leading_zeros() / 4).min(15);
    let mut result = ArrayString::new();
    for i in (0..digits).rev() {
        result.push((b'0' + (bcd >> 4 * i & 15) as u8) as char);
    }
    result
}

#[test]
fn bcd() {
    assert_eq!(to_bcd(0), 0);
    assert_eq!(to_bcd(9), 0x9);
    assert_eq!(to_bcd(99999999), 0x99999999);
    assert_eq!(to_bcd(100000000), 0x100000000);
    assert_eq!(to_bcd(u32::MAX), 0x42_9496_7295);
    for i in 0..65536 {
        assert_eq!(format!("{:x}", to_bcd(i)), format!("{i}"));
    }
}

#[test]
fn digits() {
    assert_eq!(format_u32(0).as_str(), "0");
    assert_eq!(format_u32(7).as_str(), "7");
    assert_eq!(format_u32(10).as_str(), "10");
    assert_eq!(format_u32(65536).as_str(), "65536");
    assert_eq!(format_u32(99999999).as_str(), "99999999");
    assert_eq!(format_u32(100000000).as_str(), "100000000");
    assert_eq!(format_u32(1000000007).as_str(), "1000000007");
    assert_eq!(format_u32(u32::MAX).as_str(), "4294967295");
}

#[test]
fn matches_format() {
    for i in 0 ..= 1 << 17 {
        assert_eq!(format_u32(i).as_str(), format!("{i}"));
        let j = i.wrapping_mul(0x9e3779b9);
        assert_eq!(format_u32(j).as_str(), format!("{j}"));
        assert_eq!(format!("{:x}", to_bcd(j)), format!("{j}"));
    }
    let mut p = 1u32;
    while let Some(next) = p.checked_mul(10) {
        for v in [p - 1, p, p + 1, next - 1] {
            assert_eq!(format_u32(v).as_str(), format!("{v}"));
        }
        p = next;
    }
}
