//! Build time configuration of the demo.
//!
//! * `RSQRT_DEMO_INPUTS` - comma separated u32 values to take the reciprocal
//!   square root of.  Default `1,5,16,1000000`.
//! * `RSQRT_DEMO_VECTOR` - exactly three comma separated i32 components for
//!   the distance line.  Default `1,2,3`.
//!
//! Both are parsed during const evaluation, so a malformed value fails the
//! build rather than the run.

const INPUTS: &str = match option_env!("RSQRT_DEMO_INPUTS") {
    Some(s) => s,
    None => "1,5,16,1000000",
};

const VECTOR: &str = match option_env!("RSQRT_DEMO_VECTOR") {
    Some(s) => s,
    None => "1,2,3",
};

pub const DEMO_INPUTS: [u32; list_len(INPUTS)] =
    to_u32::<{list_len(INPUTS)}>(parse_list(INPUTS));
pub const DEMO_VECTOR: [i32; 3] = to_i32(parse_list(VECTOR));

/// Number of comma separated items in `s`.
pub const fn list_len(s: &str) -> usize {
    let mut iter = konst::string::chars(s);
    let mut len = 1;
    while let Some((c, i)) = iter.next() {
        iter = i;
        if c == ',' {
            len += 1;
        }
    }
    len
}

/// Parse exactly `N` comma separated decimal integers, each optionally
/// negative.  Spaces are ignored.
pub const fn parse_list<const N: usize>(s: &str) -> [i64; N] {
    let mut result = [0; N];
    let mut iter = konst::string::chars(s);
    let mut index = 0;
    let mut value: i64 = 0;
    let mut negative = false;
    let mut digits = 0;
    while let Some((c, i)) = iter.next() {
        iter = i;
        match c {
            '0' ..= '9' => {
                value = value * 10 + (c as u32 - '0' as u32) as i64;
                assert!(value <= 1 << 40, "number too large");
                digits += 1;
            }
            '-' if digits == 0 && !negative => negative = true,
            ' ' => (),
            ',' => {
                assert!(index < N, "too many items");
                result[index] = finish(value, negative, digits);
                index += 1;
                value = 0;
                negative = false;
                digits = 0;
            }
            _ => panic!("unexpected character"),
        }
    }
    assert!(index + 1 == N, "wrong number of items");
    result[index] = finish(value, negative, digits);
    result
}

const fn finish(value: i64, negative: bool, digits: u32) -> i64 {
    assert!(digits != 0, "empty item");
    if negative {-value} else {value}
}

const fn to_u32<const N: usize>(list: [i64; N]) -> [u32; N] {
    let mut result = [0; N];
    let mut i = 0;
    while i < N {
        assert!(list[i] >= 0 && list[i] <= u32::MAX as i64, "out of u32 range");
        result[i] = list[i] as u32;
        i += 1;
    }
    result
}

const fn to_i32<const N: usize>(list: [i64; N]) -> [i32; N] {
    let mut result = [0; N];
    let mut i = 0;
    while i < N {
        assert!(list[i] >= i32::MIN as i64 && list[i] <= i32::MAX as i64,
                "out of i32 range");
        result[i] = list[i] as i32;
        i += 1;
    }
    result
}

#[test]
fn parse() {
    assert_eq!(list_len("1,5,16,1000000"), 4);
    assert_eq!(list_len("7"), 1);
    assert_eq!(parse_list::<4>("1,5,16,1000000"), [1, 5, 16, 1000000]);
    assert_eq!(parse_list::<3>(" -1, 2 ,-3"), [-1, 2, -3]);
    assert_eq!(to_u32(parse_list::<1>("4294967295")), [u32::MAX]);
    assert_eq!(to_i32(parse_list::<2>("-2147483648,2147483647")),
               [i32::MIN, i32::MAX]);
}

#[test]
#[should_panic]
fn parse_too_few() {
    parse_list::<3>("1,2");
}

#[test]
#[should_panic]
fn parse_bad_char() {
    parse_list::<2>("1,x");
}

#[test]
#[should_panic]
fn parse_empty_item() {
    parse_list::<3>("1,,2");
}
