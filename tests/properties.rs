use std::cmp::Ordering;

use fixed_bignum::bignum::{BignumError, Bn64};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

mod helpers;
use helpers::*;

fn native_powmod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut b = base as u128 % m;
    let mut out = 1 % m;
    while exp != 0 {
        if exp & 1 == 1 {
            out = out * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    out as u64
}

#[quickcheck]
fn prop_add_matches_native(a: u64, b: u64) -> bool {
    let got = bn(a).checked_add(&bn(b));
    match a.checked_add(b) {
        Some(sum) => got == Ok(bn(sum)),
        None => got == Err(BignumError::Overflow),
    }
}

#[quickcheck]
fn prop_add_commutes_and_sub_undoes(a: u64, b: u64) -> TestResult {
    if a.checked_add(b).is_none() {
        return TestResult::discard();
    }

    let ab = bn(a).checked_add(&bn(b)).unwrap();
    let ba = bn(b).checked_add(&bn(a)).unwrap();
    TestResult::from_bool(ab == ba && ab.checked_sub_strict(&bn(b)) == Ok(bn(a)))
}

#[quickcheck]
fn prop_zero_identities(a: u64) -> bool {
    let a = bn(a);
    a.checked_add(&Bn64::ZERO) == Ok(a)
        && a.checked_sub(&Bn64::ZERO) == Ok(a)
        && a.checked_sub(&a) == Ok(Bn64::ZERO)
}

#[quickcheck]
fn prop_sub_modes_match_native(a: u64, b: u64) -> bool {
    let wrapping = bn(a).checked_sub(&bn(b)) == Ok(bn(a.wrapping_sub(b)));
    let strict = match a.checked_sub(b) {
        Some(diff) => bn(a).checked_sub_strict(&bn(b)) == Ok(bn(diff)),
        None => bn(a).checked_sub_strict(&bn(b)) == Err(BignumError::NegativeResult),
    };
    wrapping && strict
}

#[quickcheck]
fn prop_mul_matches_native(a: u64, b: u64) -> bool {
    let got = bn(a).checked_mul(&bn(b));
    match a.checked_mul(b) {
        Some(product) => got == Ok(bn(product)),
        None => got == Err(BignumError::Overflow),
    }
}

#[quickcheck]
fn prop_mul_small_matches_native(a: u32, b: u32) -> bool {
    bn(a as u64).checked_mul(&bn(b as u64)) == Ok(bn(a as u64 * b as u64))
}

#[quickcheck]
fn prop_mul_is_repeated_add(a: u8, b: u64) -> TestResult {
    if b.checked_mul(a as u64).is_none() {
        return TestResult::discard();
    }

    let mut sum = Bn64::ZERO;
    for _ in 0..a {
        sum = sum.checked_add(&bn(b)).unwrap();
    }
    TestResult::from_bool(bn(a as u64).checked_mul(&bn(b)) == Ok(sum))
}

#[quickcheck]
fn prop_div_reconstructs(a: u64, b: u64) -> TestResult {
    if b == 0 {
        return TestResult::discard();
    }

    let (q, r) = bn(a).div_rem(&bn(b)).unwrap();
    let qb = q.checked_mul(&bn(b)).unwrap();
    TestResult::from_bool(
        qb.checked_add(&r) == Ok(bn(a))
            && r.compare(&bn(b)) == Ordering::Less
            && native(&q) == a / b
            && native(&r) == a % b,
    )
}

#[quickcheck]
fn prop_div_by_zero_fails(a: u64) -> bool {
    bn(a).div_rem(&Bn64::ZERO) == Err(BignumError::DivideByZero)
        && bn(a).checked_powmod(&bn(a), &Bn64::ZERO) == Err(BignumError::DivideByZero)
}

#[quickcheck]
fn prop_byte_limbs_match_native(a: u64, b: u64) -> bool {
    let (x, y) = (B8x8::from_int(a).unwrap(), B8x8::from_int(b).unwrap());
    let as_native = |v: B8x8| v.to_u128().map(|v| v as u64);

    let add = x.checked_add(&y).ok().and_then(as_native) == a.checked_add(b);
    let sub = x.checked_sub(&y).ok().and_then(as_native) == Some(a.wrapping_sub(b));
    let mul = x.checked_mul(&y).ok().and_then(as_native) == a.checked_mul(b);
    let div = x.checked_div(&y).ok().and_then(as_native) == a.checked_div(b);
    let rem = x.checked_rem(&y).ok().and_then(as_native) == a.checked_rem(b);
    add && sub && mul && div && rem
}

#[quickcheck]
fn prop_shift_round_trip_drops_top_bit(a: u64) -> bool {
    let mut shifted = Bn64::ZERO;
    bn(a).shift_left_1(&mut shifted);
    let mut back = Bn64::ZERO;
    shifted.shift_right_1(&mut back);

    native(&shifted) == a << 1 && native(&back) == a & !(1 << 63)
}

#[quickcheck]
fn prop_shifts_in_place_match_native(a: u64) -> bool {
    let mut left = bn(a);
    left.shl1_in_place();
    let mut right = bn(a);
    right.shr1_in_place();
    native(&left) == a << 1 && native(&right) == a >> 1
}

#[quickcheck]
fn prop_powmod_matches_native(base: u64, exp: u64, modulus: u32) -> TestResult {
    if modulus == 0 {
        return TestResult::discard();
    }

    let modulus = modulus as u64;
    TestResult::from_bool(
        bn(base).checked_powmod(&bn(exp), &bn(modulus))
            == Ok(bn(native_powmod(base, exp, modulus))),
    )
}

#[quickcheck]
fn prop_set_bit_only_touches_one_bit(a: u64, index: u8, value: bool) -> bool {
    let index = index as usize % 64;
    let mut x = bn(a);
    x.set_bit(index, value).unwrap();

    let expected = if value {
        a | 1 << index
    } else {
        a & !(1 << index)
    };
    x.get_bit(index) == Ok(value) && native(&x) == expected
}

#[quickcheck]
fn prop_bit_index_out_of_range(a: u64, offset: u32) -> bool {
    let index = 64 + offset as usize;
    let err = BignumError::IndexOutOfRange { index, bits: 64 };

    let mut x = bn(a);
    x.get_bit(index) == Err(err) && x.set_bit(index, true) == Err(err) && native(&x) == a
}

#[quickcheck]
fn prop_compare_matches_native(a: u64, b: u64) -> bool {
    bn(a).compare(&bn(b)) == a.cmp(&b)
        && bn(b).compare(&bn(a)) == b.cmp(&a)
        && bn(a).compare(&bn(a)) == Ordering::Equal
}

#[quickcheck]
fn prop_compare_transitive(a: u64, b: u64, c: u64) -> TestResult {
    let (x, y, z) = (bn(a), bn(b), bn(c));
    if x.compare(&y) == Ordering::Greater || y.compare(&z) == Ordering::Greater {
        return TestResult::discard();
    }
    TestResult::from_bool(x.compare(&z) != Ordering::Greater)
}

#[quickcheck]
fn prop_load_int_round_trip(x: u128) -> bool {
    let loaded = Bn64::from_int(x);
    match u64::try_from(x) {
        Ok(small) => loaded.map(|v| native(&v)) == Ok(small),
        Err(_) => loaded == Err(BignumError::Overflow),
    }
}

#[quickcheck]
fn prop_display_parses_back(a: u64) -> bool {
    let text = bn(a).to_string();
    text == format!(
        "{:04X}_{:04X}_{:04X}_{:04X}",
        a >> 48,
        (a >> 32) & 0xFFFF,
        (a >> 16) & 0xFFFF,
        a & 0xFFFF
    ) && text.parse::<Bn64>() == Ok(bn(a))
}
