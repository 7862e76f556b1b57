//! Numeric leaf codecs: binary64 floats and arbitrary-precision integers.
//!
//! Both encodings are designed so that code-point comparison of the encoded
//! strings matches numeric comparison of the values.
//!
//! ## Binary64
//!
//! A number is encoded as the base-16 rendering of its IEEE-754 bit pattern.
//! For negative values all 64 bits are complemented before rendering; for
//! non-negative values only the sign bit is flipped. Negatives therefore sort
//! before positives, and negatives sort by descending bit magnitude, which is
//! ascending numeric order.
//!
//! ## Big integers
//!
//! A variant of Elias delta coding over decimal digits: a unary prefix for
//! the width of the digit count, the digit count itself, a separating colon,
//! then the digits. The unary filler sorts after all decimal digits for
//! non-negative values (`~`) and before them for negatives (`#`), and every
//! digit field of a negative value is stored as its ten's complement so that
//! negatives of the same scale sort by descending absolute value.

use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;

/// Every NaN payload collapses to this bit pattern before encoding, so all
/// NaNs share one canonical key.
const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// Terminator between the digit-count field and the digit field.
const DIGIT_SEPARATOR: u8 = b':';

/// Encode a binary64 number as `f` + 16 lowercase hex digits.
///
/// Negative zero is normalized to positive zero, and any NaN payload is
/// replaced by the canonical NaN bit pattern, so both have exactly one
/// encoding.
pub(crate) fn encode_number(n: f64) -> String {
    // -0.0 == 0.0, so this folds negative zero onto positive zero.
    let n = if n == 0.0 { 0.0 } else { n };
    let bits = if n.is_nan() {
        CANONICAL_NAN_BITS ^ SIGN_BIT
    } else if n < 0.0 {
        n.to_bits() ^ u64::MAX
    } else {
        n.to_bits() ^ SIGN_BIT
    };
    format!("f{bits:016x}")
}

/// Decode a binary64 number from its full encoding (tag included).
pub(crate) fn decode_number(encoded: &str) -> Result<f64> {
    let hex = encoded
        .strip_prefix('f')
        .ok_or_else(|| Error::malformed(format!("encoded number expected: {encoded:?}")))?;
    if hex.len() != 16 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::malformed(format!(
            "expected 16 hex digits after number tag: {encoded:?}"
        )));
    }
    let bits = u64::from_str_radix(hex, 16)
        .map_err(|e| Error::malformed(format!("bad number payload {encoded:?}: {e}")))?;
    // Sign bit set means the sign-flip transform was applied, so the
    // original value was non-negative; otherwise undo the full complement.
    let bits = if bits & SIGN_BIT != 0 {
        bits ^ SIGN_BIT
    } else {
        bits ^ u64::MAX
    };
    let n = f64::from_bits(bits);
    if n == 0.0 && n.is_sign_negative() {
        // The encoder normalizes -0.0 away, so no valid key contains it.
        return Err(Error::malformed(format!(
            "unexpected negative zero: {encoded:?}"
        )));
    }
    Ok(n)
}

/// Encode an arbitrary-precision integer as `p`/`n` + delta-coded digits.
pub(crate) fn encode_bigint(n: &BigInt) -> String {
    let digits = n.magnitude().to_str_radix(10);
    let n_digits = digits.len();
    let l_digits = n_digits.to_string().len();
    if n.sign() == Sign::Minus {
        // Both count and digits are stored as ten's complements so larger
        // magnitudes sort first within the negative range.
        let count = 10u128.pow(l_digits as u32) - n_digits as u128;
        let complement = BigUint::from(10u32).pow(n_digits as u32) - n.magnitude();
        let complement_digits = complement.to_str_radix(10);
        format!(
            "n{}{:0l$}:{:0>n$}",
            "#".repeat(l_digits - 1),
            count,
            complement_digits,
            l = l_digits,
            n = n_digits,
        )
    } else {
        format!("p{}{}:{}", "~".repeat(l_digits - 1), n_digits, digits)
    }
}

/// Decode an arbitrary-precision integer from its full encoding.
pub(crate) fn decode_bigint(encoded: &str) -> Result<BigInt> {
    let bytes = encoded.as_bytes();
    let (filler, negative) = match bytes.first() {
        Some(&b'p') => (b'~', false),
        Some(&b'n') => (b'#', true),
        _ => {
            return Err(Error::malformed(format!(
                "encoded bigint expected: {encoded:?}"
            )))
        }
    };
    let rest = &bytes[1..];

    // The unary prefix length determines the width of the digit-count field.
    let filler_count = rest.iter().take_while(|&&b| b == filler).count();
    let l_digits = filler_count + 1;
    let rest = &rest[filler_count..];

    // A count field this wide would declare more digits than any input can
    // hold; it also keeps the arithmetic below inside u128.
    if l_digits > 38 {
        return Err(Error::malformed(format!(
            "digit-count width out of range: {encoded:?}"
        )));
    }
    if rest.len() < l_digits {
        return Err(Error::malformed(format!(
            "truncated digit count: {encoded:?}"
        )));
    }
    let count_field = &rest[..l_digits];
    if !count_field.iter().all(u8::is_ascii_digit) {
        return Err(Error::malformed(format!(
            "decimal digit count expected: {encoded:?}"
        )));
    }
    let raw_count = count_field
        .iter()
        .fold(0u128, |acc, &b| acc * 10 + u128::from(b - b'0'));
    let n_digits = if negative {
        10u128.pow(l_digits as u32) - raw_count
    } else {
        raw_count
    };
    let rest = &rest[l_digits..];

    let rest = match rest.split_first() {
        Some((&DIGIT_SEPARATOR, rest)) => rest,
        _ => {
            return Err(Error::malformed(format!(
                "separator expected in bigint: {encoded:?}"
            )))
        }
    };

    if rest.len() as u128 != n_digits {
        return Err(Error::malformed(format!(
            "expected {n_digits} digits in bigint payload: {encoded:?}"
        )));
    }
    if rest.is_empty() || !rest.iter().all(u8::is_ascii_digit) {
        return Err(Error::malformed(format!(
            "decimal digit sequence expected: {encoded:?}"
        )));
    }
    let magnitude = BigUint::parse_bytes(rest, 10)
        .ok_or_else(|| Error::malformed(format!("bad bigint payload: {encoded:?}")))?;

    if negative {
        let width = u32::try_from(n_digits)
            .map_err(|_| Error::malformed(format!("digit count out of range: {encoded:?}")))?;
        let base = BigUint::from(10u32).pow(width);
        Ok(-BigInt::from(base - magnitude))
    } else {
        Ok(BigInt::from(magnitude))
    }
}
