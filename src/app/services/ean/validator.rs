//! GTIN/EAN code validation with padding normalization

use std::borrow::Cow;

use super::checksum;
use crate::constants::{EAN13_LENGTH, EAN13_PAYLOAD_LENGTH, MIN_CODE_LENGTH};

/// Decide whether a candidate string represents a valid GTIN/EAN code.
///
/// Normalization rules, applied in order:
/// 1. shorter than the minimum GTIN form (8 characters) - invalid outright;
/// 2. shorter than 13 characters - left-pad with `'0'` to 13;
/// 3. longer than 13 characters - valid only if every excess leading
///    character is `'0'`; the last 13 characters are kept;
/// 4. the normalized 13 characters must all be decimal digits;
/// 5. the 13th digit must equal the checksum of the first 12.
///
/// Works on bytes throughout, so multi-byte or malformed UTF-8 content can
/// never split a character boundary; it simply fails the digit check.
pub fn is_valid(code: &str) -> bool {
    let bytes = code.as_bytes();

    if bytes.len() < MIN_CODE_LENGTH {
        return false;
    }

    // Single bounded normalization pass; padding and trimming both land on
    // exactly 13 bytes, so no revalidation loop is needed.
    let normalized: Cow<'_, [u8]> = if bytes.len() < EAN13_LENGTH {
        let mut padded = vec![b'0'; EAN13_LENGTH - bytes.len()];
        padded.extend_from_slice(bytes);
        Cow::Owned(padded)
    } else if bytes.len() > EAN13_LENGTH {
        let (excess, tail) = bytes.split_at(bytes.len() - EAN13_LENGTH);
        if excess.iter().any(|&b| b != b'0') {
            return false;
        }
        Cow::Borrowed(tail)
    } else {
        Cow::Borrowed(bytes)
    };

    if !normalized.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let digits: Vec<u8> = normalized.iter().map(|b| b - b'0').collect();
    let (payload, check) = digits.split_at(EAN13_PAYLOAD_LENGTH);

    let expected = checksum::check_digit(payload)
        .expect("normalized payload is always exactly 12 digits");

    expected == check[0]
}
