//! EAN-13 check digit computation

use crate::constants::EAN13_PAYLOAD_LENGTH;
use crate::{Error, Result};

/// Compute the EAN-13 check digit for a 12-digit payload.
///
/// Digits at even indices carry weight 1, digits at odd indices weight 3.
/// The check digit is the amount needed to lift the weighted sum to the
/// next multiple of 10 (0 when the sum already is one).
///
/// The payload must hold exactly 12 digit values in the range 0-9; anything
/// else is a caller bug, not a data error, and surfaces as
/// [`Error::ChecksumPayload`].
pub fn check_digit(payload: &[u8]) -> Result<u8> {
    if payload.len() != EAN13_PAYLOAD_LENGTH {
        return Err(Error::checksum_payload(EAN13_PAYLOAD_LENGTH, payload.len()));
    }

    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(index, &digit)| {
            let weight = if index % 2 == 0 { 1 } else { 3 };
            u32::from(digit) * weight
        })
        .sum();

    let remainder = sum % 10;
    if remainder == 0 {
        Ok(0)
    } else {
        Ok((10 - remainder) as u8)
    }
}
