//! Human-readable order numbers of the form `ORD-YYYYMMDD-NNNN`.
//!
//! The date is the UTC creation date and `NNNN` a random value in
//! `1000..=9999`. Numbers are for display and are not unique.

use jiff::Timestamp;
use rand::Rng;

const PREFIX: &str = "ORD";

const SEQUENCE_RANGE: std::ops::RangeInclusive<u16> = 1000..=9999;

/// Generate an order number for an order created at `at`.
#[must_use]
pub fn generate(at: Timestamp) -> String {
    let sequence = rand::thread_rng().gen_range(SEQUENCE_RANGE);

    format_number(at, sequence)
}

/// Render an order number from its parts.
#[must_use]
pub fn format_number(at: Timestamp, sequence: u16) -> String {
    format!("{PREFIX}-{}-{sequence:04}", at.strftime("%Y%m%d"))
}

/// Whether `value` has the shape of an order number.
#[must_use]
pub fn is_well_formed(value: &str) -> bool {
    let mut parts = value.split('-');

    let (Some(prefix), Some(date), Some(sequence), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == PREFIX
        && date.len() == 8
        && date.bytes().all(|b| b.is_ascii_digit())
        && sequence
            .parse::<u16>()
            .is_ok_and(|n| SEQUENCE_RANGE.contains(&n) && sequence.len() == 4)
}
