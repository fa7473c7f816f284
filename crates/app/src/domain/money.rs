//! Currency amounts

use rust_decimal::Decimal;

/// Number of fractional digits stored for every amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Largest amount a `NUMERIC(12, 2)` column holds: 9,999,999,999.99.
pub const MAX_STORABLE_AMOUNT: Decimal =
    Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, CURRENCY_SCALE);

/// Whether `amount` can be stored without rounding or overflow: between zero
/// and [`MAX_STORABLE_AMOUNT`], with at most [`CURRENCY_SCALE`] fractional
/// digits.
#[must_use]
pub fn is_storable_amount(amount: Decimal) -> bool {
    amount >= Decimal::ZERO
        && amount <= MAX_STORABLE_AMOUNT
        && amount.normalize().scale() <= CURRENCY_SCALE
}
