// SPDX-FileCopyrightText: 2025 Hashscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-point conversions and pricing arithmetic for the Hash token.
//!
//! The token's base unit (nhash) is 10^-9 of its display unit (hash). All
//! arithmetic here is exact decimal via [`BigDecimal`], never floating
//! point: the results feed financial reporting where rounding drift is
//! unacceptable. Intermediate divisions round half-up at 10
//! decimal digits; the final per-unit price truncates (floor) at 3 digits,
//! biasing displayed prices slightly downward. That asymmetry is a
//! deliberate conservative-reporting choice and must be preserved.
//!
//! All functions are pure and total for finite numeric input. Negative
//! volumes and non-finite amounts are caller contract violations, not
//! conditions handled here.

use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::proto::NavEvent;

/// nhash per hash.
pub const UTILITY_TOKEN_BASE_MULTIPLIER: i64 = 1_000_000_000;
/// micro-USD per USD.
const MICRO_USD_PER_USD: i64 = 1_000_000;
/// mills per USD, the unit of `usd`-denominated NAV prices.
const MILLS_PER_USD: i64 = 1_000;
/// Price denom of mill-denominated NAV events.
pub const USD_DENOM: &str = "usd";

/// Intermediate precision, in decimal digits.
const INTERMEDIATE_SCALE: i64 = 10;
/// Displayed per-unit price precision, in decimal digits.
const PRICE_SCALE: i64 = 3;

/// Convert an nhash volume to hash units.
///
/// Zero converts to exact zero; anything else divides by 1,000,000,000 at
/// 10 decimal digits, half-up.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use hashscan::pricing::units_from_nano;
///
/// assert_eq!(units_from_nano(0), BigDecimal::from(0));
/// assert_eq!(units_from_nano(1_000_000_000_000).to_string(), "1000.0000000000");
/// ```
pub fn units_from_nano(volume_nhash: i64) -> BigDecimal {
    if volume_nhash == 0 {
        return BigDecimal::zero();
    }
    (BigDecimal::from(volume_nhash) / BigDecimal::from(UTILITY_TOKEN_BASE_MULTIPLIER))
        .with_scale_round(INTERMEDIATE_SCALE, RoundingMode::HalfUp)
}

/// Price per hash unit from a total micro-USD price and an nhash volume.
///
/// Zero volume yields exact zero (division-by-zero guard, not an error).
/// Otherwise the micro-USD total converts to whole USD at 10 digits
/// half-up, divides by the hash volume at 10 digits half-up, and the
/// quotient truncates to exactly 3 decimal digits (floor, not half-up).
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use hashscan::pricing::price_per_unit_from_micro_usd;
///
/// // $4,800 over 300,000 hash
/// let price = price_per_unit_from_micro_usd(4_800_000_000, 300_000_000_000_000);
/// assert_eq!(price, "0.016".parse::<BigDecimal>().unwrap());
///
/// assert_eq!(price_per_unit_from_micro_usd(12_345, 0), BigDecimal::from(0));
/// ```
pub fn price_per_unit_from_micro_usd(price_amount_micros: i64, volume_nhash: i64) -> BigDecimal {
    if volume_nhash == 0 {
        return BigDecimal::zero();
    }
    let volume_hash = units_from_nano(volume_nhash);
    let price_usd = (BigDecimal::from(price_amount_micros) / BigDecimal::from(MICRO_USD_PER_USD))
        .with_scale_round(INTERMEDIATE_SCALE, RoundingMode::HalfUp);
    let price_per_hash =
        (price_usd / volume_hash).with_scale_round(INTERMEDIATE_SCALE, RoundingMode::HalfUp);
    price_per_hash.with_scale_round(PRICE_SCALE, RoundingMode::Floor)
}

/// USD price per unit for a mill-denominated NAV event.
///
/// NAV events priced in `usd` carry `price_amount` in dollar mills
/// (1234 = $1.234). A non-`usd` price denom or zero volume yields exact
/// zero; otherwise the result truncates at 3 decimal digits.
pub fn nav_usd_price_per_unit(event: &NavEvent) -> BigDecimal {
    if event.price_denom != USD_DENOM {
        return BigDecimal::zero();
    }
    if event.volume == 0 {
        return BigDecimal::zero();
    }
    let price_usd = BigDecimal::from(event.price_amount) / BigDecimal::from(MILLS_PER_USD);
    (price_usd / BigDecimal::from(event.volume)).with_scale_round(PRICE_SCALE, RoundingMode::Down)
}

/// Render a value with trailing zeros stripped.
pub fn to_display_string(value: &BigDecimal) -> String {
    value.normalized().to_string()
}

/// Render a value at a fixed scale, half-even, trailing zeros stripped
/// first.
pub fn to_display_string_with_scale(value: &BigDecimal, scale: i64) -> String {
    value
        .normalized()
        .with_scale_round(scale, RoundingMode::HalfEven)
        .to_string()
}

/// Relative change from `orig` to `new`, in percent, half-even at the
/// original value's scale. A zero original yields exact zero.
pub fn percent_change(new: &BigDecimal, orig: &BigDecimal) -> BigDecimal {
    if orig.is_zero() {
        return BigDecimal::zero();
    }
    let scale = orig.fractional_digit_count().max(0);
    ((new - orig) / orig).with_scale_round(scale, RoundingMode::HalfEven)
        * BigDecimal::from(100)
}
