//! Individual scoring rules
//!
//! Every rule is total: a field that fails to parse contributes 0 points
//! instead of failing the receipt.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Item;

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

const QUARTER: Decimal = dec!(0.25);
const DESCRIPTION_PRICE_MULTIPLIER: Decimal = dec!(0.2);

/// Afternoon bonus window, by hour: [14:00, 16:00)
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

/// Parse a money amount such as "35.35"
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    raw.parse::<Decimal>().ok()
}

/// One point for every ASCII alphanumeric character in the retailer name
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points if the total has no cents, 25 more if it is a multiple of 0.25
pub fn total_points(total: &str) -> u64 {
    let Some(value) = parse_amount(total) else {
        return 0;
    };

    let mut points = 0;
    if value.fract().is_zero() {
        points += ROUND_TOTAL_POINTS;
    }
    if (value % QUARTER).is_zero() {
        points += QUARTER_MULTIPLE_POINTS;
    }
    points
}

/// 5 points for every two items
pub fn item_count_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// Points for a single item whose trimmed description length is a multiple of 3
///
/// The price is multiplied by 0.2 and rounded up. An empty description has
/// length 0 and therefore qualifies.
pub fn item_description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length % 3 != 0 {
        return 0;
    }

    parse_amount(&item.price)
        .and_then(|price| price.checked_mul(DESCRIPTION_PRICE_MULTIPLIER))
        .map(|value| value.ceil())
        .filter(|value| value.is_sign_positive())
        .map(|value| value.to_u64().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Sum of `item_description_points` over all items
pub fn item_descriptions_points(items: &[Item]) -> u64 {
    items
        .iter()
        .map(item_description_points)
        .fold(0, u64::saturating_add)
}

/// 6 points if the day of the purchase date is odd
pub fn purchase_date_points(purchase_date: &str) -> u64 {
    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// 10 points if the purchase hour is 14 or 15; minutes are ignored
pub fn purchase_time_points(purchase_time: &str) -> u64 {
    match NaiveTime::parse_from_str(purchase_time, "%H:%M") {
        Ok(time) if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour()) => {
            AFTERNOON_POINTS
        }
        _ => 0,
    }
}
