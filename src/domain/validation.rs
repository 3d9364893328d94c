//! Strict format checks for submitted receipts
//!
//! Only applied when the server runs with `RECEIPT_VALIDATION=strict`.
//! In lenient mode malformed fields are scored as zero instead.

use chrono::{NaiveDate, NaiveTime};

use super::DomainError;
use crate::models::{Item, Receipt};

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Non-empty, made of word characters, whitespace, `-` and `&`
pub fn is_valid_retailer(retailer: &str) -> bool {
    !retailer.is_empty()
        && retailer
            .chars()
            .all(|c| is_word_char(c) || c.is_whitespace() || c == '-' || c == '&')
}

/// Non-empty, made of word characters, whitespace and `-`
pub fn is_valid_short_description(description: &str) -> bool {
    !description.is_empty()
        && description
            .chars()
            .all(|c| is_word_char(c) || c.is_whitespace() || c == '-')
}

/// Digits, a dot, and exactly two digits of cents
pub fn is_valid_amount(amount: &str) -> bool {
    match amount.split_once('.') {
        Some((dollars, cents)) => {
            !dollars.is_empty()
                && dollars.chars().all(|c| c.is_ascii_digit())
                && cents.len() == 2
                && cents.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// `YYYY-MM-DD` naming a real calendar date
pub fn is_valid_purchase_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// `HH:MM` naming a real clock time
pub fn is_valid_purchase_time(time: &str) -> bool {
    time.len() == 5 && NaiveTime::parse_from_str(time, "%H:%M").is_ok()
}

fn validate_items(items: &[Item]) -> Result<(), DomainError> {
    if items.is_empty() {
        return Err(DomainError::Validation("Items must be a non-empty list".to_string()));
    }

    for item in items {
        if !is_valid_short_description(&item.short_description) {
            return Err(DomainError::Validation(
                "Invalid shortDescription format in items".to_string(),
            ));
        }
        if !is_valid_amount(&item.price) {
            return Err(DomainError::Validation("Invalid price format in items".to_string()));
        }
    }

    Ok(())
}

/// Check every receipt field, reporting the first one that is malformed
pub fn validate_receipt(receipt: &Receipt) -> Result<(), DomainError> {
    if !is_valid_retailer(&receipt.retailer) {
        return Err(DomainError::Validation("Invalid retailer format".to_string()));
    }
    if !is_valid_purchase_date(&receipt.purchase_date) {
        return Err(DomainError::Validation("Invalid purchaseDate format".to_string()));
    }
    if !is_valid_purchase_time(&receipt.purchase_time) {
        return Err(DomainError::Validation("Invalid purchaseTime format".to_string()));
    }
    if !is_valid_amount(&receipt.total) {
        return Err(DomainError::Validation("Invalid total format".to_string()));
    }

    validate_items(&receipt.items)
}
