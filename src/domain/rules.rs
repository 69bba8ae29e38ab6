//! Receipt validation and scoring.
//!
//! A receipt arrives as an untyped JSON document. [`score`] walks an ordered
//! list of rules; each rule validates the fields it needs and returns the points
//! it awards. The first failing rule stops the walk and its [`ValidationError`]
//! is reported, so the order of [`RULES`] is also the order in which problems
//! are reported to callers.
//!
//! Amounts are handled as [`Decimal`] so checks such as "multiple of 0.25" are
//! exact.

use super::receipt::Points;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use thiserror::Error;

/// A receipt or one of its items does not match the expected schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

type Receipt = Map<String, Value>;
type Rule = fn(&Receipt) -> Result<u64, ValidationError>;

const REQUIRED_KEYS: [&str; 5] = ["retailer", "total", "items", "purchaseDate", "purchaseTime"];
const REQUIRED_ITEM_KEYS: [&str; 2] = ["shortDescription", "price"];

const ROUND_DOLLAR_BONUS: u64 = 50;
const QUARTER_MULTIPLE_BONUS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_BONUS: u64 = 6;
const AFTERNOON_BONUS: u64 = 10;

const QUARTER: Decimal = dec!(0.25);
const DESCRIPTION_PRICE_RATE: Decimal = dec!(0.2);

// Minutes since midnight, both ends excluded.
const AFTERNOON_WINDOW: (u32, u32) = (14 * 60, 16 * 60);

static RETAILER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S(.*\S)?$").expect("Invalid retailer regex pattern"));
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("Invalid amount regex pattern"));
static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-]+$").expect("Invalid description regex pattern"));
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex pattern"));
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("Invalid time regex pattern"));

/// Rules in evaluation order.
const RULES: [Rule; 7] = [
    required_keys,
    retailer_points,
    total_points,
    item_count_points,
    item_points,
    purchase_date_points,
    purchase_time_points,
];

/// Validates `receipt` and computes its points.
///
/// Pure: the same document always yields the same result.
pub fn score(receipt: &Value) -> Result<Points, ValidationError> {
    let receipt = receipt
        .as_object()
        .ok_or_else(|| ValidationError::new("The receipt must be a JSON object."))?;

    RULES
        .iter()
        .try_fold(Points::ZERO, |points, rule| -> Result<Points, ValidationError> {
            Ok(points + Points(rule(receipt)?))
        })
}

fn required_keys(receipt: &Receipt) -> Result<u64, ValidationError> {
    for key in REQUIRED_KEYS {
        field(receipt, key)?;
    }
    Ok(0)
}

/// One point per alphanumeric character in the retailer name.
fn retailer_points(receipt: &Receipt) -> Result<u64, ValidationError> {
    let retailer = field(receipt, "retailer")?;
    match retailer.as_str() {
        Some(name) if RETAILER_PATTERN.is_match(name) => {
            Ok(name.chars().filter(|c| c.is_alphanumeric()).count() as u64)
        }
        _ => Err(ValidationError::new(format!(
            "Retailer is invalid: {}",
            describe(retailer)
        ))),
    }
}

/// 50 points for a round dollar total, 25 for a multiple of 0.25.
fn total_points(receipt: &Receipt) -> Result<u64, ValidationError> {
    let total = field(receipt, "total")?;
    let amount = parse_amount(total)
        .ok_or_else(|| ValidationError::new(format!("Total is invalid: {}", describe(total))))?;

    let mut points = 0;
    if amount.fract().is_zero() {
        points += ROUND_DOLLAR_BONUS;
    }
    if (amount % QUARTER).is_zero() {
        points += QUARTER_MULTIPLE_BONUS;
    }
    Ok(points)
}

/// 5 points for every two items.
fn item_count_points(receipt: &Receipt) -> Result<u64, ValidationError> {
    let items = items(receipt)?;
    Ok((items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR)
}

/// Validates every item and awards the description-length bonus.
fn item_points(receipt: &Receipt) -> Result<u64, ValidationError> {
    let mut points: u64 = 0;

    for (index, item) in items(receipt)?.iter().enumerate() {
        let item = item.as_object().ok_or_else(|| {
            ValidationError::new(format!("Item {index} is invalid: {}", describe(item)))
        })?;

        for key in REQUIRED_ITEM_KEYS {
            if !item.contains_key(key) {
                return Err(ValidationError::new(format!(
                    "The key '{key}' is missing from item {index}."
                )));
            }
        }

        let description = &item["shortDescription"];
        let description = description
            .as_str()
            .filter(|text| DESCRIPTION_PATTERN.is_match(text))
            .ok_or_else(|| {
                ValidationError::new(format!(
                    "The short product description of item {index} is invalid: {}",
                    describe(description)
                ))
            })?;

        let price = &item["price"];
        let invalid_price = || {
            ValidationError::new(format!(
                "The price of item {index} is invalid: {}",
                describe(price)
            ))
        };
        let price = parse_amount(price).ok_or_else(invalid_price)?;

        if description.trim().chars().count() % 3 == 0 {
            let bonus = description_bonus(price).ok_or_else(invalid_price)?;
            points = points.saturating_add(bonus);
        }
    }

    Ok(points)
}

/// `price * 0.2`, rounded up whenever there is a fractional remainder.
fn description_bonus(price: Decimal) -> Option<u64> {
    price.checked_mul(DESCRIPTION_PRICE_RATE)?.ceil().to_u64()
}

/// 6 points when the day of the month is odd.
fn purchase_date_points(receipt: &Receipt) -> Result<u64, ValidationError> {
    let value = field(receipt, "purchaseDate")?;
    let date = value
        .as_str()
        .filter(|raw| DATE_PATTERN.is_match(raw))
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .ok_or_else(|| {
            ValidationError::new(format!(
                "Invalid purchase date format: {}",
                describe(value)
            ))
        })?;

    Ok(if date.day() % 2 == 1 { ODD_DAY_BONUS } else { 0 })
}

/// 10 points when bought strictly after 14:00 and strictly before 16:00.
fn purchase_time_points(receipt: &Receipt) -> Result<u64, ValidationError> {
    let value = field(receipt, "purchaseTime")?;
    let time = value
        .as_str()
        .filter(|raw| TIME_PATTERN.is_match(raw))
        .and_then(|raw| NaiveTime::parse_from_str(raw, "%H:%M").ok())
        .ok_or_else(|| {
            ValidationError::new(format!(
                "Invalid purchase time format: {}",
                describe(value)
            ))
        })?;

    let minutes = time.hour() * 60 + time.minute();
    let (start, end) = AFTERNOON_WINDOW;
    Ok(if minutes > start && minutes < end {
        AFTERNOON_BONUS
    } else {
        0
    })
}

fn field<'a>(receipt: &'a Receipt, key: &str) -> Result<&'a Value, ValidationError> {
    receipt.get(key).ok_or_else(|| {
        ValidationError::new(format!("The key '{key}' is missing from the receipt."))
    })
}

fn items(receipt: &Receipt) -> Result<&Vec<Value>, ValidationError> {
    let items = field(receipt, "items")?;
    let list = items
        .as_array()
        .ok_or_else(|| ValidationError::new(format!("Items is invalid: {}", describe(items))))?;

    if list.is_empty() {
        return Err(ValidationError::new(format!(
            "Items cannot be empty: {}",
            describe(items)
        )));
    }
    Ok(list)
}

/// Only strings are accepted; numeric JSON amounts are rejected.
fn parse_amount(value: &Value) -> Option<Decimal> {
    value
        .as_str()
        .filter(|raw| AMOUNT_PATTERN.is_match(raw))
        .and_then(|raw| raw.parse::<Decimal>().ok())
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
