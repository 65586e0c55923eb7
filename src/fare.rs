//! Taxi fare rules.
//!
//! A fare is the initial charge plus one distance charge per distance
//! increment travelled. Rides starting at night or in the afternoon rush pay
//! a surcharge on top of every increment. All arithmetic is plain `f64` with
//! no rounding.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

use crate::entities::{check_increment, Amount, Pricing, BUSY_CHARGE, NIGHT_CHARGE};
use crate::error::{invalid_timestamp_error, Error};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn initial_charge_component(initial_charge: impl Into<Amount>) -> Result<f64, Error> {
    initial_charge.into().non_negative("initial charge")
}

/// Surcharge per distance increment for a ride starting at `start_time`.
///
/// The hour is read in the timestamp's own offset.
pub fn time_surcharge(start_time: &str) -> Result<f64, Error> {
    start_hour(start_time).map(surcharge_for_hour)
}

pub fn surcharge_for_hour(hour: u32) -> f64 {
    match hour {
        20..=23 | 0..=5 => NIGHT_CHARGE,
        16..=18 => BUSY_CHARGE,
        _ => 0.0,
    }
}

pub fn distance_component(
    distance: impl Into<Amount>,
    start_time: &str,
    distance_charge: impl Into<Amount>,
    distance_increment: impl Into<Amount>,
) -> Result<f64, Error> {
    let distance = distance.into().non_negative("distance")?;
    let distance_charge = distance_charge.into().non_negative("distance charge")?;
    let distance_increment = check_increment(distance_increment.into().value()?)?;

    Ok((distance / distance_increment) * (distance_charge + time_surcharge(start_time)?))
}

pub fn compute_fare(
    distance: impl Into<Amount>,
    start_time: &str,
    pricing: &Pricing,
) -> Result<f64, Error> {
    Ok(initial_charge_component(pricing.initial_charge)?
        + distance_component(
            distance,
            start_time,
            pricing.distance_charge,
            pricing.distance_increment,
        )?)
}

fn start_hour(start_time: &str) -> Result<u32, Error> {
    let input = extended_form(start_time);

    for format in OFFSET_FORMATS {
        if let Ok(at) = DateTime::parse_from_str(&input, format) {
            return Ok(at.hour());
        }
    }

    for format in LOCAL_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(&input, format) {
            return Ok(at.hour());
        }
    }

    // a bare date starts at midnight
    if NaiveDate::parse_from_str(&input, "%Y-%m-%d").is_ok() {
        return Ok(0);
    }

    Err(invalid_timestamp_error(start_time))
}

/// Rewrites an ISO-8601 timestamp into extended notation: `-` and `:`
/// separators, `.` before fractions, minutes on every time and offset.
/// Anything it does not recognise is passed through for chrono to reject.
fn extended_form(start_time: &str) -> String {
    let input = start_time.trim().replace(',', ".");

    let (date, rest) = match input.find(|c: char| matches!(c, 'T' | 't' | ' ')) {
        Some(at) => (&input[..at], Some(&input[at + 1..])),
        None => (input.as_str(), None),
    };

    let mut extended = extended_date(date);

    if let Some(rest) = rest {
        let at = rest
            .find(|c: char| matches!(c, 'Z' | 'z' | '+' | '-'))
            .unwrap_or(rest.len());
        let (time, offset) = rest.split_at(at);

        extended.push('T');
        extended.push_str(&extended_time(time));
        extended.push_str(&extended_offset(offset));
    }

    extended
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn extended_date(date: &str) -> String {
    if date.len() == 8 && all_digits(date) {
        return format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..]);
    }

    date.to_string()
}

fn extended_time(time: &str) -> String {
    let (clock, fraction) = time.split_at(time.find('.').unwrap_or(time.len()));

    if !all_digits(clock) {
        return time.to_string();
    }

    let clock = match clock.len() {
        2 => format!("{}:00", clock),
        4 => format!("{}:{}", &clock[..2], &clock[2..]),
        6 => format!("{}:{}:{}", &clock[..2], &clock[2..4], &clock[4..]),
        _ => clock.to_string(),
    };

    format!("{}{}", clock, fraction)
}

fn extended_offset(offset: &str) -> String {
    if offset.eq_ignore_ascii_case("z") {
        return "+00:00".into();
    }

    let (sign, digits) = offset.split_at(offset.len().min(1));

    if !all_digits(digits) {
        return offset.to_string();
    }

    match digits.len() {
        2 => format!("{}{}:00", sign, digits),
        4 => format!("{}{}:{}", sign, &digits[..2], &digits[2..]),
        _ => offset.to_string(),
    }
}
