// crates/algokit-core/src/fundamentals/transaction.rs
// ============================================================================
// Module: Transaction Records
// Description: Commercial transaction value type with parsing and ordering.
// Purpose: Sample keyed data for priority queue and sorting clients.
// Dependencies: serde, time, crate::error
// ============================================================================

//! ## Overview
//! A transaction line reads `Who M/D/YYYY amount`, for example
//! `Turing 6/17/1990 644.08`. Transactions order by amount first, then date,
//! then name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use time::Date;
use time::Month;

use crate::error::AlgoError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A named, dated amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Customer name.
    pub who: String,
    /// Transaction date.
    #[serde(serialize_with = "serialize_date")]
    pub when: Date,
    /// Amount in currency units.
    pub amount: f64,
}

impl Transaction {
    /// Creates a transaction.
    #[must_use]
    pub fn new(who: impl Into<String>, when: Date, amount: f64) -> Self {
        Self {
            who: who.into(),
            when,
            amount,
        }
    }
}

impl PartialOrd for Transaction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.amount.partial_cmp(&other.amount)? {
            Ordering::Equal => {}
            ordering => return Some(ordering),
        }
        Some(self.when.cmp(&other.when).then_with(|| self.who.cmp(&other.who)))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {:>10} {:>8.2}", self.who, format_date(self.when), self.amount)
    }
}

impl FromStr for Transaction {
    type Err = AlgoError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [who, date, amount] = fields.as_slice() else {
            return Err(AlgoError::parse(0, "transaction needs 'who date amount'"));
        };
        let when = parse_date(date)?;
        let amount = amount
            .parse::<f64>()
            .map_err(|_| AlgoError::parse(0, format!("invalid amount '{amount}'")))?;
        if !amount.is_finite() {
            return Err(AlgoError::parse(0, format!("invalid amount '{amount}'")));
        }
        Ok(Self::new(*who, when, amount))
    }
}

// ============================================================================
// SECTION: Date Helpers
// ============================================================================

/// Parses an `M/D/YYYY` date.
fn parse_date(text: &str) -> Result<Date, AlgoError> {
    let invalid = || AlgoError::parse(0, format!("invalid date '{text}'"));
    let mut parts = text.split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let month = month.parse::<u8>().map_err(|_| invalid())?;
    let day = day.parse::<u8>().map_err(|_| invalid())?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = Month::try_from(month).map_err(|_| invalid())?;
    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}

/// Renders a date as `M/D/YYYY`.
fn format_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

/// Serializes a date in the same `M/D/YYYY` form used for parsing.
fn serialize_date<S: serde::Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(*date))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
