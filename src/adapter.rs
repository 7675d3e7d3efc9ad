//! Hooks for external validation frameworks.
//!
//! A framework that wants to treat these values as just-another-field
//! type needs three capabilities: parse text, produce text, and order
//! two values. [`TextValue`] is exactly that surface, implemented over
//! the canonical ISO-8601 forms, so an adapter crate can wrap any of
//! the value types without this crate knowing the framework exists.

use std::cmp::Ordering;

use crate::cal::datetime::{Date, DateTime};
use crate::duration::Duration;
use crate::error::Error;


/// Parse, format, and compare, for one value type.
pub trait TextValue: Sized {

    /// Parses the canonical text form, or reports why the text does
    /// not parse. Never falls back to a default value.
    fn parse_text(input: &str) -> Result<Self, Error>;

    /// The canonical text form of this value.
    fn format_text(&self) -> String;

    /// Orders two values, or `None` where no order exists — a naive
    /// and an aware datetime have none.
    fn compare(&self, other: &Self) -> Option<Ordering>;
}

impl TextValue for Date {
    fn parse_text(input: &str) -> Result<Self, Error> {
        Self::parse(input)
    }

    fn format_text(&self) -> String {
        self.to_iso_string()
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TextValue for DateTime {
    fn parse_text(input: &str) -> Result<Self, Error> {
        Self::parse(input)
    }

    fn format_text(&self) -> String {
        self.to_iso_string()
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }
}

impl TextValue for Duration {
    fn parse_text(input: &str) -> Result<Self, Error> {
        Self::parse_iso(input)
    }

    fn format_text(&self) -> String {
        self.to_iso_string()
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
