use std::borrow::Borrow;
use std::convert::Infallible;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub async fn async_sleep(timeout_ms: u64) {
    tokio::time::sleep(tokio::time::Duration::from_millis(timeout_ms)).await
}

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("static regex is valid"));

/// Lenient integer-prefix parse of a CSS length
///
/// Mirrors the usual "parseInt" behaviour: leading whitespace is skipped, an optional
/// sign and the leading digits are taken, anything after them is ignored. Inputs without
/// a leading integer (`"auto"`, `""`, `"px12"`) parse to 0. The result is a float so that
/// digit runs of any length keep their magnitude.
///
/// ```
/// assert_eq!(parse_leading_int("300px"), 300.0);
/// assert_eq!(parse_leading_int("  12.9rem"), 12.0);
/// assert_eq!(parse_leading_int("auto"), 0.0);
/// ```
pub fn parse_leading_int(value: &str) -> f64 {
    LEADING_INT
        .captures(value)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Formats a pixel quantity the way a CSS author would write it (`300px`, `12.5px`)
pub fn format_px(value: f64) -> String {
    format!("{value}px")
}

/// Formats a ratio already multiplied by 100 (`56.25%`)
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

pub type CheapClone<T> = std::rc::Rc<T>;

/// Cheap-to-clone immutable string used for identifiers and labels handed to components
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CCStr(CheapClone<str>);
impl Clone for CCStr {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}

impl Serialize for CCStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_ref())
    }
}

impl<'de> Deserialize<'de> for CCStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|s| CCStr(CheapClone::from(s)))
    }
}

impl core::str::FromStr for CCStr {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CCStr(CheapClone::from(s)))
    }
}
impl From<String> for CCStr {
    fn from(value: String) -> Self {
        CCStr(CheapClone::from(value))
    }
}
impl From<&String> for CCStr {
    fn from(value: &String) -> Self {
        CCStr(CheapClone::from(value.as_str()))
    }
}
impl From<&str> for CCStr {
    fn from(value: &str) -> Self {
        CCStr(CheapClone::from(value))
    }
}
impl core::ops::Deref for CCStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
impl AsRef<str> for CCStr {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl core::fmt::Display for CCStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for CCStr {
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_follows_parse_int() {
        assert_eq!(parse_leading_int("300px"), 300.0);
        assert_eq!(parse_leading_int("300"), 300.0);
        assert_eq!(parse_leading_int("  42px"), 42.0);
        assert_eq!(parse_leading_int("-5px"), -5.0);
        assert_eq!(parse_leading_int("+7em"), 7.0);
        assert_eq!(parse_leading_int("12.9rem"), 12.0);
        assert_eq!(parse_leading_int("auto"), 0.0);
        assert_eq!(parse_leading_int("px12"), 0.0);
        assert_eq!(parse_leading_int(""), 0.0);
    }

    #[test]
    fn leading_int_keeps_magnitude_of_long_digit_runs() {
        assert_eq!(parse_leading_int("9223372036854775807px"), 9223372036854775807.0);
        assert_eq!(
            parse_leading_int("123456789012345678901234567890px"),
            123456789012345678901234567890.0
        );
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_px(300.0), "300px");
        assert_eq!(format_px(12.5), "12.5px");
        assert_eq!(format_percent(56.25), "56.25%");
        assert_eq!(format_percent(75.0), "75%");
    }
}
