use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::utils::{format_px, parse_leading_int, CCStr};

/// An ordered list of CSS declarations.
///
/// Properties are stored with their CSS (kebab-case) names. Setting a property that is
/// already present replaces its value in place, so the declaration order is the order of
/// first insertion. The [`Display`](core::fmt::Display) implementation renders the list as
/// the content of an inline `style` attribute.
///
/// # Examples
///
/// ```rust
/// let style = Style::new()
///     .with("min-height", "300px")
///     .with("transition", "min-height 200ms ease-in-out");
/// assert_eq!(style.to_string(), "min-height: 300px; transition: min-height 200ms ease-in-out;");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Style(Vec<(Cow<'static, str>, String)>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder flavour of [`Style::set`]
    pub fn with(mut self, property: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<Cow<'static, str>>, value: impl ToString) {
        let property = property.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some((_, v)) => *v = value,
            None => self.0.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Merges `other` on top of `self`: properties of `other` win.
    pub fn merge(mut self, other: &Style) -> Self {
        for (p, v) in other.0.iter() {
            self.set(p.clone(), v);
        }
        self
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(p, _)| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (p, v) in self.0.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{p}: {v};")?;
        }
        Ok(())
    }
}

/// A CSS length given either as a bare pixel count or as a raw CSS value
///
/// Numbers are rendered with a `px` suffix, strings are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssLength {
    Px(f64),
    Raw(CCStr),
}

impl CssLength {
    /// The value as written in a stylesheet
    pub fn to_css(&self) -> String {
        match self {
            CssLength::Px(px) => format_px(*px),
            CssLength::Raw(raw) => raw.to_string(),
        }
    }

    /// Leading integer of the value, 0 when there is none
    ///
    /// Fractional pixel counts are truncated, as when the number is first printed and then
    /// parsed back.
    pub fn leading_int(&self) -> f64 {
        match self {
            CssLength::Px(px) if px.is_finite() => px.trunc(),
            CssLength::Px(_) => 0.0,
            CssLength::Raw(raw) => parse_leading_int(raw),
        }
    }
}

impl Default for CssLength {
    fn default() -> Self {
        CssLength::Px(0.0)
    }
}

impl core::fmt::Display for CssLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

macro_rules! css_length_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CssLength {
                fn from(value: $t) -> Self {
                    CssLength::Px(value as f64)
                }
            }
        )*
    };
}
css_length_from_number!(u16, i16, u32, i32, u64, i64, usize, f32, f64);

impl From<&str> for CssLength {
    fn from(value: &str) -> Self {
        CssLength::Raw(value.into())
    }
}
impl From<String> for CssLength {
    fn from(value: String) -> Self {
        CssLength::Raw(value.into())
    }
}
impl From<CCStr> for CssLength {
    fn from(value: CCStr) -> Self {
        CssLength::Raw(value)
    }
}
