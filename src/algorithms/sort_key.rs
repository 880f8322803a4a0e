//! Comparison keys for ordering list elements by their textual form
//!
//! An element whose text is made of decimal digits (optionally preceded by a
//! single `-`) is compared as an integer of arbitrary length. Anything else
//! is compared as text. Numeric keys order before textual ones, which keeps
//! the ordering total when a list mixes both kinds.

use std::cmp::Ordering;
use std::fmt;

/// Integer value held as a normalized decimal string
///
/// `magnitude` never carries leading zeros (zero is `"0"`) and zero is never
/// negative, so the derived equality matches numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericKey {
    negative: bool,
    magnitude: String,
}

impl NumericKey {
    /// Parse a decimal integer, returning `None` for anything else
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = digits.trim_start_matches('0');
        let magnitude = if trimmed.is_empty() { "0" } else { trimmed };

        Some(Self {
            negative: negative && magnitude != "0",
            magnitude: magnitude.to_string(),
        })
    }

    /// Whether the value is below zero
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.magnitude
            .len()
            .cmp(&other.magnitude.len())
            .then_with(|| self.magnitude.cmp(&other.magnitude))
    }
}

impl Ord for NumericKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for NumericKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NumericKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

/// Ordering key derived from an element's textual form
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    /// Decimal integer text
    Numeric(NumericKey),
    /// Any other text, compared lexicographically
    Text(String),
}

impl SortKey {
    /// Build the key for an element from its `Display` output
    pub fn of<T: fmt::Display + ?Sized>(item: &T) -> Self {
        Self::from_text(item.to_string())
    }

    /// Build the key for an already rendered element
    pub fn from_text(text: String) -> Self {
        match NumericKey::parse(&text) {
            Some(numeric) => Self::Numeric(numeric),
            None => Self::Text(text),
        }
    }

    /// Whether this key compares numerically
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_parse() {
        assert!(NumericKey::parse("15").is_some());
        assert!(NumericKey::parse("-1").is_some());
        assert!(NumericKey::parse("").is_none());
        assert!(NumericKey::parse("-").is_none());
        assert!(NumericKey::parse("1.5").is_none());
        assert!(NumericKey::parse("+1").is_none());
        assert!(NumericKey::parse("12a").is_none());
    }

    #[test]
    fn test_numeric_normalization() {
        assert_eq!(NumericKey::parse("007"), NumericKey::parse("7"));
        assert_eq!(NumericKey::parse("-0"), NumericKey::parse("0"));
        assert_eq!(NumericKey::parse("000").unwrap().to_string(), "0");
        assert!(!NumericKey::parse("-0").unwrap().is_negative());
    }

    #[test]
    fn test_numeric_ordering() {
        let key = |s: &str| NumericKey::parse(s).unwrap();

        assert!(key("2") < key("10"));
        assert!(key("-1") < key("0"));
        assert!(key("-10") < key("-2"));
        assert!(key("-1") < key("1"));
        assert!(key("99999999999999999999999999") < key("100000000000000000000000000"));
        assert_eq!(key("15").cmp(&key("015")), Ordering::Equal);
    }

    #[test]
    fn test_text_ordering() {
        assert!(SortKey::of("apple") < SortKey::of("banana"));
        assert!(SortKey::of("banana") < SortKey::of("cherry"));
        assert!(!SortKey::of("banana").is_numeric());
    }

    #[test]
    fn test_numeric_before_text() {
        assert!(SortKey::of("100") < SortKey::of("1a"));
        assert!(SortKey::of("-5") < SortKey::of("abc"));
        assert!(SortKey::of(&42).is_numeric());
    }

    #[test]
    fn test_integer_elements() {
        let mut keys: Vec<SortKey> = [15, 0, -1, 1].iter().map(SortKey::of).collect();
        keys.sort();
        let rendered: Vec<String> = keys
            .iter()
            .map(|k| match k {
                SortKey::Numeric(n) => n.to_string(),
                SortKey::Text(t) => t.clone(),
            })
            .collect();
        assert_eq!(rendered, vec!["-1", "0", "1", "15"]);
    }
}
