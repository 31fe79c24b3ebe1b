//! Phone number normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static RE_NON_DIGIT: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Shortest accepted number, in digits.
pub const MIN_DIGITS: usize = 10;
/// Longest accepted number (the E.164 maximum), in digits.
pub const MAX_DIGITS: usize = 15;

/// A phone number reduced to its digits, 10 to 15 of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
  /// Strips everything but `0-9` from `raw` and checks the digit count.
  ///
  /// Returns `None` when the cleaned number is too short or too long. No
  /// country-code or checksum validation is done.
  ///
  /// # Example
  /// ```
  /// use whatsinfo::PhoneNumber;
  /// let number = PhoneNumber::parse("+1 (555) 123-4567").unwrap();
  /// assert_eq!(number.as_str(), "15551234567");
  /// assert!(PhoneNumber::parse("12345").is_none());
  /// ```
  #[must_use]
  pub fn parse(raw: &str) -> Option<Self> {
    let cleaned = RE_NON_DIGIT.replace_all(raw, "");
    (MIN_DIGITS..=MAX_DIGITS)
      .contains(&cleaned.len())
      .then(|| Self(cleaned.into_owned()))
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for PhoneNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
