//! Regular expressions used by the login and registration forms.
//!
//! Character classes are spelled out in ASCII so that `\w`/`\d` behave the
//! same way a browser's non-unicode `RegExp` does.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any character that is not a word character or digit.
    pub(crate) static ref SPECIAL_CHAR_REGEX: Regex = Regex::new(r"[^0-9A-Za-z_]").unwrap();
    pub(crate) static ref DIGIT_REGEX: Regex = Regex::new(r"[0-9]").unwrap();
    /// `name@domain.tld` prefix; trailing text after the tld is allowed.
    pub(crate) static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[0-9A-Za-z_]+?@[0-9A-Za-z_]+\.[0-9A-Za-z_]+").unwrap();
}

/// The three compiled form-validation patterns carried by every `AppConfig`.
#[derive(Debug, Clone)]
pub struct ValidationPatterns {
    special_char: Regex,
    digit: Regex,
    email: Regex,
}

impl ValidationPatterns {
    pub fn new() -> Self {
        Self {
            special_char: SPECIAL_CHAR_REGEX.clone(),
            digit: DIGIT_REGEX.clone(),
            email: EMAIL_REGEX.clone(),
        }
    }

    pub fn special_char(&self) -> &Regex {
        &self.special_char
    }

    pub fn digit(&self) -> &Regex {
        &self.digit
    }

    pub fn email(&self) -> &Regex {
        &self.email
    }
}

impl Default for ValidationPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ValidationPatterns {
    fn eq(&self, other: &Self) -> bool {
        self.special_char.as_str() == other.special_char.as_str()
            && self.digit.as_str() == other.digit.as_str()
            && self.email.as_str() == other.email.as_str()
    }
}

impl Eq for ValidationPatterns {}

pub fn has_special_char(value: &str) -> bool {
    SPECIAL_CHAR_REGEX.is_match(value)
}

pub fn has_digit(value: &str) -> bool {
    DIGIT_REGEX.is_match(value)
}

pub fn looks_like_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
