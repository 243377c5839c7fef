//! Character classes
//!
//! Plain `char` predicates for each class the complexity policy requires.

/// The closed set of special characters accepted by the policy.
pub const SPECIAL_CHARACTERS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Uppercase ASCII letter `A`-`Z`.
pub fn is_uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Lowercase ASCII letter `a`-`z`.
pub fn is_lowercase(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Decimal digit `0`-`9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Member of [`SPECIAL_CHARACTERS`].
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}
