//! Input masking
//!
//! Helpers that shape raw keystrokes into the formats the field checks
//! expect, plus display masking for stored account numbers. None of these
//! validate; they only rewrite text.

use core_kernel::money::group_thousands;
use serde::Serialize;

/// Card network guessed from the leading digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

impl CardBrand {
    pub fn label(&self) -> &'static str {
        match self {
            CardBrand::Visa => "VISA",
            CardBrand::Mastercard => "MASTERCARD",
            CardBrand::Amex => "AMEX",
            CardBrand::Discover => "DISCOVER",
        }
    }
}

/// Keeps up to nine digits and inserts hyphens as `000-00-0000`
pub fn format_ssn(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(9).collect();
    match digits.len() {
        0..=3 => digits,
        4..=5 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..5], &digits[5..]),
    }
}

/// Removes whitespace and regroups the characters in blocks of four
pub fn format_card_number(input: &str) -> String {
    let compact: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guesses the card brand; unknown prefixes default to Visa
pub fn detect_card_brand(card_number: &str) -> CardBrand {
    match card_number.trim_start().chars().next() {
        Some('5') => CardBrand::Mastercard,
        Some('3') => CardBrand::Amex,
        Some('6') => CardBrand::Discover,
        _ => CardBrand::Visa,
    }
}

/// Drops every character a phone field does not accept
pub fn filter_phone_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
        .collect()
}

/// Shapes digits into `MM/YY`, adding the slash once two digits are typed
pub fn format_expiry(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Keeps at most four digits
pub fn filter_cvv_input(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(4).collect()
}

/// Shows only the last four characters, e.g. `••••6789`
///
/// Values shorter than four characters are returned unchanged.
pub fn mask_account_number(number: &str) -> String {
    let count = number.chars().count();
    if count < 4 {
        return number.to_string();
    }
    let last_four: String = number.chars().skip(count - 4).collect();
    format!("••••{}", last_four)
}

/// Strips separators and currency symbols, leaving digits, `.` and `-`
///
/// `"$10,000.50"` becomes `"10000.50"`, the form numeric fields validate.
pub fn clean_numeric(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Groups the integer part of a numeric string with commas
///
/// Any sign and fractional part are kept as given: `"-1234567.5"` becomes
/// `"-1,234,567.5"`.
pub fn format_thousands(input: &str) -> String {
    let cleaned = clean_numeric(input);
    let (sign, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", cleaned.as_str()),
    };
    match unsigned.split_once('.') {
        Some((whole, fraction)) => format!("{}{}.{}", sign, group_thousands(whole), fraction),
        None => format!("{}{}", sign, group_thousands(unsigned)),
    }
}
