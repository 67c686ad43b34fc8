//! Field format checks
//!
//! Plain predicates over already-trimmed field values. Each check accepts
//! exactly what its documented pattern accepts; masking of user input into
//! these shapes lives in [`crate::masking`].

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // some dot with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Digits, spaces, `+`, `-`, `(` and `)` only, with at least ten digits
pub fn is_phone(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    allowed && value.chars().filter(char::is_ascii_digit).count() >= 10
}

/// `^\d{3}-\d{2}-\d{4}$`
pub fn is_ssn(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 11
        && bytes.iter().enumerate().all(|(i, b)| match i {
            3 | 6 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Exactly five digits
pub fn is_zip(value: &str) -> bool {
    is_digits_of_len(value, 5..=5)
}

/// Exactly nine digits
pub fn is_routing_number(value: &str) -> bool {
    is_digits_of_len(value, 9..=9)
}

/// 13 to 19 digits once whitespace is removed, passing the Luhn checksum
pub fn is_card_number(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    is_digits_of_len(&digits, 13..=19) && luhn_check(&digits)
}

/// Luhn checksum over a string of ASCII digits
///
/// Walking right to left, every second digit starting from the second
/// rightmost is doubled (minus 9 when above 9); the number is valid when
/// the sum is a multiple of 10. Empty input and non-digits fail.
pub fn luhn_check(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (position, ch) in digits.chars().rev().enumerate() {
        let Some(mut digit) = ch.to_digit(10) else {
            return false;
        };
        if position % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// `^(0[1-9]|1[0-2])\/\d{2}$`
pub fn is_expiry(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'/' {
        return false;
    }
    let month_ok = match (bytes[0], bytes[1]) {
        (b'0', b'1'..=b'9') => true,
        (b'1', b'0'..=b'2') => true,
        _ => false,
    };
    month_ok && bytes[3].is_ascii_digit() && bytes[4].is_ascii_digit()
}

/// Three or four digits
pub fn is_cvv(value: &str) -> bool {
    is_digits_of_len(value, 3..=4)
}

/// At least two whitespace-separated words
pub fn is_full_name(value: &str) -> bool {
    value.split_whitespace().count() >= 2
}

/// Letters, whitespace, hyphens and apostrophes only
pub fn is_person_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-')
}

/// At least one lowercase letter, one uppercase letter and one digit
pub fn is_strong_password(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// One or more ASCII digits
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Checkbox-style truthiness of a submitted value
pub fn is_checked(value: &str) -> bool {
    ["true", "on", "checked", "yes", "1"]
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

fn is_digits_of_len(value: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}
