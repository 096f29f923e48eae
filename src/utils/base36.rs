//! Compact base36 rendering of user ids for confirmation links.

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Longest base36 string that can still fit in a `u128`.
const MAX_LEN: usize = 25;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Base36Error {
    #[error("base36 input is empty")]
    Empty,
    #[error("base36 input is longer than 25 characters")]
    TooLong,
    #[error("invalid base36 digit {0:?}")]
    InvalidDigit(char),
    #[error("base36 value overflows u128")]
    Overflow,
}

pub fn int_to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::with_capacity(MAX_LEN);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    buf.into_iter().map(char::from).collect()
}

pub fn base36_to_int(s: &str) -> Result<u128, Base36Error> {
    if s.is_empty() {
        return Err(Base36Error::Empty);
    }
    if s.len() > MAX_LEN {
        return Err(Base36Error::TooLong);
    }
    s.chars().try_fold(0u128, |acc, c| {
        let digit = c.to_digit(36).ok_or(Base36Error::InvalidDigit(c))?;
        acc.checked_mul(36)
            .and_then(|acc| acc.checked_add(u128::from(digit)))
            .ok_or(Base36Error::Overflow)
    })
}
