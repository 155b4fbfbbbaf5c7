//! Quantity path segment parsing.

use salvo::{oapi::extract::PathParam, prelude::StatusError};

pub(crate) trait QuantityExt {
    fn into_quantity(self) -> Result<i64, StatusError>;
}

impl QuantityExt for PathParam<String> {
    fn into_quantity(self) -> Result<i64, StatusError> {
        parse_quantity(&self.into_inner())
            .ok_or_else(|| StatusError::bad_request().brief("quantity must be a number"))
    }
}

/// Read the leading integer of `raw`, ignoring whatever follows it.
///
/// Leading whitespace and a single sign are accepted, so `"3abc"` is 3 and `"2.9"` is 2.
/// Returns `None` when no digits lead the value or they do not fit an `i64`.
pub(crate) fn parse_quantity(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();

    let sign_len = usize::from(trimmed.starts_with(['+', '-']));

    let digits_len = trimmed
        .chars()
        .skip(sign_len)
        .take_while(char::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    trimmed.get(..sign_len + digits_len)?.parse().ok()
}
