//! Short-form duration tokens.
//!
//! Tokens are the compact strings shown next to presets (`"5m"`, `"30d"`).
//! They are distinct from the relative-time expressions in `lower`, which
//! this crate never parses or evaluates.

use crate::error::{CatalogError, Result};

/// Converts a duration token such as `"12h"` or `"1h30m"` to seconds.
///
/// Supported units: `s`, `m`, `h`, `d`, `w`. Compound tokens sum their
/// components left to right.
pub fn duration_to_seconds(token: &str) -> Result<u64> {
    let invalid = |reason: &str| CatalogError::InvalidDuration {
        token: token.to_string(),
        reason: reason.to_string(),
    };

    if token.is_empty() {
        return Err(invalid("empty token"));
    }

    let mut total: u64 = 0;
    let mut chars = token.chars().peekable();
    while chars.peek().is_some() {
        let mut magnitude: u64 = 0;
        let mut saw_digit = false;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(u64::from(digit)))
                .ok_or_else(|| invalid("magnitude overflows"))?;
            saw_digit = true;
            chars.next();
        }
        if !saw_digit {
            return Err(invalid("expected a magnitude"));
        }
        let unit = chars.next().ok_or_else(|| invalid("missing unit"))?;
        let unit_seconds = match unit {
            's' => 1,
            'm' => 60,
            'h' => 3_600,
            'd' => 86_400,
            'w' => 604_800,
            _ => return Err(invalid("unknown unit")),
        };
        total = magnitude
            .checked_mul(unit_seconds)
            .and_then(|component| total.checked_add(component))
            .ok_or_else(|| invalid("duration overflows"))?;
    }
    Ok(total)
}
