//! Keystroke admission control.
//!
//! Percentage inputs only ever hold a partial or complete decimal with at
//! most five fractional digits. Anything else is refused before it reaches
//! the draft, so the stored value stays at the last accepted string.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::RecipeField;

/// Maximum fractional digits a percentage may carry.
pub const PERCENTAGE_SCALE: u32 = 5;

// ASCII digits only; `\d` would admit other Unicode decimal digits.
static PERCENTAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]*\.?[0-9]{0,5}$").expect("percentage pattern is a valid regex")
});

/// Result of offering a raw value to the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission<'a> {
    Accepted(&'a str),
    Rejected,
}

/// True when `raw` is an admissible percentage keystroke state: optional
/// integer digits, an optional single point, and up to five fraction digits.
/// The empty string matches.
pub fn is_percentage_input(raw: &str) -> bool {
    PERCENTAGE_PATTERN.is_match(raw)
}

/// Decides whether `raw` may be written to `field`.
///
/// Non-percentage fields accept anything. Percentage fields accept the empty
/// string and anything matching [`is_percentage_input`].
pub fn filter_write(
    field: RecipeField,
    raw: &str,
) -> Admission<'_> {
    if field.is_percentage() && !raw.is_empty() && !is_percentage_input(raw) {
        tracing::debug!(%field, input = raw, "percentage keystroke rejected");
        return Admission::Rejected;
    }
    Admission::Accepted(raw)
}
