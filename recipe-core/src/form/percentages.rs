//! Read-only arithmetic over the four dye percentages.
//!
//! Nothing here feeds validation. Hosts may show the total next to the
//! colour grid; the submission path only logs when it is off.

use rust_decimal::Decimal;

use super::filter::PERCENTAGE_SCALE;
use crate::models::{RecipeDraft, RecipeField};

/// Total the four percentages are conventionally expected to reach.
pub const EXPECTED_TOTAL: Decimal = Decimal::ONE_HUNDRED;

/// Parsed percentage slots and their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageSummary {
    /// One entry per slot; `None` when the slot holds no number yet.
    pub values: [Option<Decimal>; 4],
    /// Sum of the slots that hold a number. `None` when the sum leaves the
    /// `Decimal` range, which the input filter does not prevent.
    pub total: Option<Decimal>,
}

impl PercentageSummary {
    pub fn from_draft(draft: &RecipeDraft) -> Self {
        let values = RecipeField::PERCENTAGES.map(|field| parse_percentage(draft.get(field)));
        let total = values
            .iter()
            .flatten()
            .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
            .map(|sum| sum.round_dp(PERCENTAGE_SCALE));

        Self { values, total }
    }

    /// True when every slot holds a number.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Signed gap to [`EXPECTED_TOTAL`]; zero means the mix is balanced.
    pub fn deviation(&self) -> Option<Decimal> {
        self.total?.checked_sub(EXPECTED_TOTAL)
    }

    /// An overflowed total is never balanced.
    pub fn is_balanced(&self) -> bool {
        self.deviation().is_some_and(|gap| gap.is_zero())
    }
}

/// Parses a stored percentage string.
///
/// Accepts the partial states the input filter lets through: `"25."` reads
/// as 25 and `".5"` as 0.5. Empty input and a lone point yield `None`.
pub fn parse_percentage(s: &str) -> Option<Decimal> {
    let trimmed = s.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    };
    normalized.parse().map_or_else(
        |e| {
            tracing::warn!(input = %s, "invalid percentage: {}", e);
            None
        },
        Some,
    )
}
