use crate::models::{FIELD_COUNT, RecipeDraft};

/// Completion of `draft` as a whole percentage in `0..=100`.
///
/// Computed as `round(100 * filled / total)`, halves rounding up. Purely
/// observational; it has no bearing on validation or submission.
pub fn progress(draft: &RecipeDraft) -> u8 {
    percent_of(draft.filled_count(), FIELD_COUNT)
}

fn percent_of(
    part: usize,
    total: usize,
) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (part.min(total) * 100 + total / 2) / total;
    scaled as u8
}
