//! Whole-form validation.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::models::{RecipeDraft, RecipeField};

/// Message attached to every missing field.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Kinds of field violation. Malformed percentages never get this far; the
/// input filter refuses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    RequiredFieldMissing,
}

/// A single field's violation, rendered inline next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    pub fn required() -> Self {
        Self {
            kind: ViolationKind::RequiredFieldMissing,
            message: REQUIRED_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Currently invalid fields and why. Empty means the form passes.
///
/// Iteration follows canonical field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ErrorSet {
    entries: BTreeMap<RecipeField, FieldViolation>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(
        &self,
        field: RecipeField,
    ) -> Option<&FieldViolation> {
        self.entries.get(&field)
    }

    pub fn contains(
        &self,
        field: RecipeField,
    ) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn insert(
        &mut self,
        field: RecipeField,
        violation: FieldViolation,
    ) {
        self.entries.insert(field, violation);
    }

    /// Drops the entry for `field`, returning whether one existed.
    pub fn clear_field(
        &mut self,
        field: RecipeField,
    ) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The first invalid field in canonical order; this is where focus goes.
    pub fn first_invalid(&self) -> Option<RecipeField> {
        self.entries.keys().next().copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = RecipeField> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecipeField, &FieldViolation)> {
        self.entries.iter().map(|(field, v)| (*field, v))
    }
}

/// Checks every field of `draft` and reports the empty ones.
///
/// Pure: the result depends only on `draft`. No numeric or cross-field rules
/// apply; in particular the percentages are not required to total 100.
pub fn validate(draft: &RecipeDraft) -> ErrorSet {
    let mut errors = ErrorSet::new();
    for (field, value) in draft.iter() {
        if value.is_empty() {
            errors.insert(field, FieldViolation::required());
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled_draft() -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        for field in RecipeField::ALL {
            draft.set(field, "x");
        }
        draft
    }

    #[test]
    fn empty_draft_reports_every_field_as_required() {
        let errors = validate(&RecipeDraft::new());

        assert_eq!(errors.len(), 15);
        assert_eq!(errors.fields().collect::<Vec<_>>(), RecipeField::ALL.to_vec());
        assert!(
            errors
                .iter()
                .all(|(_, v)| v.kind == ViolationKind::RequiredFieldMissing
                    && v.message == REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn filled_draft_passes() {
        assert!(validate(&filled_draft()).is_empty());
    }

    #[test]
    fn single_empty_field_yields_single_entry() {
        for field in RecipeField::ALL {
            let mut draft = filled_draft();
            draft.set(field, "");

            let errors = validate(&draft);

            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        let mut draft = filled_draft();
        draft.set(RecipeField::Remarks, " ");

        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn percentages_need_not_total_one_hundred() {
        let mut draft = filled_draft();
        for field in RecipeField::PERCENTAGES {
            draft.set(field, "1");
        }

        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn first_invalid_follows_canonical_order() {
        let mut draft = filled_draft();
        draft.set(RecipeField::Etd, "");
        draft.set(RecipeField::Color2, "");
        draft.set(RecipeField::Percentage4, "");

        assert_eq!(validate(&draft).first_invalid(), Some(RecipeField::Color2));
    }

    #[test]
    fn clear_field_reports_whether_an_entry_was_removed() {
        let mut errors = validate(&RecipeDraft::new());

        assert!(errors.clear_field(RecipeField::Shade));
        assert!(!errors.clear_field(RecipeField::Shade));
        assert_eq!(errors.len(), 14);
    }
}
