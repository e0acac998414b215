use serde::{Deserialize, Serialize};

use super::{FIELD_COUNT, RecipeField};

/// The in-progress, unsaved values of one lab recipe.
///
/// Storage is a fixed array indexed by [`RecipeField::index`], so every key
/// is always present. An empty string means "no data".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDraft {
    values: [String; FIELD_COUNT],
}

impl RecipeDraft {
    /// A draft with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &self,
        field: RecipeField,
    ) -> &str {
        &self.values[field.index()]
    }

    /// Replaces the stored value. This is the raw store write; callers that
    /// take user input go through the form's input filter first.
    pub fn set(
        &mut self,
        field: RecipeField,
        value: impl Into<String>,
    ) {
        self.values[field.index()] = value.into();
    }

    /// `(field, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (RecipeField, &str)> {
        RecipeField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
    }

    pub fn is_filled(
        &self,
        field: RecipeField,
    ) -> bool {
        !self.get(field).is_empty()
    }

    /// Number of fields holding a non-empty value.
    pub fn filled_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_empty()).count()
    }

    /// True when no field holds data.
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A complete recipe as handed to persistence.
///
/// Field names serialize exactly as the form's wire names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub party: String,
    pub fabric_name: String,
    pub lot_no: String,
    pub register_no: String,
    pub shade: String,
    pub color1: String,
    pub percentage1: String,
    pub color2: String,
    pub percentage2: String,
    pub color3: String,
    pub percentage3: String,
    pub color4: String,
    pub percentage4: String,
    pub remarks: String,
    pub etd: String,
}

impl From<&RecipeDraft> for RecipeRecord {
    fn from(draft: &RecipeDraft) -> Self {
        let value = |field| draft.get(field).to_string();

        Self {
            party: value(RecipeField::Party),
            fabric_name: value(RecipeField::FabricName),
            lot_no: value(RecipeField::LotNo),
            register_no: value(RecipeField::RegisterNo),
            shade: value(RecipeField::Shade),
            color1: value(RecipeField::Color1),
            percentage1: value(RecipeField::Percentage1),
            color2: value(RecipeField::Color2),
            percentage2: value(RecipeField::Percentage2),
            color3: value(RecipeField::Color3),
            percentage3: value(RecipeField::Percentage3),
            color4: value(RecipeField::Color4),
            percentage4: value(RecipeField::Percentage4),
            remarks: value(RecipeField::Remarks),
            etd: value(RecipeField::Etd),
        }
    }
}

impl From<&RecipeRecord> for RecipeDraft {
    fn from(record: &RecipeRecord) -> Self {
        let mut draft = RecipeDraft::new();
        draft.set(RecipeField::Party, record.party.as_str());
        draft.set(RecipeField::FabricName, record.fabric_name.as_str());
        draft.set(RecipeField::LotNo, record.lot_no.as_str());
        draft.set(RecipeField::RegisterNo, record.register_no.as_str());
        draft.set(RecipeField::Shade, record.shade.as_str());
        draft.set(RecipeField::Color1, record.color1.as_str());
        draft.set(RecipeField::Percentage1, record.percentage1.as_str());
        draft.set(RecipeField::Color2, record.color2.as_str());
        draft.set(RecipeField::Percentage2, record.percentage2.as_str());
        draft.set(RecipeField::Color3, record.color3.as_str());
        draft.set(RecipeField::Percentage3, record.percentage3.as_str());
        draft.set(RecipeField::Color4, record.color4.as_str());
        draft.set(RecipeField::Percentage4, record.percentage4.as_str());
        draft.set(RecipeField::Remarks, record.remarks.as_str());
        draft.set(RecipeField::Etd, record.etd.as_str());
        draft
    }
}
