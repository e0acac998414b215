use std::fmt;

use serde::{Deserialize, Serialize};

use super::Section;

/// Number of fields in a recipe. The set is closed.
pub const FIELD_COUNT: usize = 15;

/// One input slot of the lab recipe form.
///
/// Variants are declared in canonical order. That order drives storage
/// layout, validation output, and which invalid field receives focus first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecipeField {
    Party,
    FabricName,
    LotNo,
    RegisterNo,
    Shade,
    Color1,
    Percentage1,
    Color2,
    Percentage2,
    Color3,
    Percentage3,
    Color4,
    Percentage4,
    Remarks,
    Etd,
}

impl RecipeField {
    /// Every field in canonical order.
    pub const ALL: [RecipeField; FIELD_COUNT] = [
        Self::Party,
        Self::FabricName,
        Self::LotNo,
        Self::RegisterNo,
        Self::Shade,
        Self::Color1,
        Self::Percentage1,
        Self::Color2,
        Self::Percentage2,
        Self::Color3,
        Self::Percentage3,
        Self::Color4,
        Self::Percentage4,
        Self::Remarks,
        Self::Etd,
    ];

    /// The four percentage slots, in order.
    pub const PERCENTAGES: [RecipeField; 4] = [
        Self::Percentage1,
        Self::Percentage2,
        Self::Percentage3,
        Self::Percentage4,
    ];

    /// Position of this field in canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The field's wire name, as used by hosts and in serialized records.
    pub fn name(self) -> &'static str {
        match self {
            Self::Party => "party",
            Self::FabricName => "fabricName",
            Self::LotNo => "lotNo",
            Self::RegisterNo => "registerNo",
            Self::Shade => "shade",
            Self::Color1 => "color1",
            Self::Percentage1 => "percentage1",
            Self::Color2 => "color2",
            Self::Percentage2 => "percentage2",
            Self::Color3 => "color3",
            Self::Percentage3 => "percentage3",
            Self::Color4 => "color4",
            Self::Percentage4 => "percentage4",
            Self::Remarks => "remarks",
            Self::Etd => "etd",
        }
    }

    /// Resolves a wire name. Unknown names yield `None`; the key set never
    /// grows.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Party => "Party",
            Self::FabricName => "Fabric Name",
            Self::LotNo => "Lot No.",
            Self::RegisterNo => "Register No.",
            Self::Shade => "Shade",
            Self::Color1 => "Color 1",
            Self::Percentage1 => "Percentage 1",
            Self::Color2 => "Color 2",
            Self::Percentage2 => "Percentage 2",
            Self::Color3 => "Color 3",
            Self::Percentage3 => "Percentage 3",
            Self::Color4 => "Color 4",
            Self::Percentage4 => "Percentage 4",
            Self::Remarks => "Remarks",
            Self::Etd => "ETD",
        }
    }

    /// Whether writes to this field go through the percentage input filter.
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            Self::Percentage1 | Self::Percentage2 | Self::Percentage3 | Self::Percentage4
        )
    }

    /// The form group this field is rendered in.
    pub fn group(self) -> Section {
        match self {
            Self::Party
            | Self::FabricName
            | Self::LotNo
            | Self::RegisterNo
            | Self::Shade
            | Self::Etd => Section::Basic,
            _ => Section::Colors,
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}
