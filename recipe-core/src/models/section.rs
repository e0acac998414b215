use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::RecipeField;
use crate::error::FormError;

/// Which field groups of the form are rendered.
///
/// This is pure view state. It never gates validation or submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    All,
    Basic,
    Colors,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::All, Section::Basic, Section::Colors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Basic => "basic",
            Self::Colors => "colors",
        }
    }

    /// Tab caption.
    pub fn title(&self) -> &'static str {
        match self {
            Self::All => "All Fields",
            Self::Basic => "Basic Info",
            Self::Colors => "Colors",
        }
    }

    /// Whether `field` is rendered while this section is selected.
    pub fn shows(
        &self,
        field: RecipeField,
    ) -> bool {
        match self {
            Self::All => true,
            group => field.group() == *group,
        }
    }

    /// Fields rendered for this section, in canonical order.
    pub fn visible_fields(&self) -> Vec<RecipeField> {
        RecipeField::ALL
            .into_iter()
            .filter(|field| self.shows(*field))
            .collect()
    }
}

impl fmt::Display for Section {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| FormError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use RecipeField::*;

    #[test]
    fn all_shows_every_field() {
        assert_eq!(Section::All.visible_fields(), RecipeField::ALL.to_vec());
    }

    #[test]
    fn basic_shows_identity_and_delivery_fields() {
        assert_eq!(
            Section::Basic.visible_fields(),
            vec![Party, FabricName, LotNo, RegisterNo, Shade, Etd]
        );
    }

    #[test]
    fn colors_shows_color_percentage_pairs_and_remarks() {
        assert_eq!(
            Section::Colors.visible_fields(),
            vec![
                Color1,
                Percentage1,
                Color2,
                Percentage2,
                Color3,
                Percentage3,
                Color4,
                Percentage4,
                Remarks
            ]
        );
    }

    #[test]
    fn basic_and_colors_partition_the_field_set() {
        let basic = Section::Basic.visible_fields();
        let colors = Section::Colors.visible_fields();

        assert_eq!(basic.len() + colors.len(), RecipeField::ALL.len());
        assert!(basic.iter().all(|f| !colors.contains(f)));
    }

    #[test]
    fn parses_tags() {
        assert_eq!("colors".parse::<Section>().unwrap(), Section::Colors);
        assert!(matches!(
            "extras".parse::<Section>(),
            Err(FormError::UnknownSection(tag)) if tag == "extras"
        ));
    }
}
