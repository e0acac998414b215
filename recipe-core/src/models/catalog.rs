//! Static field catalogue used by hosts to render the recipe form.
//!
//! The option lists are suggestions for select inputs. The engine does not
//! restrict those fields to them.

use super::{RecipeField, Section};

/// Parties offered in the party selector.
pub const PARTIES: [&str; 4] = ["Party A", "Party B", "Party C", "Party D"];

/// Fabrics offered in the fabric selector.
pub const FABRICS: [&str; 6] = ["Cotton", "Polyester", "Silk", "Wool", "Linen", "Denim"];

/// Placeholder shown in empty percentage inputs.
pub const PERCENTAGE_PLACEHOLDER: &str = "0.00000";

/// Input widget a host should use for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Dropdown with a leading "Select ..." empty choice.
    Select {
        prompt: &'static str,
        options: &'static [&'static str],
    },
    Text,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// Multi-line text.
    TextArea,
    /// Decimal with up to five fractional digits.
    Percentage,
}

/// Everything a host needs to render one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: RecipeField,
    pub label: &'static str,
    pub kind: FieldKind,
    pub section: Section,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

/// Descriptor for a single field.
pub fn descriptor(field: RecipeField) -> FieldDescriptor {
    let kind = match field {
        RecipeField::Party => FieldKind::Select {
            prompt: "Select Party",
            options: &PARTIES,
        },
        RecipeField::FabricName => FieldKind::Select {
            prompt: "Select Fabric",
            options: &FABRICS,
        },
        RecipeField::Etd => FieldKind::Date,
        RecipeField::Remarks => FieldKind::TextArea,
        f if f.is_percentage() => FieldKind::Percentage,
        _ => FieldKind::Text,
    };

    FieldDescriptor {
        field,
        label: field.label(),
        kind,
        section: field.group(),
        required: true,
        placeholder: matches!(kind, FieldKind::Percentage).then_some(PERCENTAGE_PLACEHOLDER),
    }
}

/// Descriptors for every field, in canonical order.
pub fn descriptors() -> Vec<FieldDescriptor> {
    RecipeField::ALL.into_iter().map(descriptor).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_field_is_required() {
        assert!(descriptors().iter().all(|d| d.required));
    }

    #[test]
    fn party_and_fabric_are_selects_with_catalogue_options() {
        assert_eq!(
            descriptor(RecipeField::Party).kind,
            FieldKind::Select {
                prompt: "Select Party",
                options: &PARTIES
            }
        );
        match descriptor(RecipeField::FabricName).kind {
            FieldKind::Select { options, .. } => assert_eq!(options.len(), 6),
            other => panic!("expected select, got {other:?}"),
        }
    }

    #[test]
    fn only_percentages_carry_a_placeholder() {
        for d in descriptors() {
            assert_eq!(d.placeholder.is_some(), d.field.is_percentage(), "{}", d.field);
        }
    }

    #[test]
    fn etd_is_a_date_in_the_basic_section() {
        let etd = descriptor(RecipeField::Etd);

        assert_eq!(etd.kind, FieldKind::Date);
        assert_eq!(etd.section, Section::Basic);
        assert_eq!(etd.label, "ETD");
    }
}
