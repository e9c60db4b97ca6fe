use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

/// Anchor identifier for a page section.
///
/// Variant order is document order; the scroll tracker and navigator rely
/// on it. `Display`/`FromStr` use the lowercase anchor form (`"home"`,
/// `"about"`, ...) so CLI arguments round-trip through the same names the
/// page uses.
#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, IntoStaticStr, PartialEq,
)]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub fn in_order() -> impl Iterator<Item = SectionId> {
        SectionId::iter()
    }

    /// Human-readable navigation label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn sections_iterate_in_document_order() {
        let order: Vec<SectionId> = SectionId::in_order().collect();
        assert_eq!(
            order,
            vec![
                SectionId::Home,
                SectionId::About,
                SectionId::Skills,
                SectionId::Projects,
                SectionId::Contact,
            ]
        );
    }

    #[test]
    fn anchor_names_round_trip() {
        for section in SectionId::in_order() {
            let anchor = section.to_string();
            assert_eq!(SectionId::from_str(&anchor), Ok(section));
        }
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        assert!(SectionId::from_str("nonexistent").is_err());
        assert!(SectionId::from_str("Home").is_err(), "anchors are lowercase");
    }
}
