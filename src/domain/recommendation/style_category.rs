//! StyleCategory enum - the fixed style buckets a recommendation is built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Boho palette, used only for [`StyleCategory::Boho`].
pub const BOHO_PALETTE: [&str; 4] = ["#F3E8D3", "#D8C4A0", "#6B705C", "#2B2D2F"];

/// Neutral palette shared by Minimal, Luxury and Modern.
pub const NEUTRAL_PALETTE: [&str; 4] = ["#EAE7E2", "#C8C3BD", "#A8957B", "#1E1E1E"];

/// Keywords checked against the lowercased style text, in precedence order.
const KEYWORDS: [(&str, StyleCategory); 3] = [
    ("minimal", StyleCategory::Minimal),
    ("lux", StyleCategory::Luxury),
    ("modern", StyleCategory::Modern),
];

/// Style bucket selected from a client's free-text style description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StyleCategory {
    Minimal,
    Luxury,
    Modern,
    #[default]
    Boho,
}

impl StyleCategory {
    /// Selects the category for a style description.
    ///
    /// Case-insensitive substring match; the first keyword found in
    /// precedence order wins. Text matching no keyword (including the
    /// empty string) falls back to [`StyleCategory::Boho`].
    pub fn from_style(style: &str) -> Self {
        let style = style.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| style.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }

    /// Color palette associated with this category.
    pub fn palette(&self) -> [&'static str; 4] {
        match self {
            StyleCategory::Boho => BOHO_PALETTE,
            StyleCategory::Minimal | StyleCategory::Luxury | StyleCategory::Modern => {
                NEUTRAL_PALETTE
            }
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StyleCategory::Minimal => "Minimal",
            StyleCategory::Luxury => "Luxury",
            StyleCategory::Modern => "Modern",
            StyleCategory::Boho => "Boho",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn minimal_keyword_selects_minimal() {
        assert_eq!(StyleCategory::from_style("minimal"), StyleCategory::Minimal);
        assert_eq!(
            StyleCategory::from_style("Clean, MINIMALIST lines"),
            StyleCategory::Minimal
        );
    }

    #[test]
    fn lux_keyword_selects_luxury() {
        assert_eq!(StyleCategory::from_style("Luxurious"), StyleCategory::Luxury);
        assert_eq!(StyleCategory::from_style("deluxe suite"), StyleCategory::Luxury);
    }

    #[test]
    fn modern_keyword_selects_modern() {
        assert_eq!(
            StyleCategory::from_style("I want something Modern and sleek"),
            StyleCategory::Modern
        );
    }

    #[test]
    fn minimal_takes_precedence_over_lux() {
        assert_eq!(
            StyleCategory::from_style("luxury but minimal"),
            StyleCategory::Minimal
        );
    }

    #[test]
    fn lux_takes_precedence_over_modern() {
        assert_eq!(
            StyleCategory::from_style("modern luxury"),
            StyleCategory::Luxury
        );
    }

    #[test]
    fn empty_style_falls_back_to_boho() {
        assert_eq!(StyleCategory::from_style(""), StyleCategory::Boho);
    }

    #[test]
    fn unrecognized_style_falls_back_to_boho() {
        assert_eq!(StyleCategory::from_style("boho vibes"), StyleCategory::Boho);
        assert_eq!(StyleCategory::from_style("scandinavian"), StyleCategory::Boho);
    }

    #[test]
    fn only_boho_uses_boho_palette() {
        assert_eq!(StyleCategory::Boho.palette(), BOHO_PALETTE);
        assert_eq!(StyleCategory::Minimal.palette(), NEUTRAL_PALETTE);
        assert_eq!(StyleCategory::Luxury.palette(), NEUTRAL_PALETTE);
        assert_eq!(StyleCategory::Modern.palette(), NEUTRAL_PALETTE);
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", StyleCategory::Minimal), "Minimal");
        assert_eq!(format!("{}", StyleCategory::Luxury), "Luxury");
        assert_eq!(format!("{}", StyleCategory::Modern), "Modern");
        assert_eq!(format!("{}", StyleCategory::Boho), "Boho");
    }

    proptest! {
        #[test]
        fn any_text_containing_minimal_is_minimal(
            prefix in ".{0,20}",
            keyword in "[mM][iI][nN][iI][mM][aA][lL]",
            suffix in ".{0,20}",
        ) {
            let style = format!("{}{}{}", prefix, keyword, suffix);
            prop_assert_eq!(StyleCategory::from_style(&style), StyleCategory::Minimal);
        }

        #[test]
        fn keyword_free_text_is_boho(style in "[0-9 ,.!?bcdfghjkpqrstvwyz]{0,40}") {
            prop_assert_eq!(StyleCategory::from_style(&style), StyleCategory::Boho);
        }

        #[test]
        fn selection_is_deterministic(style in ".{0,60}") {
            prop_assert_eq!(StyleCategory::from_style(&style), StyleCategory::from_style(&style));
        }
    }
}
