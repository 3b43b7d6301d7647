//! Intensity categories and storm kinds used to label a track.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryLabel {
    InvestArea,
    Depression,
    DeepDepression,
    CyclonicStorm,
    Category1,
    Category2,
    Category3,
    Category4,
    Category5,
}

/// Lower bounds in knots, highest first. A value must exceed the bound to
/// enter the band, so 136 kt is still Category 4. Existing charts rely on this.
const THRESHOLDS: [(u16, CategoryLabel); 8] = [
    (136, CategoryLabel::Category5),
    (113, CategoryLabel::Category4),
    (96, CategoryLabel::Category3),
    (83, CategoryLabel::Category2),
    (63, CategoryLabel::Category1),
    (33, CategoryLabel::CyclonicStorm),
    (27, CategoryLabel::DeepDepression),
    (22, CategoryLabel::Depression),
];

/// Classifies a sustained wind speed in knots.
pub fn classify_intensity(knots: u16) -> CategoryLabel {
    THRESHOLDS
        .iter()
        .find(|(bound, _)| knots > *bound)
        .map(|(_, label)| *label)
        .unwrap_or(CategoryLabel::InvestArea)
}

impl CategoryLabel {
    /// Legend order, weakest first.
    pub const ALL: [CategoryLabel; 9] = [
        CategoryLabel::InvestArea,
        CategoryLabel::Depression,
        CategoryLabel::DeepDepression,
        CategoryLabel::CyclonicStorm,
        CategoryLabel::Category1,
        CategoryLabel::Category2,
        CategoryLabel::Category3,
        CategoryLabel::Category4,
        CategoryLabel::Category5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryLabel::InvestArea => "Invest Area",
            CategoryLabel::Depression => "Depression",
            CategoryLabel::DeepDepression => "Deep Depression",
            CategoryLabel::CyclonicStorm => "Cyclonic Storm",
            CategoryLabel::Category1 => "Category 1",
            CategoryLabel::Category2 => "Category 2",
            CategoryLabel::Category3 => "Category 3",
            CategoryLabel::Category4 => "Category 4",
            CategoryLabel::Category5 => "Category 5",
        }
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regional name for a tropical cyclone, from the basin prefix of its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StormKind {
    Hurricane,
    Cyclone,
    Typhoon,
    Storm,
}

impl StormKind {
    pub fn from_storm_id(storm_id: &str) -> Self {
        let basin = basin_code(storm_id);
        match basin.as_str() {
            "AL" | "EP" | "CP" => StormKind::Hurricane,
            "IO" | "SH" | "AA" | "BB" => StormKind::Cyclone,
            "WP" => StormKind::Typhoon,
            _ => StormKind::Storm,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StormKind::Hurricane => "Hurricane",
            StormKind::Cyclone => "Cyclone",
            StormKind::Typhoon => "Typhoon",
            StormKind::Storm => "Storm",
        }
    }
}

impl fmt::Display for StormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-cased two letter basin prefix of a storm id, e.g. `AL` for `al102024`.
pub fn basin_code(storm_id: &str) -> String {
    storm_id
        .chars()
        .take(2)
        .collect::<String>()
        .to_ascii_uppercase()
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_exact_threshold_in_lower_band() {
        assert_eq!(classify_intensity(136), CategoryLabel::Category4);
        assert_eq!(classify_intensity(137), CategoryLabel::Category5);
        assert_eq!(classify_intensity(113), CategoryLabel::Category3);
        assert_eq!(classify_intensity(83), CategoryLabel::Category1);
        assert_eq!(classify_intensity(84), CategoryLabel::Category2);
        assert_eq!(classify_intensity(33), CategoryLabel::DeepDepression);
        assert_eq!(classify_intensity(22), CategoryLabel::InvestArea);
        assert_eq!(classify_intensity(23), CategoryLabel::Depression);
    }

    #[test]
    fn should_classify_extremes() {
        assert_eq!(classify_intensity(0), CategoryLabel::InvestArea);
        assert_eq!(classify_intensity(u16::MAX), CategoryLabel::Category5);
    }

    #[test]
    fn should_never_decrease_with_wind() {
        let labels: Vec<_> = (0..=200).map(classify_intensity).collect();
        assert!(labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn should_display_label() {
        assert_eq!(classify_intensity(85).to_string(), "Category 2");
        assert_eq!(CategoryLabel::ALL.len(), 9);
        assert_eq!(CategoryLabel::ALL[0].to_string(), "Invest Area");
    }

    #[test]
    fn should_get_storm_kind() {
        assert_eq!(StormKind::from_storm_id("AL102024"), StormKind::Hurricane);
        assert_eq!(StormKind::from_storm_id("ep102024"), StormKind::Hurricane);
        assert_eq!(StormKind::from_storm_id("IO022024"), StormKind::Cyclone);
        assert_eq!(StormKind::from_storm_id("SH052025"), StormKind::Cyclone);
        assert_eq!(StormKind::from_storm_id("WP212024"), StormKind::Typhoon);
        assert_eq!(StormKind::from_storm_id("XX"), StormKind::Storm);
        assert_eq!(StormKind::from_storm_id(""), StormKind::Storm);
    }
}
