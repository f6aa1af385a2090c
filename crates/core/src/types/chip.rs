//! Chip colors for categorical badges.

use serde::{Deserialize, Serialize};

/// Display color of a chip (small colored badge) in the dashboard.
///
/// Names follow the semantic palette of the stylesheet rather than raw
/// colors, so the theme can change without touching the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChipColor {
    /// Green.
    Success,
    /// Yellow.
    Warning,
    /// Blue.
    Primary,
    /// Red.
    Danger,
    /// Purple.
    Secondary,
    /// Neutral grey.
    #[default]
    Default,
}

impl ChipColor {
    /// Semantic name of the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Primary => "primary",
            Self::Danger => "danger",
            Self::Secondary => "secondary",
            Self::Default => "default",
        }
    }

    /// Rendered hue of the color.
    #[must_use]
    pub const fn hue(self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Warning => "yellow",
            Self::Primary => "blue",
            Self::Danger => "red",
            Self::Secondary => "purple",
            Self::Default => "neutral",
        }
    }

    /// CSS classes for styling the chip.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Success => "chip chip-success",
            Self::Warning => "chip chip-warning",
            Self::Primary => "chip chip-primary",
            Self::Danger => "chip chip-danger",
            Self::Secondary => "chip chip-secondary",
            Self::Default => "chip chip-default",
        }
    }
}

impl std::fmt::Display for ChipColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_contains_name() {
        for color in [
            ChipColor::Success,
            ChipColor::Warning,
            ChipColor::Primary,
            ChipColor::Danger,
            ChipColor::Secondary,
            ChipColor::Default,
        ] {
            assert!(color.badge_class().ends_with(color.as_str()));
        }
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(ChipColor::default(), ChipColor::Default);
        assert_eq!(ChipColor::default().hue(), "neutral");
    }
}
